//! HTML pages.
//!
//! Pages are plain strings assembled around a shared layout. Every value that
//! came from a user or a fetched page goes through `escape_html`.

use chrono::{DateTime, Utc};

use crate::common::utils::escape_html;
use crate::domains::urls::{Url, UrlCheck, UrlListing, UrlValidationError};
use crate::server::flash::{Flash, FlashLevel};

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; margin: 0; color: #212529; }
    header { background: #212529; padding: 0.75rem 1.5rem; }
    header a { color: #fff; margin-right: 1rem; text-decoration: none; }
    main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #dee2e6; padding: 0.5rem; text-align: left; }
    .alert { padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
    .alert-success { background: #d1e7dd; }
    .alert-info { background: #cff4fc; }
    .alert-error { background: #f8d7da; }
    .invalid { color: #b02a37; margin-top: 0.25rem; }
    input[type=text] { width: 70%; padding: 0.5rem; }
"#;

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = flash.map(render_flash).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <header>
        <a href="/">Page Analyzer</a>
        <a href="/urls">Sites</a>
    </header>
    <main>
        {flash_html}
        {body}
    </main>
</body>
</html>"#,
        title = escape_html(title),
    )
}

fn render_flash(flash: &Flash) -> String {
    let class = match flash.level {
        FlashLevel::Success => "alert-success",
        FlashLevel::Info => "alert-info",
        FlashLevel::Error => "alert-error",
    };
    format!(
        r#"<div class="alert {class}" role="alert">{}</div>"#,
        escape_html(&flash.message)
    )
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Landing page with the "add URL" form, optionally showing a validation error
pub fn render_form_page(
    error: Option<&UrlValidationError>,
    value: &str,
    flash: Option<&Flash>,
) -> String {
    let error_html = error
        .map(|e| format!(r#"<div class="invalid">{}</div>"#, escape_html(&e.to_string())))
        .unwrap_or_default();

    let body = format!(
        r#"<h1>Page Analyzer</h1>
        <p>Check web pages for SEO suitability for free</p>
        <form action="/urls" method="post">
            <input type="text" name="url" value="{value}" placeholder="https://www.example.com" required>
            <button type="submit">Check</button>
            {error_html}
        </form>"#,
        value = escape_html(value),
    );

    layout("Page Analyzer", flash, &body)
}

/// All registered sites with their latest check
pub fn render_url_list(rows: &[UrlListing], flash: Option<&Flash>) -> String {
    let rows_html: String = rows
        .iter()
        .map(|row| {
            format!(
                r#"
            <tr>
                <td>{id}</td>
                <td><a href="/urls/{id}">{name}</a></td>
                <td>{last_check}</td>
                <td>{status}</td>
            </tr>"#,
                id = row.id,
                name = escape_html(&row.name),
                last_check = row
                    .last_check_at
                    .as_ref()
                    .map(format_timestamp)
                    .unwrap_or_default(),
                status = row
                    .last_status_code
                    .map(|code| code.to_string())
                    .unwrap_or_default(),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Sites</h1>
        <table>
            <thead>
                <tr><th>ID</th><th>Name</th><th>Last check</th><th>Response code</th></tr>
            </thead>
            <tbody>{rows_html}
            </tbody>
        </table>"#
    );

    layout("Sites - Page Analyzer", flash, &body)
}

/// One site with its full check history
pub fn render_url_detail(url: &Url, checks: &[UrlCheck], flash: Option<&Flash>) -> String {
    let checks_html: String = checks
        .iter()
        .map(|check| {
            format!(
                r#"
            <tr>
                <td>{id}</td>
                <td>{status}</td>
                <td>{h1}</td>
                <td>{title}</td>
                <td>{description}</td>
                <td>{created_at}</td>
            </tr>"#,
                id = check.id,
                status = check
                    .status_code
                    .map(|code| code.to_string())
                    .unwrap_or_default(),
                h1 = escape_html(&check.h1),
                title = escape_html(&check.title),
                description = escape_html(&check.description),
                created_at = format_timestamp(&check.created_at),
            )
        })
        .collect();

    let name = escape_html(&url.name);
    let body = format!(
        r#"<h1>Site: {name}</h1>
        <table>
            <tbody>
                <tr><td>ID</td><td>{id}</td></tr>
                <tr><td>Name</td><td>{name}</td></tr>
                <tr><td>Created at</td><td>{created_at}</td></tr>
            </tbody>
        </table>
        <h2>Checks</h2>
        <form action="/urls/{id}/checks" method="post">
            <button type="submit">Run check</button>
        </form>
        <table>
            <thead>
                <tr><th>ID</th><th>Response code</th><th>h1</th><th>title</th><th>description</th><th>Created at</th></tr>
            </thead>
            <tbody>{checks_html}
            </tbody>
        </table>"#,
        id = url.id,
        created_at = format_timestamp(&url.created_at),
    );

    layout(&format!("{} - Page Analyzer", url.name), flash, &body)
}
