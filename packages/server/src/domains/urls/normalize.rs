//! URL validation and canonicalization.
//!
//! A registered site is keyed by `scheme://host[:port]`, lowercased, with the
//! path, query, fragment and credentials dropped. Validation runs in a fixed
//! order: empty input, then malformed URL, then length of both the input and
//! its normalized name.

use url::Url;

use super::errors::UrlValidationError;

/// Longest raw input accepted, in characters (matches the `urls.name` column)
pub const MAX_URL_LENGTH: usize = 255;

/// Check that `raw` is a non-empty, well-formed absolute http(s) URL of acceptable length.
///
/// Surrounding whitespace is trimmed before any check, so the length limit
/// applies to the trimmed input. The normalized name must fit as well: an
/// internationalized host is punycode-encoded and can outgrow the input.
pub fn validate(raw: &str) -> Result<(), UrlValidationError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(UrlValidationError::EmptyInput);
    }

    if !is_well_formed(input) {
        return Err(UrlValidationError::InvalidFormat);
    }

    if exceeds_limit(input) || normalize(input).is_some_and(|name| exceeds_limit(&name)) {
        return Err(UrlValidationError::TooLong);
    }

    Ok(())
}

fn exceeds_limit(text: &str) -> bool {
    text.chars().count() > MAX_URL_LENGTH
}

/// Reduce `raw` to its canonical `scheme://host` form.
///
/// An explicit non-default port is kept. Returns `None` when the input has no host.
pub fn normalize(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    let host = parsed.host_str().filter(|h| !h.is_empty())?;

    let mut name = format!(
        "{}://{}",
        parsed.scheme().to_lowercase(),
        host.to_lowercase()
    );
    if let Some(port) = parsed.port() {
        name.push_str(&format!(":{port}"));
    }

    Some(name)
}

fn is_well_formed(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }

    match Url::parse(input) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}
