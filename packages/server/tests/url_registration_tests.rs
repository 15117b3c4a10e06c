mod common;

use chrono::Utc;
use common::{count_urls_named, unique_site, TestHarness};
use page_analyzer::domains::urls::{
    add_url, AddUrlError, AddUrlOutcome, StoreError, Url, UrlValidationError,
};
use test_context::test_context;

// =============================================================================
// Tests: add_url deduplication
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn adding_same_url_twice_creates_one_row(ctx: &TestHarness) {
    let deps = ctx.deps();
    let site = unique_site("twice");

    let first = add_url(&site, &deps).await.unwrap();
    let second = add_url(&site, &deps).await.unwrap();

    let AddUrlOutcome::Added(id) = first else {
        panic!("expected first add to insert, got {first:?}");
    };
    assert_eq!(second, AddUrlOutcome::AlreadyExists(id));
    assert_eq!(count_urls_named(&ctx.db_pool, &site).await.unwrap(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn urls_differing_in_path_and_case_collapse(ctx: &TestHarness) {
    let deps = ctx.deps();
    let site = unique_site("collapse");

    let first = add_url(&format!("{site}/some/page?q=1"), &deps)
        .await
        .unwrap();
    let second = add_url(&format!("{}/other#frag", site.to_uppercase()), &deps)
        .await
        .unwrap();

    assert!(matches!(first, AddUrlOutcome::Added(_)));
    assert_eq!(second, AddUrlOutcome::AlreadyExists(first.url_id()));

    let stored = Url::find_by_id(first.url_id(), &ctx.db_pool)
        .await
        .unwrap()
        .expect("url should exist");
    assert_eq!(stored.name, site);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn concurrent_adds_resolve_to_single_row(ctx: &TestHarness) {
    let deps = ctx.deps();
    let site = unique_site("race");

    let (a, b) = tokio::join!(add_url(&site, &deps), add_url(&site, &deps));
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(a.url_id(), b.url_id());
    let added = [a, b]
        .iter()
        .filter(|o| matches!(o, AddUrlOutcome::Added(_)))
        .count();
    assert_eq!(added, 1);
    assert_eq!(count_urls_named(&ctx.db_pool, &site).await.unwrap(), 1);
}

// =============================================================================
// Tests: validation failures never persist
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn invalid_input_is_rejected_without_insert(ctx: &TestHarness) {
    let deps = ctx.deps();
    let too_long = format!("http://{}", "a".repeat(260));
    let idn_too_long = format!("http://{}", "中".repeat(248));

    let cases = [
        ("", UrlValidationError::EmptyInput),
        ("not a url", UrlValidationError::InvalidFormat),
        (too_long.as_str(), UrlValidationError::TooLong),
        (idn_too_long.as_str(), UrlValidationError::TooLong),
    ];

    for (raw, expected) in cases {
        match add_url(raw, &deps).await {
            Err(AddUrlError::Invalid(kind)) => assert_eq!(kind, expected, "input: {raw:?}"),
            other => panic!("expected validation error for {raw:?}, got {other:?}"),
        }
    }

    assert_eq!(count_urls_named(&ctx.db_pool, &too_long).await.unwrap(), 0);
}

// =============================================================================
// Tests: store-level uniqueness
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn store_enforces_unique_name(ctx: &TestHarness) {
    let site = unique_site("unique");

    Url::create(&site, Utc::now(), &ctx.db_pool).await.unwrap();
    let duplicate = Url::create(&site, Utc::now(), &ctx.db_pool).await;

    match duplicate {
        Err(StoreError::UniqueViolation { name }) => assert_eq!(name, site),
        other => panic!("expected UniqueViolation, got {other:?}"),
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn find_by_name_and_id(ctx: &TestHarness) {
    let site = unique_site("lookup");

    let id = Url::create(&site, Utc::now(), &ctx.db_pool).await.unwrap();

    let by_name = Url::find_by_name(&site, &ctx.db_pool)
        .await
        .unwrap()
        .expect("found by name");
    assert_eq!(by_name.id, id);

    let by_id = Url::find_by_id(id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("found by id");
    assert_eq!(by_id.name, site);

    let missing = Url::find_by_name(&unique_site("missing"), &ctx.db_pool)
        .await
        .unwrap();
    assert!(missing.is_none());
}
