mod common;

use axum::http::StatusCode;
use serde_json::json;
use shorturl::{
    client::UrlClient,
    error::{ExpandError, ShortenError},
};

use common::{FULL_URL, Hits};

#[tokio::test]
async fn test_shorten_returns_server_assigned_short_url() {
    let hits = Hits::default();
    let client = UrlClient::new(common::spawn(common::stub(hits.clone())).await);

    let created = client.shorten(FULL_URL).await.unwrap();

    assert_eq!(created.short_url.as_deref(), Some("abc123"));
    // The stub echoes the request body, so this checks what was sent
    assert_eq!(created.full_url.as_deref(), Some(FULL_URL));
    assert_eq!(created.id, Some(1));
    assert!(created.creation_date_time.is_some());
    assert!(created.expiration_date_time.is_none());
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn test_shorten_is_not_cached() {
    let hits = Hits::default();
    let client = UrlClient::new(common::spawn(common::stub(hits.clone())).await);

    assert_eq!(client.shorten_url(FULL_URL).await.unwrap(), "abc123");
    assert_eq!(client.shorten_url(FULL_URL).await.unwrap(), "abc123");

    // Identical inputs still hit the server every time
    assert_eq!(hits.count(), 2);
}

#[tokio::test]
async fn test_shorten_rejects_blank_url_without_request() {
    let hits = Hits::default();
    let client = UrlClient::new(common::spawn(common::stub(hits.clone())).await);

    assert!(matches!(client.shorten("").await, Err(ShortenError::EmptyUrl)));
    assert!(matches!(client.shorten("   ").await, Err(ShortenError::EmptyUrl)));
    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn test_shorten_failures() {
    let base = common::spawn(common::create_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "title": "boom" }),
    ))
    .await;
    let result = UrlClient::new(base).shorten(FULL_URL).await;
    assert!(matches!(result, Err(ShortenError::Status(500))));

    let base = common::spawn(common::create_stub(StatusCode::CREATED, json!({ "id": 3 }))).await;
    let result = UrlClient::new(base).shorten(FULL_URL).await;
    assert!(matches!(result, Err(ShortenError::Malformed(_))));

    let result = UrlClient::new(common::unreachable_base().await)
        .shorten(FULL_URL)
        .await;
    assert!(matches!(result, Err(ShortenError::Http(_))));
}

#[tokio::test]
async fn test_expand_resolves_full_url() {
    let hits = Hits::default();
    let client = UrlClient::new(common::spawn(common::stub(hits.clone())).await);

    assert_eq!(client.expand("abc123").await.unwrap(), FULL_URL);
}

#[tokio::test]
async fn test_expand_classifies_404_as_not_found() {
    let client = UrlClient::new(common::spawn(common::stub(Hits::default())).await);

    let err = client.expand("zzz999").await.unwrap_err();

    assert_eq!(
        err,
        ExpandError::NotFound {
            short_url: "zzz999".to_string()
        }
    );
    assert_eq!(err.to_string(), "zzz999 URL not found");
}

#[tokio::test]
async fn test_expand_classifies_everything_else_as_other() {
    let client = UrlClient::new(common::spawn(common::stub(Hits::default())).await);

    for short in ["boom", "teapot", "empty", "garbage"] {
        let err = client.expand(short).await.unwrap_err();
        assert!(
            matches!(err, ExpandError::Other { .. }),
            "{} should be Other, got {:?}",
            short,
            err
        );
        assert_eq!(err.to_string(), "An error occurred");
    }

    let err = UrlClient::new(common::unreachable_base().await)
        .expand("abc123")
        .await
        .unwrap_err();
    assert!(matches!(err, ExpandError::Other { .. }));
}

#[tokio::test]
async fn test_expand_forwards_short_url_verbatim() {
    let client = UrlClient::new(common::spawn(common::stub(Hits::default())).await);

    let short = "echo:a b&c=d/é?";
    assert_eq!(client.expand(short).await.unwrap(), short);
}

#[tokio::test]
async fn test_expand_is_idempotent_and_not_cached() {
    let hits = Hits::default();
    let client = UrlClient::new(common::spawn(common::stub(hits.clone())).await);

    let first = client.expand("abc123").await;
    let second = client.expand("abc123").await;
    assert_eq!(first, second);

    let first = client.expand("zzz999").await;
    let second = client.expand("zzz999").await;
    assert_eq!(first, second);

    assert_eq!(hits.count(), 4);
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_ignored() {
    let base = common::spawn(common::stub(Hits::default())).await;
    let client = UrlClient::new(format!("{}/", base));

    assert_eq!(client.base_url(), base);
    assert_eq!(client.expand("abc123").await.unwrap(), FULL_URL);
}

#[tokio::test]
async fn test_zoneless_timestamps_do_not_break_success() {
    let base = common::spawn(common::lookup_stub(json!({
        "fullUrl": FULL_URL,
        "creationDateTime": "2024-01-01T00:00:00"
    })))
    .await;
    assert_eq!(UrlClient::new(base).expand("abc123").await.unwrap(), FULL_URL);

    let base = common::spawn(common::create_stub(
        StatusCode::CREATED,
        json!({
            "id": 1,
            "shortUrl": "abc123",
            "creationDateTime": "2024-01-01T00:00:00",
            "expirationDateTime": "next tuesday"
        }),
    ))
    .await;
    let created = UrlClient::new(base).shorten(FULL_URL).await.unwrap();

    assert_eq!(created.short_url.as_deref(), Some("abc123"));
    // Zoneless values are read as UTC, unreadable ones are dropped
    assert_eq!(
        created.creation_date_time.map(|t| t.to_rfc3339()),
        Some("2024-01-01T00:00:00+00:00".to_string())
    );
    assert!(created.expiration_date_time.is_none());
}

#[tokio::test]
async fn test_shorten_maps_404_status() {
    let base = common::spawn(common::create_stub(StatusCode::NOT_FOUND, json!({}))).await;
    let result = UrlClient::new(base).shorten(FULL_URL).await;

    assert!(matches!(result, Err(ShortenError::Status(404))));
}
