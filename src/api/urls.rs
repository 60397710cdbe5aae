use axum::{
    Extension, Json,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    info,
    management::{Created, SharedStore, StoreError},
    types::{LookupQuery, ShortenedUrl},
    warning,
};

/// `POST /api/urls`: creates a short URL for the `fullUrl` in the body.
///
/// Answers `201 Created` with a `Location` header for a new entity, `200 OK`
/// with the stored entity when the short URL already exists, and `400` when the
/// body carries an `id` or no full URL.
pub async fn create_url(
    Extension(store): Extension<SharedStore>,
    Json(body): Json<ShortenedUrl>,
) -> Response {
    let created = store.lock().await.create(body);

    match created {
        Ok(Created::New(url)) => {
            let location = format!("/api/urls/{}", url.id.unwrap_or_default());
            info!(
                "Created {} -> {}",
                url.short_url.as_deref().unwrap_or_default(),
                url.full_url.as_deref().unwrap_or_default()
            );
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(url),
            )
                .into_response()
        }
        Ok(Created::Existing(url)) => (StatusCode::OK, Json(url)).into_response(),
        Err(StoreError::IdPresent) => {
            bad_request("A new url cannot already have an ID", "idexists")
        }
        Err(StoreError::MissingFullUrl) => bad_request("A full url is required", "fullurlmissing"),
    }
}

/// `GET /api/urls/shorturl?url=`: looks up the entity for a short URL.
pub async fn find_by_short_url(
    Extension(store): Extension<SharedStore>,
    Query(query): Query<LookupQuery>,
) -> Response {
    let Some(short_url) = query.url else {
        return bad_request("Missing url parameter", "urlmissing");
    };

    let store = store.lock().await;
    match store.find_by_short_url(&short_url) {
        Some(url) => (StatusCode::OK, Json(url.clone())).into_response(),
        None => {
            warning!("Unknown short url {}", short_url);
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "title": "Not Found", "status": 404 })),
            )
                .into_response()
        }
    }
}

fn bad_request(title: &str, key: &str) -> Response {
    warning!("Rejected create request: {}", title);
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "title": title, "errorKey": key, "status": 400 })),
    )
        .into_response()
}
