#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Extension, Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const FULL_URL: &str = "https://example.com/very/long/path";

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port nobody listens on.
pub async fn unreachable_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

async fn create(Extension(hits): Extension<Hits>, Json(body): Json<Value>) -> Response {
    hits.hit();
    let full_url = body["fullUrl"].clone();
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 1,
            "shortUrl": "abc123",
            "fullUrl": full_url,
            "creationDateTime": "2024-01-01T00:00:00Z",
            "expirationDateTime": null
        })),
    )
        .into_response()
}

async fn lookup(
    Extension(hits): Extension<Hits>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    hits.hit();
    let url = params.get("url").cloned().unwrap_or_default();
    match url.as_str() {
        "abc123" => Json(json!({ "id": 1, "shortUrl": "abc123", "fullUrl": FULL_URL })).into_response(),
        "boom" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "teapot" => StatusCode::IM_A_TEAPOT.into_response(),
        "empty" => Json(json!({ "shortUrl": "empty" })).into_response(),
        "garbage" => (StatusCode::OK, "not json").into_response(),
        u if u.starts_with("echo:") => Json(json!({ "fullUrl": u })).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Backend stub with canned answers for every branch of the client.
pub fn stub(hits: Hits) -> Router {
    Router::new()
        .route("/api/urls", post(create))
        .route("/api/urls/shorturl", get(lookup))
        .layer(Extension(hits))
}

/// Backend stub whose create endpoint answers with `status` and `body`.
pub fn create_stub(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/api/urls",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)).into_response() }
        }),
    )
}

/// Backend stub whose lookup endpoint always answers 200 with `body`.
pub fn lookup_stub(body: Value) -> Router {
    Router::new().route(
        "/api/urls/shorturl",
        get(move || {
            let body = body.clone();
            async move { Json(body).into_response() }
        }),
    )
}
