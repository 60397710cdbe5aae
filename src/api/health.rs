use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::management::SharedStore;

pub async fn health(Extension(store): Extension<SharedStore>) -> Json<Value> {
    let urls = store.lock().await.count();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "urls": urls
    }))
}
