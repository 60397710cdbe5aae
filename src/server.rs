use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};
use tokio::net::TcpListener;

use crate::{
    Res, api,
    client::{LOOKUP_PATH, URLS_PATH},
    info,
    management::SharedStore,
};

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(URLS_PATH, post(api::create_url))
        .route(LOOKUP_PATH, get(api::find_by_short_url))
        .layer(Extension(store))
}

/// Binds `addr` and serves the reference backend until the process ends.
pub async fn start_api_server(addr: &str, store: SharedStore) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = TcpListener::bind(&addr).await?;

    info!("Serving on http://{}", listener.local_addr()?);
    axum::serve(listener, router(store)).await?;
    Ok(())
}
