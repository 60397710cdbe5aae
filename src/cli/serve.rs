use crate::{config, error, management, server};

pub async fn serve(addr: Option<String>) {
    let addr = addr.unwrap_or_else(config::server_addr);
    let store = management::shared_store(config::short_base());

    if let Err(e) = server::start_api_server(&addr, store).await {
        error!("Failed to run server on {}: {}", addr, e);
    }
}
