mod store;

use std::sync::Arc;

use tokio::sync::Mutex;

pub use store::Created;
pub use store::StoreError;
pub use store::UrlStore;

/// Store handle shared between the backend's request handlers.
pub type SharedStore = Arc<Mutex<UrlStore>>;

pub fn shared_store(short_base: impl Into<String>) -> SharedStore {
    Arc::new(Mutex::new(UrlStore::new(short_base)))
}
