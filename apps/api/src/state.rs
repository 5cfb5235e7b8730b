use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::styles::kv::FileKvStore;
use crate::styles::store::StyleStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Saved-styles store. The save/delete read-modify-write sequence is not
    /// atomic, so writers are serialized behind this mutex.
    pub styles: Arc<Mutex<StyleStore<FileKvStore>>>,
}
