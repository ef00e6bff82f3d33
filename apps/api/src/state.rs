use std::sync::Arc;

use crate::completion::CategoryTable;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Validated once at startup and only read afterwards.
    pub table: Arc<CategoryTable>,
}
