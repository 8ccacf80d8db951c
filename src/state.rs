//! Shared application state.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// State injected into every handler.
///
/// Read-only for the lifetime of the process; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>) -> Self {
        Self { shortener }
    }
}
