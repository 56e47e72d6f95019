//! Application state for the web layer.

use std::sync::Arc;

use crate::client::StationRepository;

/// Shared application state.
pub struct AppState<R> {
    /// Where station records live
    pub repo: Arc<R>,
}

impl<R: StationRepository> AppState<R> {
    /// Create a new app state.
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}
