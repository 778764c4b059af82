//! Shared application state for all routes.

use crate::service::BookGateway;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected once at startup; handlers hold no other shared state.
    pub books: Arc<dyn BookGateway>,
}

impl AppState {
    pub fn new<G>(gateway: G) -> Self
    where
        G: BookGateway + 'static,
    {
        AppState {
            books: Arc::new(gateway),
        }
    }
}
