use std::sync::Arc;

use tokio::sync::watch;

use crate::companies::CompanyDirectory;
use crate::llm_client::Generator;
use crate::rate_limit::ClientRateLimiter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text generation backend. `LlmClient` in production, a stub in tests.
    pub generator: Arc<dyn Generator>,
    pub companies: Arc<CompanyDirectory>,
    pub rate_limiter: Arc<ClientRateLimiter>,
    /// Flips to `true` once the server starts shutting down.
    pub shutdown: watch::Receiver<bool>,
}

impl AppState {
    /// Resolves when shutdown begins. Never resolves if the sender is dropped
    /// without signalling.
    pub async fn shutdown_requested(&self) {
        let mut shutdown = self.shutdown.clone();
        loop {
            if *shutdown.borrow_and_update() {
                return;
            }
            if shutdown.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
