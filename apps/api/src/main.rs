mod answer;
mod companies;
mod config;
mod errors;
mod evaluation;
mod llm_client;
mod rate_limit;
mod report;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::companies::CompanyDirectory;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::rate_limit::ClientRateLimiter;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast when OPENAI_API_KEY is missing
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting STAR Coach API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(&config)?;
    info!(
        "LLM client initialized (model: {}, base url: {})",
        llm.model(),
        config.openai_base_url
    );

    let companies = CompanyDirectory::builtin();

    let rate_limiter = Arc::new(ClientRateLimiter::new(
        config.rate_limit_per_hour,
        config.rate_limit_per_day,
    ));
    info!(
        "Rate limits: {} per hour, {} per day per client",
        config.rate_limit_per_hour, config.rate_limit_per_day
    );
    tokio::spawn(prune_rate_limiter(rate_limiter.clone()));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let state = AppState {
        generator: Arc::new(llm),
        companies: Arc::new(companies),
        rate_limiter,
        shutdown: shutdown_rx,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        info!("Shutting down, abandoning in-flight evaluations");
        let _ = shutdown_tx.send(true);
    })
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C, graceful shutdown disabled: {e}");
        std::future::pending::<()>().await;
    }
}

/// Periodically forgets clients whose allowances have fully refilled.
async fn prune_rate_limiter(limiter: Arc<ClientRateLimiter>) {
    let mut interval = tokio::time::interval(Duration::from_secs(10 * 60));
    loop {
        interval.tick().await;
        limiter.retain_recent();
    }
}
