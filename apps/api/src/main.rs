use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cvmatch::config::Config;
use cvmatch::jobs::{default_jobs, load_jobs_file};
use cvmatch::routes::build_router;
use cvmatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV match API v{}", env!("CARGO_PKG_VERSION"));

    // Seed the job repository
    let jobs = match &config.jobs_file {
        Some(path) => {
            let jobs = load_jobs_file(path)?;
            info!("Loaded {} jobs from {}", jobs.len(), path.display());
            jobs
        }
        None => {
            let jobs = default_jobs();
            info!("Seeded {} default jobs", jobs.len());
            jobs
        }
    };

    info!(
        "Minimum match threshold: {}, request timeout: {:?}",
        config.min_match_threshold, config.request_timeout
    );

    let state = AppState::new(config.clone(), jobs);

    // Build router
    let app = build_router(state)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
