use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use completion_api::config::Config;
use completion_api::routes::build_router;
use completion_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting completion API v{}", env!("CARGO_PKG_VERSION"));

    // A missing or invalid table aborts startup.
    let table = config.load_table()?;
    match &config.table_path {
        Some(path) => info!("Category table loaded from {}", path.display()),
        None => info!("Using built-in category table"),
    }
    for category in table.categories() {
        info!(
            key = category.key(),
            weight = category.weight(),
            fields = category.fields().len(),
            "Category registered"
        );
    }

    let state = AppState {
        config: config.clone(),
        table: Arc::new(table),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
