// Preview server entry point
//
// Usage: cargo run --features preview --bin explorer_preview

use ntfp_explorer::config::ExplorerConfig;
use ntfp_explorer::preview::{create_router, validate_site, PreviewConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ntfp_explorer=info,tower_http=debug,axum=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PreviewConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  SITE_DIR: {}", config.site_dir.display());
    tracing::info!("  PORT: {}", config.port);

    validate_site(&config.site_dir, &ExplorerConfig::default()).await?;

    let app = create_router(config.site_dir.clone());
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Preview listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
