//! vision-server: HTTP frontend for the NeuroC vision engine
//!
//! Owns the single camera session for the whole process and serves the
//! camera/detection/frame REST API. The camera is released best-effort on
//! shutdown.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use vision_engine::VisionEngine;
use vision_server::{AppConfig, VisionSession, web};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vision_server=debug,tower_http=debug".into()),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("starting vision-server v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::default();
    info!(
        host = %config.host,
        port = config.port,
        cascade = %config.cascade_path.display(),
        "configuration loaded"
    );

    let engine = build_engine()?;
    let session = Arc::new(VisionSession::new(engine, config.cascade_path.clone()));

    let app = web::router(Arc::clone(&session));
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(session))
        .await?;

    Ok(())
}

#[cfg(feature = "native")]
fn build_engine() -> Result<Box<dyn VisionEngine>> {
    Ok(Box::new(vision_engine::NativeEngine::new()))
}

#[cfg(not(feature = "native"))]
fn build_engine() -> Result<Box<dyn VisionEngine>> {
    anyhow::bail!(
        "built without the `native` feature, so no vision engine is available; \
         rebuild with `--features native` on a machine with the NeuroCComVision library"
    )
}

/// Wait for ctrl-c, then release the camera once before the server drains.
async fn shutdown_signal(session: Arc<VisionSession>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown requested, releasing camera");
    let _ = tokio::task::spawn_blocking(move || session.shutdown()).await;
}
