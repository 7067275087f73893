//! HTTP server for the CTC engine.
//!
//! Environment:
//! - `CTC_ENGINE_CONFIG_DIR`: directory of scheme preset YAML files
//!   (default `./config/presets`)
//! - `CTC_ENGINE_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ctc_engine::api::{AppState, create_router};
use ctc_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/presets";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_presets()?;
    info!(
        presets = config.presets().len(),
        default_scheme = %config.default_preset().name,
        "Scheme presets ready"
    );

    let addr: SocketAddr = env::var("CTC_ENGINE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.into())
        .parse()
        .context("CTC_ENGINE_ADDR is not a valid socket address")?;

    let app = create_router(AppState::new(config));

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Loads presets from the configured directory.
///
/// An explicitly configured directory must load. When the variable is unset
/// and the default directory is absent, the built-in presets are used.
fn load_presets() -> anyhow::Result<ConfigLoader> {
    if let Ok(dir) = env::var("CTC_ENGINE_CONFIG_DIR") {
        return ConfigLoader::load(&dir)
            .with_context(|| format!("failed to load scheme presets from {}", dir));
    }

    if Path::new(DEFAULT_CONFIG_DIR).is_dir() {
        return ConfigLoader::load(DEFAULT_CONFIG_DIR)
            .with_context(|| format!("failed to load scheme presets from {}", DEFAULT_CONFIG_DIR));
    }

    warn!(
        dir = DEFAULT_CONFIG_DIR,
        "Preset directory not found, using built-in schemes"
    );
    Ok(ConfigLoader::builtin())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
