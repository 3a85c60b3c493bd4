//! User server: loads config (and `.env`), opens the SQLite store, serves the user API.
//!
//! Run from repo root: `cargo run -p user-server`

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use user_service::{app, ServiceConfig, SqliteUserStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("user_service=info,user_server=info,tower_http=info")
            }),
        )
        .init();
    if let Ok(path) = &dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    let config = ServiceConfig::from_env()?;

    let store = SqliteUserStore::connect(&config).await?;
    let router = app(Arc::new(store.clone()), &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        docs = config.enable_docs,
        profile = ?config.status_profile,
        "user server listening"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("user server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
}
