use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use healthbot_backend::config::Settings;
use healthbot_backend::routes::{ROUTES, create_app};
use healthbot_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    init_tracing();

    let addr = settings.bind_addr();
    let state = AppState::new(settings).context("Failed to build provider client")?;

    let api_key = if state.provider.is_some() { "Present" } else { "Missing" };
    tracing::info!(
        api_key,
        static_dir = %state.settings.static_dir.display(),
        model = %state.settings.gemini_model,
        "Configuration loaded"
    );
    if state.provider.is_none() {
        tracing::warn!("GOOGLE_GEMINI_API_KEY is not set; chat requests will fail");
    }

    let app = create_app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Server running at http://{}", listener.local_addr()?);
    for (method, path) in ROUTES {
        tracing::info!("  {method:<4} {path}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
