//! pjaxguard demo server.
//!
//! - Config: `pjaxguard.yaml` (override with `PJAXGUARD_CONFIG`)
//! - Routes: `/{controller}[/{action}]` behind the pjax filter, `/healthz`
//! - Logging: `RUST_LOG` via tracing-subscriber's EnvFilter

use tracing_subscriber::{fmt, EnvFilter};

use pjaxguard_core::error::{GuardError, Result};
use pjaxguard_gateway::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "pjaxguard.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(code = e.code().as_str(), error = %e, "pjaxguard-gateway exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("PJAXGUARD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let cfg = config::load_from_file(&path)?;

    let state = app_state::AppState::new(cfg)?;
    let listen = state.cfg().server.listen_addr()?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "pjaxguard-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| GuardError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| GuardError::Internal(format!("server failed: {e}")))
}
