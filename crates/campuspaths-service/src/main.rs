//! Campus paths HTTP service.
//!
//! # Configuration
//!
//! - `CAMPUSPATHS_DATA_DIR` - directory holding the campus CSV files (default: `data`)
//! - `CAMPUSPATHS_STRICT` - set to `1` or `true` to reject malformed path records
//! - `SERVICE_PORT` - HTTP port (default: 4567)
//! - `RUST_LOG`, `LOG_FORMAT`, `SERVICE_NAME` - see [`LoggingConfig`]

use std::env;
use std::net::SocketAddr;

use tracing::{error, info};

use campuspaths_lib::{resolve_data_dir, LoadPolicy};
use campuspaths_service::{init_logging, router, AppState, LoggingConfig, DEFAULT_PORT};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::from_env());

    let data_dir = resolve_data_dir(None);
    let policy = match env::var("CAMPUSPATHS_STRICT").as_deref() {
        Ok("1") | Ok("true") => LoadPolicy::Strict,
        _ => LoadPolicy::Tolerant,
    };
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    info!(data_dir = %data_dir.display(), port, ?policy, "starting campus paths service");

    let state = AppState::load(&data_dir, policy).map_err(|e| {
        error!(error = %e, data_dir = %data_dir.display(), "failed to load campus map");
        e
    })?;

    info!(
        buildings = state.map().building_count(),
        "campus map loaded"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
