//! HTTP front end for the campus map.
//!
//! # Endpoints
//!
//! - `GET /buildings` - sorted building short names
//! - `GET /longname?name=ABC` or `GET /longname?names=["ABC","BCD"]` - long names
//! - `GET /path?origin=ABC&terminus=BCD` - shortest walking path
//! - `GET /health/live` - liveness probe
//!
//! Errors use RFC 9457 problem documents (see [`ProblemDetails`]).

#![deny(warnings)]

pub mod handlers;
pub mod logging;
mod problem;
mod state;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_PATH_NOT_FOUND, PROBLEM_UNKNOWN_BUILDING,
};
pub use state::AppState;

/// Port used when `SERVICE_PORT` is unset.
pub const DEFAULT_PORT: u16 = 4567;

/// Build the application router with CORS and request tracing applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/buildings", get(handlers::buildings))
        .route("/longname", get(handlers::long_name))
        .route("/path", get(handlers::path))
        .route("/health/live", get(handlers::health_live))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
