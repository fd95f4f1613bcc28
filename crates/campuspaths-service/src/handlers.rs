//! Request handlers. All campus logic lives in `campuspaths-lib`; these only
//! parse query parameters and shape responses.

use axum::{
    extract::{Query, State},
    http::Uri,
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::problem::{from_lib_error, ProblemDetails};
use crate::state::AppState;

/// Query parameters accepted by `GET /longname`.
#[derive(Debug, Deserialize)]
pub struct LongNameQuery {
    /// A single short name.
    pub name: Option<String>,
    /// A JSON array of short names.
    pub names: Option<String>,
}

/// Query parameters accepted by `GET /path`.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub origin: Option<String>,
    pub terminus: Option<String>,
}

/// Body of `GET /health/live`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub buildings_loaded: usize,
}

/// `GET /buildings`: sorted short names of every building.
pub async fn buildings(State(state): State<AppState>) -> Json<Vec<String>> {
    let names: Vec<String> = state.map().building_names().into_keys().collect();
    debug!(count = names.len(), "listing buildings");
    Json(names)
}

/// `GET /longname`: resolve one short name, or a JSON array of them.
///
/// A batch answers 200 when every name resolves, 207 when only some do and
/// 400 when none do; unresolved entries are `null`.
pub async fn long_name(
    State(state): State<AppState>,
    Query(query): Query<LongNameQuery>,
) -> Response {
    let map = state.map();

    if let Some(name) = query.name {
        return match map.long_name_for_short(&name) {
            Ok(long) => (StatusCode::OK, long.to_string()).into_response(),
            Err(error) => from_lib_error(&error)
                .with_instance("/longname")
                .into_response(),
        };
    }

    let Some(raw) = query.names else {
        return ProblemDetails::bad_request("expected a name or names query parameter")
            .with_instance("/longname")
            .into_response();
    };

    let names: Vec<String> = match serde_json::from_str(&raw) {
        Ok(names) => names,
        Err(error) => {
            return ProblemDetails::bad_request(format!("names is not a JSON string array: {error}"))
                .with_instance("/longname")
                .into_response();
        }
    };

    let long_names: Vec<Option<String>> = names
        .iter()
        .map(|name| map.long_name_for_short(name).ok().map(str::to_string))
        .collect();
    let resolved = long_names.iter().filter(|name| name.is_some()).count();
    let status = if resolved == 0 {
        StatusCode::BAD_REQUEST
    } else if resolved == names.len() {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };
    debug!(requested = names.len(), resolved, "resolved long names");
    (status, Json(long_names)).into_response()
}

/// `GET /path`: shortest walking route between two buildings.
pub async fn path(State(state): State<AppState>, Query(query): Query<PathQuery>) -> Response {
    let (Some(origin), Some(terminus)) = (query.origin, query.terminus) else {
        return ProblemDetails::bad_request("origin or terminus not present")
            .with_instance("/path")
            .into_response();
    };

    match state.map().find_shortest_path(&origin, &terminus) {
        Ok(path) => {
            info!(
                origin = %origin,
                terminus = %terminus,
                segments = path.len(),
                cost = path.cost(),
                "path computed"
            );
            Json(path).into_response()
        }
        Err(error) => {
            info!(origin = %origin, terminus = %terminus, error = %error, "path request failed");
            from_lib_error(&error).with_instance("/path").into_response()
        }
    }
}

/// `GET /health/live`.
pub async fn health_live(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        buildings_loaded: state.map().building_count(),
    })
}

/// Fallback for unrouted requests.
pub async fn not_found(uri: Uri) -> ProblemDetails {
    ProblemDetails::new("about:blank", "Not Found", StatusCode::NOT_FOUND)
        .with_detail("Page not found")
        .with_instance(uri.path())
}
