//! RFC 9457 Problem Details for error responses.
//!
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::{header, HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};

use campuspaths_lib::{Error as LibError, ErrorKind};

/// Problem type URI for unknown building short names.
pub const PROBLEM_UNKNOWN_BUILDING: &str = "/problems/unknown-building";

/// Problem type URI for building pairs with no connecting walkway.
pub const PROBLEM_PATH_NOT_FOUND: &str = "/problems/path-not-found";

/// Problem type URI for missing or malformed query parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// RFC 9457 Problem Details response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Request path that produced the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// 400 for missing or malformed query parameters.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(PROBLEM_INVALID_REQUEST, "Invalid Request", StatusCode::BAD_REQUEST)
            .with_detail(detail)
    }

    /// 400 for a short name that is not registered.
    pub fn unknown_building(name: &str, suggestions: &[String]) -> Self {
        let detail = if suggestions.is_empty() {
            format!("{name} is not a short name")
        } else {
            format!(
                "{name} is not a short name. Did you mean: {}?",
                suggestions.join(", ")
            )
        };
        Self::new(PROBLEM_UNKNOWN_BUILDING, "Unknown Building", StatusCode::BAD_REQUEST)
            .with_detail(detail)
    }

    /// 422 for two buildings that no walkway connects.
    pub fn path_not_found(start: &str, goal: &str) -> Self {
        Self::new(
            PROBLEM_PATH_NOT_FOUND,
            "Path Not Found",
            StatusCode::UNPROCESSABLE_ENTITY,
        )
            .with_detail(format!("No path between {start} and {goal}"))
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.detail.as_deref().unwrap_or(""))
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = Json(&self).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_CONTENT_TYPE));
        *response.status_mut() = status;
        response
    }
}

/// Map a library error onto the matching problem.
pub fn from_lib_error(error: &LibError) -> ProblemDetails {
    match error {
        LibError::UnknownBuilding { name, suggestions } => {
            ProblemDetails::unknown_building(name, suggestions)
        }
        LibError::PathNotFound { start, goal } => ProblemDetails::path_not_found(start, goal),
        other => match other.kind() {
            ErrorKind::InvalidArgument => ProblemDetails::bad_request(other.to_string()),
            ErrorKind::NotFound | ErrorKind::Data => {
                ProblemDetails::internal_error(other.to_string())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_building_lists_suggestions() {
        let problem = ProblemDetails::unknown_building("ABD", &["ABC".to_string()]);
        assert_eq!(problem.status, 400);
        assert_eq!(problem.type_uri, PROBLEM_UNKNOWN_BUILDING);
        assert_eq!(
            problem.detail.as_deref(),
            Some("ABD is not a short name. Did you mean: ABC?")
        );
    }

    #[test]
    fn lib_errors_map_to_status_codes() {
        let unreachable = LibError::PathNotFound {
            start: "ABC".to_string(),
            goal: "ZZZ".to_string(),
        };
        assert_eq!(
            from_lib_error(&unreachable).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let unknown = LibError::UnknownBuilding {
            name: "QQQ".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(from_lib_error(&unknown).status_code(), StatusCode::BAD_REQUEST);

        let data = LibError::DatasetValidation {
            message: "broken".to_string(),
        };
        assert_eq!(
            from_lib_error(&data).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn problem_serializes_type_field() {
        let problem = ProblemDetails::bad_request("origin missing").with_instance("/path");
        let value = serde_json::to_value(&problem).unwrap();
        assert_eq!(value["type"], PROBLEM_INVALID_REQUEST);
        assert_eq!(value["instance"], "/path");
        assert_eq!(value["detail"], "origin missing");
    }
}
