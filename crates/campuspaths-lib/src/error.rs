use std::fmt;

use thiserror::Error;

/// Convenient result alias for the campus paths library.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure categories callers can branch on without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A node or edge endpoint referenced by a graph operation is absent.
    NotFound,
    /// Malformed input at the domain boundary (unknown building, unreachable pair).
    InvalidArgument,
    /// The building or path data could not be read or failed validation.
    Data,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Data => "data",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a graph operation references a node that is not in the graph.
    #[error("node {node} is not in the graph")]
    NodeNotFound { node: String },

    /// Raised when a shortest-path query names a start or goal outside the graph.
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    /// Raised when no path connects the requested start and goal.
    #[error("no path found between {start} and {goal}")]
    PathNotFound { start: String, goal: String },

    /// Raised when a building short name could not be found in the registry.
    #[error("unknown building: {name}{}", format_suggestions(.suggestions))]
    UnknownBuilding {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised under the strict load policy when a path record is malformed.
    #[error("invalid path record at line {line}: {message}")]
    InvalidPathRecord { line: usize, message: String },

    /// Raised when building or path data fails validation.
    #[error("invalid campus data: {message}")]
    DatasetValidation { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Classify the error into the coarse failure taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NodeNotFound { .. } => ErrorKind::NotFound,
            Error::UnknownNode { .. }
            | Error::PathNotFound { .. }
            | Error::UnknownBuilding { .. } => ErrorKind::InvalidArgument,
            Error::InvalidPathRecord { .. }
            | Error::DatasetValidation { .. }
            | Error::Io(_)
            | Error::Csv(_) => ErrorKind::Data,
        }
    }

    pub(crate) fn node_not_found(node: &impl fmt::Debug) -> Self {
        Error::NodeNotFound {
            node: format!("{node:?}"),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_building_lists_suggestions() {
        let error = Error::UnknownBuilding {
            name: "ABD".to_string(),
            suggestions: vec!["ABC".to_string(), "ABE".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "unknown building: ABD. Did you mean one of: 'ABC', 'ABE'?"
        );
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn node_not_found_is_not_found_kind() {
        let error = Error::node_not_found(&"A");
        assert_eq!(error.to_string(), "node \"A\" is not in the graph");
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }
}
