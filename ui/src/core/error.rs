//! Error types for the header and its collaborators.

use thiserror::Error;

/// Failures while deriving header data from a location.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("no route matches path {path:?}")]
    RouteResolution { path: String },

    #[error("route {page} is malformed: {reason}")]
    MalformedRoute { page: String, reason: String },

    #[error("unknown sort order {0:?}")]
    UnknownSortOrder(String),
}

impl HeaderError {
    pub(crate) fn malformed(page: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRoute {
            page: page.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failures reported by an analytics sink. Callers log these and move on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("analytics client is not loaded")]
    Unavailable,

    #[error("analytics call {method} failed: {message}")]
    Call { method: &'static str, message: String },
}
