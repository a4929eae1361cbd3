//! Error types for bbox intersection queries.

use thiserror::Error;

/// Failures surfaced while reading input or dispatching a query.
///
/// A well-formed bbox paired with a recognized geometry never fails; the
/// predicate itself always produces a boolean.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IntersectError {
    /// The `type` tag is missing or names no supported geometry.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),

    /// Bbox or coordinate data has the wrong shape or inverted bounds.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// `GeometryCollection` nesting went past the configured limit.
    #[error("geometry collection nesting exceeds depth limit of {limit}")]
    DepthExceeded {
        /// Configured maximum nesting depth.
        limit: usize,
    },

    /// Text input was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for bbox intersection queries.
pub type IntersectResult<T> = Result<T, IntersectError>;
