use thiserror::Error;

/// Errors from the drills parsing and lookup helpers.
///
/// The exercises themselves never fail; these only arise when a caller
/// hands in untyped input (JSON, a runtime key) that has to be checked.
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("unknown field `{key}` on {record} (expected one of: {expected})")]
    UnknownField {
        record: &'static str,
        key: String,
        expected: String,
    },

    #[error("invalid shape: {0}")]
    InvalidShape(#[source] serde_json::Error),

    #[error("invalid profile: {0}")]
    InvalidProfile(#[source] serde_json::Error),
}

/// Result type for drills operations.
pub type DrillResult<T> = Result<T, DrillError>;
