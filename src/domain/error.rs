use thiserror::Error;

use crate::domain::key_path::KeyPath;

/// Faults raised while evaluating a check.
///
/// A fault is not a validation result; the harness records it as `error`.
#[derive(Debug, Error)]
pub enum CheckFault {
    /// Expected-value pattern is not a valid regular expression.
    #[error("invalid expected-value pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Check was handed an empty key path.
    #[error("key path must not be empty")]
    EmptyKeyPath,

    /// Value at a path cannot be rendered for comparison.
    #[error("value at {path} cannot be rendered: {source}")]
    RenderValue {
        path: KeyPath,
        #[source]
        source: serde_json::Error,
    },
}
