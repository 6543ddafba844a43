//! # Error Types
//!
//! The analysis pipeline itself has no failure path: unknown products,
//! empty input, and zero-signal audience scoring are all valid results.
//! Errors arise only at the configuration edge — parsing a caller-supplied
//! corpus or an issue tag. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.

use thiserror::Error;

/// Top-level error type for the MLR stack.
#[derive(Error, Debug)]
pub enum MlrError {
    /// A caller-supplied corpus document failed to parse.
    #[error("corpus parse error: {0}")]
    CorpusParse(#[from] serde_json::Error),

    /// A corpus document parsed but violated a structural rule.
    #[error("invalid corpus: {0}")]
    CorpusInvalid(String),

    /// An issue tag did not name a known [`IssueKind`](crate::IssueKind).
    #[error("unknown issue kind: {0:?}")]
    UnknownIssueKind(String),
}
