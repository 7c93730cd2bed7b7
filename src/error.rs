//! Error types.

use thiserror::Error;

/// Errors reported by the [`Performance`](crate::backend::Performance)
/// backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerformanceError {
    /// A measure referenced a mark that was never recorded, or that was
    /// cleared in the meantime.
    #[error("mark '{name}' does not exist")]
    UnknownMark { name: String },
}
