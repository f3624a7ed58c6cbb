//! Dispatch error types.

use thiserror::Error;

/// Errors raised by the dispatcher itself.
///
/// The loop algorithms add no error kinds of their own; these only describe
/// failures to launch or join a dispatched task.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Dispatched mode was used outside a Tokio runtime
    #[error("Dispatched loop requires a Tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    /// The runtime shut down before the dispatched loop completed
    #[error("Dispatched {kind} loop was cancelled before completing")]
    Cancelled { kind: &'static str },
}
