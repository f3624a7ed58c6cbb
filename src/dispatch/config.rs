//! Dispatcher configuration.

use serde::{Deserialize, Serialize};

/// Where a loop runs relative to its caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Run directly on the caller's execution context
    Blocking,

    /// Run on a separately scheduled task, with the caller awaiting it
    #[default]
    Dispatched,
}

/// Serializable dispatcher settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Execution mode for every loop run through the dispatcher
    pub mode: ExecutionMode,
}

impl DispatchConfig {
    pub fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }
}
