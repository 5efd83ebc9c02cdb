//! Errors surfaced by workload modules.

use crate::adapter::AdapterError;

/// Errors that can occur while initializing or driving a workload module.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkloadError {
    #[error("Workload module used before initialization")]
    NotInitialized,

    #[error("Invalid worker index {worker_index} for {total_workers} workers")]
    InvalidWorker {
        worker_index: usize,
        total_workers: usize,
    },

    #[error("Missing round argument: {0}")]
    MissingRoundArgument(&'static str),

    #[error("Invalid round argument {name}: expected {expected}")]
    InvalidRoundArgument {
        name: &'static str,
        expected: &'static str,
    },

    #[error("Round arguments must be an object")]
    RoundArgumentsNotObject,

    /// Failure reported by the SUT adapter, passed through untouched.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}
