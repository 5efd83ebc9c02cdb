//! Workload module contract and the shared initialization every module
//! delegates to.

use crate::adapter::{SutAdapter, SutContext};
use crate::error::WorkloadError;
use crate::round::RoundArguments;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// A pluggable unit defining what transaction a benchmark round submits.
///
/// The harness owns scheduling: it calls [`initialize`](Self::initialize)
/// once per round, then [`submit_transaction`](Self::submit_transaction)
/// repeatedly and possibly concurrently, then [`cleanup`](Self::cleanup).
#[async_trait]
pub trait WorkloadModule: Send + Sync {
    /// Prepare the module for a round.
    ///
    /// * `worker_index` - 0-based index of the worker owning this module
    /// * `total_workers` - number of workers taking part in the round
    /// * `round_index` - 0-based index of the round being executed
    /// * `round_arguments` - user-provided arguments for the round
    /// * `sut_adapter` - adapter for the system under test
    /// * `sut_context` - adapter-provided custom context
    async fn initialize(
        &mut self,
        worker_index: usize,
        total_workers: usize,
        round_index: usize,
        round_arguments: RoundArguments,
        sut_adapter: Arc<dyn SutAdapter>,
        sut_context: SutContext,
    ) -> Result<(), WorkloadError>;

    /// Submit one transaction and await its completion.
    async fn submit_transaction(&self) -> Result<(), WorkloadError>;

    /// Release per-round resources. Nothing to do by default.
    async fn cleanup(&mut self) -> Result<(), WorkloadError> {
        Ok(())
    }
}

/// Everything a module is handed at initialization, stored unchanged.
#[derive(Clone)]
pub struct WorkloadContext {
    pub worker_index: usize,
    pub total_workers: usize,
    pub round_index: usize,
    pub round_arguments: RoundArguments,
    pub sut_adapter: Arc<dyn SutAdapter>,
    pub sut_context: SutContext,
}

impl std::fmt::Debug for WorkloadContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkloadContext")
            .field("worker_index", &self.worker_index)
            .field("total_workers", &self.total_workers)
            .field("round_index", &self.round_index)
            .field("round_arguments", &self.round_arguments)
            .field("sut_context", &self.sut_context)
            .finish_non_exhaustive()
    }
}

/// Shared initialization behavior for workload modules.
///
/// Captures the six initialization parameters as-is. Only a worker index
/// outside `0..total_workers` is rejected.
pub fn initialize_base(
    worker_index: usize,
    total_workers: usize,
    round_index: usize,
    round_arguments: RoundArguments,
    sut_adapter: Arc<dyn SutAdapter>,
    sut_context: SutContext,
) -> Result<WorkloadContext, WorkloadError> {
    if worker_index >= total_workers {
        return Err(WorkloadError::InvalidWorker {
            worker_index,
            total_workers,
        });
    }

    debug!(
        worker_index,
        total_workers,
        round_index,
        round_arguments = round_arguments.len(),
        "Workload module initialized"
    );

    Ok(WorkloadContext {
        worker_index,
        total_workers,
        round_index,
        round_arguments,
        sut_adapter,
        sut_context,
    })
}
