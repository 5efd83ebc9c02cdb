//! Sequential driver loop around a single workload module.

use crate::config::RoundConfig;
use assetbench_workload::{SutAdapter, SutContext, WorkloadError, WorkloadModule};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Worker placement and submission count for one driver run.
#[derive(Debug, Clone)]
pub struct RoundPlan {
    pub worker_index: usize,
    pub total_workers: usize,
    pub round_index: usize,
    pub submissions: u64,
}

impl Default for RoundPlan {
    fn default() -> Self {
        Self {
            worker_index: 0,
            total_workers: 1,
            round_index: 0,
            submissions: 1,
        }
    }
}

/// Report generated after a driver run.
#[derive(Debug, Clone)]
pub struct RoundReport {
    /// Round label from configuration.
    pub label: String,
    /// Submissions attempted.
    pub submitted: u64,
    /// Submissions that completed without error.
    pub succeeded: u64,
    /// Submissions that returned an error.
    pub failed: u64,
    /// Wall-clock time spent submitting.
    pub duration: Duration,
}

impl RoundReport {
    /// Submissions per second over the run.
    pub fn throughput(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.submitted as f64 / secs
        } else {
            0.0
        }
    }

    /// Whether every attempted submission failed.
    pub fn all_failed(&self) -> bool {
        self.submitted > 0 && self.failed == self.submitted
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("\n=== Round Report: {} ===", self.label);
        println!("Duration: {:?}", self.duration);
        println!("Submitted: {}", self.submitted);
        println!("Succeeded: {}", self.succeeded);
        println!("Failed: {}", self.failed);
        println!("Throughput: {:.2} tx/s", self.throughput());
    }
}

/// Initialize `module`, submit `plan.submissions` times, then clean up.
///
/// Initialization and cleanup errors abort the run. Submission errors are
/// counted and logged so one bad response does not end the round.
pub async fn run_round(
    module: &mut dyn WorkloadModule,
    adapter: Arc<dyn SutAdapter>,
    sut_context: SutContext,
    round: &RoundConfig,
    plan: &RoundPlan,
) -> Result<RoundReport, WorkloadError> {
    module
        .initialize(
            plan.worker_index,
            plan.total_workers,
            plan.round_index,
            round.arguments.clone(),
            adapter,
            sut_context,
        )
        .await?;

    info!(
        label = %round.label,
        worker_index = plan.worker_index,
        total_workers = plan.total_workers,
        round_index = plan.round_index,
        submissions = plan.submissions,
        "Starting round"
    );

    let start = Instant::now();
    let mut succeeded = 0u64;
    let mut failed = 0u64;

    for attempt in 0..plan.submissions {
        match module.submit_transaction().await {
            Ok(()) => succeeded += 1,
            Err(e) => {
                failed += 1;
                warn!(attempt, error = %e, "Submission failed");
            }
        }
    }

    let duration = start.elapsed();
    module.cleanup().await?;

    Ok(RoundReport {
        label: round.label.clone(),
        submitted: plan.submissions,
        succeeded,
        failed,
        duration,
    })
}
