//! Configuration and driver loop for the `assetbench-submit` binary.
//!
//! The driver initializes a single TransferAsset module and invokes it a
//! fixed number of times in sequence. Rate control and worker fan-out
//! belong to the benchmarking harness and are not provided here.

pub mod config;
pub mod driver;

pub use config::{BenchConfig, RoundConfig};
pub use driver::{run_round, RoundPlan, RoundReport};
