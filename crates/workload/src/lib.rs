//! TransferAsset workload module.
//!
//! A workload module defines what a benchmark round submits against the
//! system under test (SUT). The harness creates one module per worker,
//! initializes it once per round and then calls
//! [`WorkloadModule::submit_transaction`] as often as its rate controller
//! decides. Each call turns into exactly one request against the
//! [`SutAdapter`].
//!
//! # Modules
//!
//! - [`module`]: The [`WorkloadModule`] contract and the shared
//!   [`initialize_base`] behavior every module delegates to
//! - [`transfer`]: [`TransferAssetWorkload`] and its factory
//! - [`adapter`]: The [`SutAdapter`] contract the module calls into
//! - [`request`]: [`TransactionRequest`], the per-submission request descriptor
//! - [`round`]: [`RoundArguments`] taken from the benchmark configuration
//!
//! # Example
//!
//! ```ignore
//! use assetbench_workload::{create_workload_module, RoundArguments, SutContext};
//!
//! let mut module = create_workload_module();
//! let args = RoundArguments::from_value(serde_json::json!({ "contractId": "basic" }))?;
//! module.initialize(0, 1, 0, args, adapter, SutContext::default()).await?;
//! module.submit_transaction().await?;
//! ```

pub mod adapter;
pub mod error;
pub mod module;
pub mod request;
pub mod round;
pub mod transfer;

pub use adapter::{AdapterError, SutAdapter, SutContext, TxOutcome, TxStatus};
pub use error::WorkloadError;
pub use module::{initialize_base, WorkloadContext, WorkloadModule};
pub use request::TransactionRequest;
pub use round::RoundArguments;
pub use transfer::{create_workload_module, TransferAssetWorkload};
