//! HTTP gateway connector for the system under test.
//!
//! Implements [`SutAdapter`](assetbench_workload::SutAdapter) by posting
//! request descriptors as JSON to a gateway that fronts the ledger. The
//! gateway owns identities and signing; this crate only moves requests and
//! maps responses onto [`TxStatus`](assetbench_workload::TxStatus).
//!
//! # Modules
//!
//! - [`client`]: [`GatewayClient`], the adapter implementation
//! - [`config`]: [`ConnectorConfig`] and its validation

pub mod client;
pub mod config;

pub use client::{GatewayClient, GatewayResponse};
pub use config::{ConfigError, ConnectorConfig};
