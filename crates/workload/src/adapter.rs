//! Contract for the system-under-test adapter.
//!
//! The adapter owns transport, identity and ledger semantics. Workload
//! modules only hand it [`TransactionRequest`]s and await the outcome.

use crate::request::TransactionRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Adapter-specific context handed to workload modules at initialization.
///
/// Modules store it for the round but never look inside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SutContext(pub Value);

impl SutContext {
    /// Wrap an adapter-provided value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The wrapped value.
    pub fn value(&self) -> &Value {
        &self.0
    }
}

/// Final outcome of one request as seen by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxOutcome {
    Success,
    Failed,
}

/// Per-request status returned by an adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct TxStatus {
    /// Transaction id assigned by the SUT, if any.
    pub id: Option<String>,
    /// Whether the SUT accepted the request.
    pub outcome: TxOutcome,
    /// Raw result payload (evaluations usually return one).
    pub result: Option<String>,
    /// Reason reported by the SUT for a failed request.
    pub error: Option<String>,
    /// Time from send to response.
    pub elapsed: Duration,
}

impl TxStatus {
    /// A successful status.
    pub fn success(id: Option<String>, result: Option<String>, elapsed: Duration) -> Self {
        Self {
            id,
            outcome: TxOutcome::Success,
            result,
            error: None,
            elapsed,
        }
    }

    /// A failed status carrying the SUT's reason.
    pub fn failed(id: Option<String>, error: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            id,
            outcome: TxOutcome::Failed,
            result: None,
            error: Some(error.into()),
            elapsed,
        }
    }

    /// Check if the request succeeded.
    pub fn is_success(&self) -> bool {
        self.outcome == TxOutcome::Success
    }
}

/// Errors raised by an adapter when a request could not be carried out.
///
/// A request the SUT answered with a rejection is not an error; it comes
/// back as a [`TxStatus`] with [`TxOutcome::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Adapter returned no status for the request")]
    EmptyResponse,

    #[error("Request rejected by adapter: {reason}")]
    Rejected { reason: String },
}

/// Connector translating generic requests into calls against the SUT.
#[async_trait]
pub trait SutAdapter: Send + Sync {
    /// Send a batch of requests and await all of them.
    ///
    /// Statuses come back in request order.
    async fn send_requests(
        &self,
        requests: &[TransactionRequest],
    ) -> Result<Vec<TxStatus>, AdapterError>;

    /// Send a single request and await it.
    async fn send_request(&self, request: &TransactionRequest) -> Result<TxStatus, AdapterError> {
        self.send_requests(std::slice::from_ref(request))
            .await?
            .into_iter()
            .next()
            .ok_or(AdapterError::EmptyResponse)
    }
}
