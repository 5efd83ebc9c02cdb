//! Test helpers for workload modules - provides in-memory SUT adapters.
//!
//! # Example
//!
//! ```rust,ignore
//! use assetbench_test_helpers::RecordingAdapter;
//!
//! let adapter = Arc::new(RecordingAdapter::new());
//! module.initialize(0, 1, 0, args, adapter.clone(), SutContext::default()).await?;
//! module.submit_transaction().await?;
//! assert_eq!(adapter.request_count(), 1);
//! ```

use assetbench_workload::{AdapterError, SutAdapter, TransactionRequest, TxStatus};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Adapter that records every request and reports success for each.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    requests: Mutex<Vec<TransactionRequest>>,
    batches: AtomicU64,
}

impl RecordingAdapter {
    /// Create an adapter with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<TransactionRequest> {
        self.lock().clone()
    }

    /// Number of requests received.
    pub fn request_count(&self) -> usize {
        self.lock().len()
    }

    /// Number of `send_requests` calls received.
    pub fn batch_count(&self) -> u64 {
        self.batches.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TransactionRequest>> {
        // Poisoning only means another test panicked mid-push.
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SutAdapter for RecordingAdapter {
    async fn send_requests(
        &self,
        requests: &[TransactionRequest],
    ) -> Result<Vec<TxStatus>, AdapterError> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        let mut recorded = self.lock();
        let statuses = requests
            .iter()
            .map(|_| {
                let id = format!("tx-{}", recorded.len());
                TxStatus::success(Some(id), None, Duration::ZERO)
            })
            .collect();
        recorded.extend_from_slice(requests);
        Ok(statuses)
    }
}

/// Adapter that fails every call with the same error.
#[derive(Debug)]
pub struct FailingAdapter {
    error: AdapterError,
    attempts: AtomicU64,
}

impl FailingAdapter {
    /// Create an adapter that always returns `error`.
    pub fn new(error: AdapterError) -> Self {
        Self {
            error,
            attempts: AtomicU64::new(0),
        }
    }

    /// Number of calls received.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SutAdapter for FailingAdapter {
    async fn send_requests(
        &self,
        _requests: &[TransactionRequest],
    ) -> Result<Vec<TxStatus>, AdapterError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}
