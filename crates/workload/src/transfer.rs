//! TransferAsset workload: one read-only `TransferAsset` call per submission.

use crate::adapter::{SutAdapter, SutContext};
use crate::error::WorkloadError;
use crate::module::{initialize_base, WorkloadContext, WorkloadModule};
use crate::request::TransactionRequest;
use crate::round::RoundArguments;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

/// Contract function invoked on every submission.
pub const CONTRACT_FUNCTION: &str = "TransferAsset";

/// Identity every submission is invoked as.
pub const INVOKER_IDENTITY: &str = "User1";

/// Patient national id followed by disease index.
pub const CONTRACT_ARGUMENTS: [&str; 2] = ["117", "1"];

/// Submissions are evaluated, not ordered. The function name suggests a
/// mutation; the flag is kept as configured.
pub const READ_ONLY: bool = true;

/// Workload module issuing a fixed `TransferAsset` request per submission.
///
/// Holds nothing but the context captured at initialization, so a single
/// instance can serve concurrent submissions.
#[derive(Debug, Default)]
pub struct TransferAssetWorkload {
    context: Option<WorkloadContext>,
}

impl TransferAssetWorkload {
    /// Create an uninitialized module.
    pub fn new() -> Self {
        Self::default()
    }

    /// The context captured at initialization, if any.
    pub fn context(&self) -> Option<&WorkloadContext> {
        self.context.as_ref()
    }

    /// Build the request the next submission will send.
    pub fn build_request(&self) -> Result<TransactionRequest, WorkloadError> {
        let context = self.context.as_ref().ok_or(WorkloadError::NotInitialized)?;
        let contract_id = context.round_arguments.contract_id()?;

        Ok(
            TransactionRequest::new(contract_id, CONTRACT_FUNCTION, INVOKER_IDENTITY)
                .with_arguments(CONTRACT_ARGUMENTS)
                .with_read_only(READ_ONLY),
        )
    }
}

#[async_trait]
impl WorkloadModule for TransferAssetWorkload {
    async fn initialize(
        &mut self,
        worker_index: usize,
        total_workers: usize,
        round_index: usize,
        round_arguments: RoundArguments,
        sut_adapter: Arc<dyn SutAdapter>,
        sut_context: SutContext,
    ) -> Result<(), WorkloadError> {
        let context = initialize_base(
            worker_index,
            total_workers,
            round_index,
            round_arguments,
            sut_adapter,
            sut_context,
        )?;
        self.context = Some(context);
        Ok(())
    }

    async fn submit_transaction(&self) -> Result<(), WorkloadError> {
        let context = self.context.as_ref().ok_or(WorkloadError::NotInitialized)?;
        let request = self.build_request()?;

        trace!(
            worker_index = context.worker_index,
            round_index = context.round_index,
            contract_id = %request.contract_id,
            function = %request.contract_function,
            read_only = request.read_only,
            "Submitting transaction"
        );

        context.sut_adapter.send_request(&request).await?;
        Ok(())
    }
}

/// Factory the harness calls to obtain a fresh module per worker.
pub fn create_workload_module() -> Box<dyn WorkloadModule> {
    Box::new(TransferAssetWorkload::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{AdapterError, TxStatus};
    use std::sync::Mutex;
    use std::time::Duration;
    use tracing_test::traced_test;

    #[derive(Default)]
    struct CapturingAdapter {
        seen: Mutex<Vec<TransactionRequest>>,
    }

    #[async_trait]
    impl SutAdapter for CapturingAdapter {
        async fn send_requests(
            &self,
            requests: &[TransactionRequest],
        ) -> Result<Vec<TxStatus>, AdapterError> {
            self.seen.lock().unwrap().extend_from_slice(requests);
            Ok(requests
                .iter()
                .map(|_| TxStatus::success(None, None, Duration::ZERO))
                .collect())
        }
    }

    async fn initialized(adapter: Arc<CapturingAdapter>) -> TransferAssetWorkload {
        let mut module = TransferAssetWorkload::new();
        module
            .initialize(
                0,
                1,
                0,
                RoundArguments::new().with("contractId", "basic"),
                adapter,
                SutContext::default(),
            )
            .await
            .unwrap();
        module
    }

    #[test]
    fn test_build_request_before_initialize() {
        let module = TransferAssetWorkload::new();
        assert_eq!(module.build_request(), Err(WorkloadError::NotInitialized));
    }

    #[tokio::test]
    async fn test_build_request_fixed_fields() {
        let module = initialized(Arc::new(CapturingAdapter::default())).await;
        let request = module.build_request().unwrap();

        assert_eq!(request.contract_id, "basic");
        assert_eq!(request.contract_function, "TransferAsset");
        assert_eq!(request.invoker_identity, "User1");
        assert_eq!(request.contract_arguments, vec!["117", "1"]);
        assert!(request.read_only);
    }

    #[tokio::test]
    async fn test_missing_contract_id_fails_submission() {
        let adapter = Arc::new(CapturingAdapter::default());
        let mut module = TransferAssetWorkload::new();
        module
            .initialize(
                0,
                1,
                0,
                RoundArguments::new(),
                adapter.clone(),
                SutContext::default(),
            )
            .await
            .unwrap();

        let err = module.submit_transaction().await.unwrap_err();
        assert_eq!(err, WorkloadError::MissingRoundArgument("contractId"));
        assert!(adapter.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_submission_is_traced() {
        let module = initialized(Arc::new(CapturingAdapter::default())).await;
        module.submit_transaction().await.unwrap();

        assert!(logs_contain("Submitting transaction"));
        assert!(logs_contain("TransferAsset"));
    }

    #[tokio::test]
    async fn test_factory_module_starts_uninitialized() {
        let module = create_workload_module();
        assert_eq!(
            module.submit_transaction().await,
            Err(WorkloadError::NotInitialized)
        );
    }
}
