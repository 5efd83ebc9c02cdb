//! Request descriptor handed to the SUT adapter.

use serde::{Deserialize, Serialize};

/// A single contract invocation, built fresh for every submission.
///
/// Field names serialize in camelCase to match the request descriptor the
/// harness' adapters accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Identifier of the deployed contract to invoke.
    pub contract_id: String,
    /// Contract function name.
    pub contract_function: String,
    /// Identity the adapter signs or evaluates the call as.
    pub invoker_identity: String,
    /// Ordered string arguments passed to the function.
    pub contract_arguments: Vec<String>,
    /// Evaluate only; the adapter must not order the call into a block.
    pub read_only: bool,
}

impl TransactionRequest {
    /// Create a mutating request with no arguments.
    pub fn new(
        contract_id: impl Into<String>,
        contract_function: impl Into<String>,
        invoker_identity: impl Into<String>,
    ) -> Self {
        Self {
            contract_id: contract_id.into(),
            contract_function: contract_function.into(),
            invoker_identity: invoker_identity.into(),
            contract_arguments: Vec::new(),
            read_only: false,
        }
    }

    /// Set the ordered argument list.
    pub fn with_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contract_arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether the request is evaluated without being committed.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_argument_order() {
        let request = TransactionRequest::new("basic", "ReadAsset", "User1")
            .with_arguments(["b", "a", "c"])
            .with_read_only(true);

        assert_eq!(request.contract_arguments, vec!["b", "a", "c"]);
        assert!(request.read_only);
    }

    #[test]
    fn test_serializes_camel_case() {
        let request = TransactionRequest::new("basic", "TransferAsset", "User1")
            .with_arguments(["117", "1"])
            .with_read_only(true);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contractId"], "basic");
        assert_eq!(json["contractFunction"], "TransferAsset");
        assert_eq!(json["invokerIdentity"], "User1");
        assert_eq!(json["contractArguments"], serde_json::json!(["117", "1"]));
        assert_eq!(json["readOnly"], true);
    }
}
