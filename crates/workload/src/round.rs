//! Round-scoped arguments from the benchmark configuration.

use crate::error::WorkloadError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the target contract identifier.
pub const CONTRACT_ID: &str = "contractId";

/// User-provided arguments for one benchmark round.
///
/// The harness passes these through verbatim from the benchmark
/// configuration, so the table may carry keys this module never reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundArguments(Map<String, Value>);

impl RoundArguments {
    /// Create an empty argument table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, WorkloadError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(WorkloadError::RoundArgumentsNotObject),
        }
    }

    /// Set an argument, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a raw argument.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The contract the round targets.
    pub fn contract_id(&self) -> Result<&str, WorkloadError> {
        match self.0.get(CONTRACT_ID) {
            None | Some(Value::Null) => Err(WorkloadError::MissingRoundArgument(CONTRACT_ID)),
            Some(Value::String(id)) => Ok(id.as_str()),
            Some(_) => Err(WorkloadError::InvalidRoundArgument {
                name: CONTRACT_ID,
                expected: "string",
            }),
        }
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for RoundArguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
