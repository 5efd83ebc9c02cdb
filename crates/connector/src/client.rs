//! Gateway client implementing the SUT adapter contract.

use crate::config::{ConfigError, ConnectorConfig};
use assetbench_workload::{AdapterError, SutAdapter, TransactionRequest, TxStatus};
use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

/// Path for requests evaluated without ordering.
pub const EVALUATE_PATH: &str = "/api/v1/evaluate";

/// Path for requests submitted for ordering and commit.
pub const SUBMIT_PATH: &str = "/api/v1/submit";

/// Path of the gateway readiness probe.
pub const HEALTH_PATH: &str = "/health";

/// Response body returned by the gateway for every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub accepted: bool,
    #[serde(default)]
    pub tx_id: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// HTTP client for a ledger gateway.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client from validated configuration.
    pub fn new(config: &ConnectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.gateway_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL a request is routed to.
    pub fn endpoint(&self, request: &TransactionRequest) -> String {
        let path = if request.read_only {
            EVALUATE_PATH
        } else {
            SUBMIT_PATH
        };
        format!("{}{}", self.base_url, path)
    }

    /// Check whether the gateway answers its health probe.
    pub async fn is_ready(&self) -> bool {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(url = %url, error = %e, "Gateway not ready");
                false
            }
        }
    }

    async fn send_one(&self, request: &TransactionRequest) -> Result<TxStatus, AdapterError> {
        let url = self.endpoint(request);
        let start = Instant::now();

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let elapsed = start.elapsed();

        let parsed = match serde_json::from_slice::<GatewayResponse>(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => return Err(AdapterError::Decode(e.to_string())),
            Err(_) => {
                return Err(AdapterError::Status {
                    code: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                })
            }
        };

        if status.is_success() && parsed.accepted {
            debug!(
                contract_id = %request.contract_id,
                function = %request.contract_function,
                tx_id = ?parsed.tx_id,
                elapsed_ms = elapsed.as_millis() as u64,
                "Request accepted"
            );
            Ok(TxStatus::success(parsed.tx_id, parsed.result, elapsed))
        } else {
            let reason = parsed
                .error
                .unwrap_or_else(|| format!("gateway returned HTTP {}", status.as_u16()));
            warn!(
                contract_id = %request.contract_id,
                function = %request.contract_function,
                status = status.as_u16(),
                reason = %reason,
                "Request rejected"
            );
            Ok(TxStatus::failed(parsed.tx_id, reason, elapsed))
        }
    }
}

#[async_trait]
impl SutAdapter for GatewayClient {
    async fn send_requests(
        &self,
        requests: &[TransactionRequest],
    ) -> Result<Vec<TxStatus>, AdapterError> {
        join_all(requests.iter().map(|request| self.send_one(request)))
            .await
            .into_iter()
            .collect()
    }
}

fn map_reqwest_error(e: reqwest::Error) -> AdapterError {
    if e.is_timeout() {
        AdapterError::Timeout
    } else {
        AdapterError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetbench_workload::TxOutcome;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use std::time::Duration;

    async fn spawn_gateway(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn evaluate_handler(
        Json(request): Json<TransactionRequest>,
    ) -> (StatusCode, Json<GatewayResponse>) {
        if request.contract_id == "unknown" {
            return (
                StatusCode::NOT_FOUND,
                Json(GatewayResponse {
                    accepted: false,
                    tx_id: None,
                    result: None,
                    error: Some("chaincode unknown not found".to_string()),
                }),
            );
        }
        (
            StatusCode::OK,
            Json(GatewayResponse {
                accepted: true,
                tx_id: None,
                result: Some(format!(
                    "eval:{}({})",
                    request.contract_function,
                    request.contract_arguments.join(",")
                )),
                error: None,
            }),
        )
    }

    async fn submit_handler(Json(request): Json<TransactionRequest>) -> Json<GatewayResponse> {
        Json(GatewayResponse {
            accepted: true,
            tx_id: Some(format!("tx-{}", request.contract_arguments.join("-"))),
            result: None,
            error: None,
        })
    }

    fn gateway_router() -> Router {
        Router::new()
            .route("/health", get(|| async { "ok" }))
            .route(EVALUATE_PATH, post(evaluate_handler))
            .route(SUBMIT_PATH, post(submit_handler))
    }

    fn client_for(url: &str) -> GatewayClient {
        GatewayClient::new(&ConnectorConfig::new(url)).unwrap()
    }

    fn transfer(contract_id: &str) -> TransactionRequest {
        TransactionRequest::new(contract_id, "TransferAsset", "User1")
            .with_arguments(["117", "1"])
            .with_read_only(true)
    }

    #[test]
    fn test_endpoint_routing() {
        let client = client_for("http://gateway:3000/");
        assert_eq!(client.base_url(), "http://gateway:3000");

        let read = transfer("basic");
        assert_eq!(client.endpoint(&read), "http://gateway:3000/api/v1/evaluate");

        let write = read.with_read_only(false);
        assert_eq!(client.endpoint(&write), "http://gateway:3000/api/v1/submit");
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(GatewayClient::new(&ConnectorConfig::new("")).is_err());
    }

    #[tokio::test]
    async fn test_read_only_request_is_evaluated() {
        let url = spawn_gateway(gateway_router()).await;
        let client = client_for(&url);

        let status = client.send_request(&transfer("basic")).await.unwrap();

        assert_eq!(status.outcome, TxOutcome::Success);
        assert_eq!(status.result.as_deref(), Some("eval:TransferAsset(117,1)"));
        assert!(status.id.is_none());
    }

    #[tokio::test]
    async fn test_mutating_request_is_submitted() {
        let url = spawn_gateway(gateway_router()).await;
        let client = client_for(&url);

        let status = client
            .send_request(&transfer("basic").with_read_only(false))
            .await
            .unwrap();

        assert!(status.is_success());
        assert_eq!(status.id.as_deref(), Some("tx-117-1"));
    }

    #[tokio::test]
    async fn test_rejection_becomes_failed_status() {
        let url = spawn_gateway(gateway_router()).await;
        let client = client_for(&url);

        let status = client.send_request(&transfer("unknown")).await.unwrap();

        assert_eq!(status.outcome, TxOutcome::Failed);
        assert_eq!(status.error.as_deref(), Some("chaincode unknown not found"));
    }

    #[tokio::test]
    async fn test_batch_preserves_order() {
        let url = spawn_gateway(gateway_router()).await;
        let client = client_for(&url);

        let statuses = client
            .send_requests(&[transfer("basic"), transfer("unknown"), transfer("basic")])
            .await
            .unwrap();

        let outcomes: Vec<_> = statuses.iter().map(|s| s.outcome).collect();
        assert_eq!(
            outcomes,
            vec![TxOutcome::Success, TxOutcome::Failed, TxOutcome::Success]
        );
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_status_error() {
        let router = Router::new().route(
            EVALUATE_PATH,
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let url = spawn_gateway(router).await;
        let client = client_for(&url);

        let err = client.send_request(&transfer("basic")).await.unwrap_err();
        assert_eq!(
            err,
            AdapterError::Status {
                code: 502,
                body: "upstream down".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_decode_error() {
        let router = Router::new().route(EVALUATE_PATH, post(|| async { "not json" }));
        let url = spawn_gateway(router).await;
        let client = client_for(&url);

        let err = client.send_request(&transfer("basic")).await.unwrap_err();
        assert!(matches!(err, AdapterError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_gateway_times_out() {
        let router = Router::new().route(
            EVALUATE_PATH,
            post(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                "late"
            }),
        );
        let url = spawn_gateway(router).await;
        let config = ConnectorConfig::new(&url).with_request_timeout(Duration::from_millis(50));
        let client = GatewayClient::new(&config).unwrap();

        let err = client.send_request(&transfer("basic")).await.unwrap_err();
        assert_eq!(err, AdapterError::Timeout);
    }

    #[tokio::test]
    async fn test_unreachable_gateway_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        let err = client.send_request(&transfer("basic")).await.unwrap_err();
        assert!(matches!(err, AdapterError::Transport(_)));
        assert!(!client.is_ready().await);
    }

    #[tokio::test]
    async fn test_ready_probe() {
        let url = spawn_gateway(gateway_router()).await;
        assert!(client_for(&url).is_ready().await);
    }
}
