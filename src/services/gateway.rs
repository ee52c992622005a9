use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::app::config::{Config, GatewayMode};
use crate::models::donation::{ChargeRequest, ChargeReceipt, GatewayResponse};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("charge declined: {0}")]
    Declined(String),
    #[error("gateway unreachable: {0}")]
    Unreachable(String),
}

/// Seam to the card-processing collaborator. The real integration sits
/// behind this trait; everything upstream only sees charge/health.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt, GatewayError>;
    async fn health_check(&self) -> bool;
}

/// Stand-in gateway: confirms every charge after an artificial delay,
/// matching the latency profile of the hosted processor.
pub struct MockGateway {
    delay: Duration,
}

impl MockGateway {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt, GatewayError> {
        tokio::time::sleep(self.delay).await;
        info!(
            "Mock gateway confirmed charge of {} cents for payer {}",
            request.amount_cents, request.payer_id
        );
        Ok(ChargeReceipt {
            transaction_id: format!("mock-{}", Uuid::new_v4()),
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// HTTP-backed gateway client for a hosted processor.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.gateway_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.gateway_url.clone(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt, GatewayError> {
        let response = self
            .client
            .post(format!("{}/donations/process", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GatewayError::Declined(format!("HTTP {}", response.status())));
        }

        let body: GatewayResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        if body.success {
            match body.transaction_id {
                Some(transaction_id) => Ok(ChargeReceipt { transaction_id }),
                None => Err(GatewayError::Unreachable(
                    "success response missing transactionId".to_string(),
                )),
            }
        } else {
            Err(GatewayError::Declined(
                body.error.unwrap_or_else(|| "charge declined".to_string()),
            ))
        }
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Gateway health check failed: {}", e);
                false
            }
        }
    }
}

pub fn from_config(config: &Config) -> Arc<dyn PaymentGateway> {
    match config.gateway_mode {
        GatewayMode::Mock => Arc::new(MockGateway::new(config.gateway_delay_ms)),
        GatewayMode::Http => Arc::new(HttpGateway::new(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_gateway_always_confirms() {
        let gateway = MockGateway::new(0);
        let receipt = gateway
            .charge(&ChargeRequest {
                amount_cents: 1059,
                payer_id: Uuid::new_v4(),
                recipient_id: Uuid::new_v4(),
                song_id: None,
            })
            .await
            .unwrap();
        assert!(receipt.transaction_id.starts_with("mock-"));
        assert!(gateway.health_check().await);
    }
}
