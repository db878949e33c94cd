//! HTTP transport for the prediction capability.
//!
//! [`HttpPredictor`] is the one [`Predictor`] implementation that talks to
//! the real service: a single JSON POST per request, no retries, no
//! authentication. Everything the session needs for tests lives behind the
//! trait, so this crate stays a thin wire adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use price_core::{PredictionRequest, PredictionResponse, Predictor, PredictorError};

/// Connection settings for the remote prediction service.
///
/// `endpoint` is the full URL of the predict route. The default points at
/// the hosted service; tests point it at a local mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Predict route of the hosted service.
    pub const DEFAULT_ENDPOINT: &'static str =
        "https://car-price-predication.onrender.com/predict";
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// [`Predictor`] backed by the remote HTTP service.
///
/// Holds one shared [`reqwest::Client`]; cloning is cheap and reuses the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    http: Client,
    endpoint: String,
}

impl HttpPredictor {
    pub fn new(config: ServiceConfig) -> Result<Self, PredictorError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PredictorError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<Decimal, PredictorError> {
        debug!(endpoint = %self.endpoint, "posting prediction request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| PredictorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictorError::Status(status.as_u16()));
        }

        let body: PredictionResponse = response
            .json()
            .await
            .map_err(|e| PredictorError::Decode(e.to_string()))?;

        match body.first_price() {
            Some(price) => {
                debug!(%price, "prediction received");
                Ok(price)
            }
            None => {
                if let Some(error) = &body.error {
                    warn!(error = %error, "service reported a prediction error");
                }
                Err(PredictorError::NoPrediction)
            }
        }
    }
}
