use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::client::wire::PredictionRequest;

/// Failure modes of one prediction round trip.
///
/// The form session collapses every variant into the same user-visible
/// outcome; the distinction exists for logs and for transport-level tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictorError {
    /// The request never produced a response (connect, send, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status code.
    #[error("prediction service returned status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The response decoded cleanly but carried no usable prediction.
    #[error("response contained no prediction")]
    NoPrediction,
}

/// Capability to resolve one prediction request into an estimated price.
///
/// The session never talks to the network itself; it is handed an
/// implementation of this trait. The price is the first element of the
/// service's prediction list.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<Decimal, PredictorError>;
}
