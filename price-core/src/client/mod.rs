pub mod predictor;
pub mod wire;

pub use predictor::{Predictor, PredictorError};
pub use wire::{PredictionRequest, PredictionResponse};
