pub mod client;
pub mod currency;
pub mod models;
pub mod session;

pub use client::{PredictionRequest, PredictionResponse, Predictor, PredictorError};
pub use models::*;
pub use session::{FormSession, PredictionOutcome, SessionView, SubmissionStatus, SubmitTicket};
