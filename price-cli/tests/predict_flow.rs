//! End-to-end flow of the CLI app layer against stub predictors.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use price_cli::app::{self, VehicleInput};
use price_core::{PredictionRequest, Predictor, PredictorError};

struct CannedPredictor(Decimal);

#[async_trait]
impl Predictor for CannedPredictor {
    async fn predict(
        &self,
        _request: &PredictionRequest,
    ) -> Result<Decimal, PredictorError> {
        Ok(self.0)
    }
}

struct FailingPredictor;

#[async_trait]
impl Predictor for FailingPredictor {
    async fn predict(
        &self,
        _request: &PredictionRequest,
    ) -> Result<Decimal, PredictorError> {
        Err(PredictorError::Transport("connection refused".to_string()))
    }
}

fn input() -> VehicleInput {
    VehicleInput {
        year: "2015".to_string(),
        kms_driven: "50000".to_string(),
        fuel: "Petrol".to_string(),
        seller_type: "Individual".to_string(),
        transmission: "Manual".to_string(),
        owner: "1".to_string(),
        brand_name: "Maruti".to_string(),
    }
}

#[tokio::test]
async fn successful_run_prints_busy_label_then_price() {
    let lines = app::run(&input(), &CannedPredictor(dec!(450000))).await;

    assert_eq!(
        lines,
        vec![
            "Predicting...".to_string(),
            "The Predicted Price is ₹4,50,000".to_string(),
        ]
    );
}

#[tokio::test]
async fn failed_run_prints_the_completion_prompt() {
    let lines = app::run(&input(), &FailingPredictor).await;

    assert_eq!(
        lines,
        vec![
            "Predicting...".to_string(),
            "Please fill out each field in the form completely".to_string(),
        ]
    );
}

#[tokio::test]
async fn old_year_prepends_the_advisory_warning() {
    let mut input = input();
    input.year = "1999".to_string();

    let lines = app::run(&input, &CannedPredictor(dec!(120000))).await;

    assert_eq!(
        lines,
        vec![
            "Please enter a year greater than 2003.".to_string(),
            "Predicting...".to_string(),
            "The Predicted Price is ₹1,20,000".to_string(),
        ]
    );
}

#[tokio::test]
async fn warning_year_2019_still_submits() {
    let mut input = input();
    input.year = "2019".to_string();

    let lines = app::run(&input, &CannedPredictor(dec!(600000))).await;

    assert_eq!(
        lines,
        vec![
            "Please enter a year less than 2019.".to_string(),
            "Predicting...".to_string(),
            "The Predicted Price is ₹6,00,000".to_string(),
        ]
    );
}
