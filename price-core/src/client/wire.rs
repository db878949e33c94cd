use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::VehicleForm;

/// JSON body of the prediction POST.
///
/// Field names are the wire keys. Every value is sent as the string the
/// user entered; the service does its own numeric conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub year: String,
    pub km_driven: String,
    pub fuel: String,
    pub seller_type: String,
    pub transmission: String,
    pub owner: String,
    pub name: String,
}

impl From<&VehicleForm> for PredictionRequest {
    fn from(form: &VehicleForm) -> Self {
        Self {
            year: form.year.clone(),
            km_driven: form.kms_driven.clone(),
            fuel: form.fuel.clone(),
            seller_type: form.seller_type.clone(),
            transmission: form.transmission.clone(),
            owner: form.owner.clone(),
            name: form.brand_name.clone(),
        }
    }
}

/// JSON body of the prediction response.
///
/// A successful answer carries a non-empty `Prediction` list. When the
/// model rejects the input the service responds with an `error` string
/// instead; that detail is logged but never shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PredictionResponse {
    #[serde(rename = "Prediction", default)]
    pub prediction: Option<Vec<Decimal>>,

    #[serde(default)]
    pub error: Option<String>,
}

impl PredictionResponse {
    /// The estimated price, when the response carries one.
    pub fn first_price(&self) -> Option<Decimal> {
        self.prediction.as_ref().and_then(|list| list.first()).copied()
    }
}
