//! Terminal presentation adapter over the form session.
//!
//! One of possibly many adapters: the session core is presentation-agnostic
//! and this module only feeds it parsed CLI input and turns its view into
//! printable lines.

use price_core::session::resolve_outcome;
use price_core::{Field, FormSession, Predictor};

/// Raw field values as collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleInput {
    pub year: String,
    pub kms_driven: String,
    pub fuel: String,
    pub seller_type: String,
    pub transmission: String,
    pub owner: String,
    pub brand_name: String,
}

/// Applies `input` to a fresh session, runs one submit against `predictor`
/// and returns the transcript to print: the year warning (if any), the
/// busy label while the request is in flight, then the settled result
/// line.
pub async fn run(
    input: &VehicleInput,
    predictor: &dyn Predictor,
) -> Vec<String> {
    let mut session = FormSession::new();

    session.update_field(Field::Year, &input.year);
    session.update_field(Field::KmsDriven, &input.kms_driven);
    session.update_field(Field::Fuel, &input.fuel);
    session.update_field(Field::SellerType, &input.seller_type);
    session.update_field(Field::Transmission, &input.transmission);
    session.update_field(Field::Owner, &input.owner);
    session.update_field(Field::BrandName, &input.brand_name);

    let mut lines = Vec::new();
    if let Some(warning) = session.view().year_warning {
        lines.push(warning.to_string());
    }

    // A fresh session always accepts its first submit.
    if let Some(ticket) = session.begin_submit() {
        lines.push(session.view().submit_label.to_string());

        let outcome = resolve_outcome(predictor, ticket.request()).await;
        session.settle(&ticket, outcome);
    }

    if let Some(result) = session.view().result {
        lines.push(result);
    }

    lines
}
