use crate::currency::format_inr;
use crate::session::{PredictionOutcome, SubmissionStatus};

/// Label on the submit control while no request is in flight.
pub const SUBMIT_IDLE_LABEL: &str = "Predict Price";

/// Label on the submit control while a request is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Predicting...";

/// The one message shown for every failed prediction, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Please fill out each field in the form completely";

/// Renderable projection of a session.
///
/// The presentation layer reads this and nothing else. `result` stays at
/// the last settled outcome while a new request is in flight, so the
/// previous answer keeps rendering until it is overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Whether the submit control accepts a click.
    pub submit_enabled: bool,
    /// Text on the submit control.
    pub submit_label: &'static str,
    /// Advisory warning under the year field, if any.
    pub year_warning: Option<&'static str>,
    /// Rendered result line, once a submit has settled.
    pub result: Option<String>,
}

impl SessionView {
    pub(crate) fn project(
        status: SubmissionStatus,
        year_warning: Option<&'static str>,
        outcome: Option<PredictionOutcome>,
    ) -> Self {
        let busy = status == SubmissionStatus::Pending;

        let result = outcome.map(|outcome| match outcome {
            PredictionOutcome::Success(price) => {
                format!("The Predicted Price is {}", format_inr(price))
            }
            PredictionOutcome::Failed => FAILURE_MESSAGE.to_string(),
        });

        Self {
            submit_enabled: !busy,
            submit_label: if busy {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_IDLE_LABEL
            },
            year_warning,
            result,
        }
    }
}
