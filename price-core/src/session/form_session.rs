use tracing::{debug, warn};

use crate::client::{PredictionRequest, Predictor};
use crate::models::{Field, VehicleForm};
use crate::session::year_check::year_warning;
use crate::session::{PredictionOutcome, SessionView, SubmissionStatus};

/// Stateful owner of one user interaction cycle.
///
/// Holds the raw field text, the advisory year warning, the submission
/// status and the last settled outcome. Field edits are synchronous; the
/// network round trip is the only suspension point and runs against an
/// injected [`Predictor`].
///
/// Submits are keyed by a generation counter. Each accepted submit takes a
/// snapshot of the fields at that moment, so a response always reflects
/// the form as it was serialized (later edits change the form but never
/// the in-flight payload), and a response that arrives after a newer
/// submit is discarded instead of overwriting it.
#[derive(Debug, Default)]
pub struct FormSession {
    form: VehicleForm,
    warning: Option<&'static str>,
    status: SubmissionStatus,
    outcome: Option<PredictionOutcome>,
    generation: u64,
}

/// Handle for one accepted submit: the field snapshot serialized at submit
/// time, plus the generation that keys its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    request: PredictionRequest,
}

impl SubmitTicket {
    pub fn request(&self) -> &PredictionRequest {
        &self.request
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites one field with the raw text the user entered.
    ///
    /// Editing the year field recomputes the advisory warning; no other
    /// field triggers validation. Edits are accepted in every status,
    /// including while a request is in flight.
    pub fn update_field(
        &mut self,
        field: Field,
        raw: &str,
    ) {
        if field == Field::Year {
            self.warning = year_warning(raw);
        }
        self.form.set(field, raw);
    }

    pub fn fields(&self) -> &VehicleForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.warning
    }

    pub fn outcome(&self) -> Option<PredictionOutcome> {
        self.outcome
    }

    /// Starts a submit, snapshotting the current fields.
    ///
    /// Returns `None` while a request is already in flight; that is the
    /// guarded no-op. Otherwise the session moves to `Pending` and the returned
    /// ticket carries the serialized payload for the predictor.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.status == SubmissionStatus::Pending {
            return None;
        }

        self.generation += 1;
        self.status = SubmissionStatus::Pending;
        debug!(generation = self.generation, "prediction request submitted");

        Some(SubmitTicket {
            generation: self.generation,
            request: PredictionRequest::from(&self.form),
        })
    }

    /// Settles the submit identified by `ticket`.
    ///
    /// A ticket from a superseded submit is discarded and returns `false`;
    /// only the response to the latest submit updates the view model. The
    /// previous outcome is replaced only here, never while in flight.
    pub fn settle(
        &mut self,
        ticket: &SubmitTicket,
        outcome: PredictionOutcome,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "stale prediction response discarded"
            );
            return false;
        }

        self.outcome = Some(outcome);
        self.status = SubmissionStatus::Settled;
        true
    }

    /// Runs one full submit round trip against `predictor`.
    ///
    /// No-op while a request is already in flight. Every predictor error
    /// is caught here and settles as [`PredictionOutcome::Failed`]; nothing
    /// propagates out of the submit boundary.
    pub async fn submit(
        &mut self,
        predictor: &dyn Predictor,
    ) {
        let Some(ticket) = self.begin_submit() else {
            return;
        };

        let outcome = resolve_outcome(predictor, ticket.request()).await;
        self.settle(&ticket, outcome);
    }

    /// Pure projection of the current state for the presentation layer.
    pub fn view(&self) -> SessionView {
        SessionView::project(self.status, self.warning, self.outcome)
    }
}

/// Resolves one serialized request into an outcome, collapsing every
/// predictor error into the generic failure marker.
pub async fn resolve_outcome(
    predictor: &dyn Predictor,
    request: &PredictionRequest,
) -> PredictionOutcome {
    match predictor.predict(request).await {
        Ok(price) => {
            debug!(%price, "prediction settled");
            PredictionOutcome::Success(price)
        }
        Err(error) => {
            warn!(%error, "prediction failed");
            PredictionOutcome::Failed
        }
    }
}
