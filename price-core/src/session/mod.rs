mod form_session;
mod status;
mod view;
pub mod year_check;

pub use form_session::{FormSession, SubmitTicket, resolve_outcome};
pub use status::{PredictionOutcome, SubmissionStatus};
pub use view::{FAILURE_MESSAGE, SUBMIT_BUSY_LABEL, SUBMIT_IDLE_LABEL, SessionView};
