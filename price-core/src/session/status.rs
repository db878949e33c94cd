use rust_decimal::Decimal;

/// Lifecycle of one submit attempt.
///
/// `Idle` is the state of a fresh session. A submit moves to `Pending`;
/// the settled response (success or failure alike) moves to `Settled`.
/// The only way out of `Settled` is a fresh submit, which re-enters
/// `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Settled,
}

/// Settled result of a submit attempt.
///
/// Every failure cause (no prediction from the service, transport error,
/// undecodable body) collapses into the single `Failed` marker; the causes
/// are logged but never rendered differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOutcome {
    Success(Decimal),
    Failed,
}
