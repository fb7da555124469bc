use thiserror::Error;

/// Errors raised at the boundary between raw input and a challenge solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
    /// The input parsed but lies outside the solver's domain (e.g. N = 0).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input is not a non-empty string of ASCII digits.
    #[error("expected a non-empty digit string, got {0:?}")]
    InvalidDigits(String),

    #[error("unknown challenge {0:?}")]
    UnknownChallenge(String),
}
