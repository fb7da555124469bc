pub mod challenges;
pub mod error;
pub mod logging;

pub use error::ChallengeError;

use challenges::{additive_number, pythagorean_triples};

/// Available challenge names
pub const CHALLENGES: &[&str] = &["additive-number", "pythagorean-triples"];

/// Run a challenge on a single raw input and return its rendered answer
pub fn run_challenge(name: &str, input: &str) -> Result<String, ChallengeError> {
    match name {
        "additive-number" => additive_number::solve(input),
        "pythagorean-triples" => pythagorean_triples::solve(input),
        _ => Err(ChallengeError::UnknownChallenge(name.to_string())),
    }
}

/// Sample inputs each challenge ships with
pub fn samples(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "additive-number" => Some(additive_number::SAMPLES),
        "pythagorean-triples" => Some(pythagorean_triples::SAMPLES),
        _ => None,
    }
}
