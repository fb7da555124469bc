//! Pythagorean triples containing N.
//!
//! Every triple containing N is a multiple k of a primitive triple with N / k
//! as one of its sides. So for each divisor d of N we look for Euclid pairs
//! that put d in the x, y or z position, keep the primitive ones, and scale
//! them by the cofactor k = N / d.

use math::{EuclidPair, Role, Triple, divisors, params_for};
use tracing::{debug, trace};

use crate::error::ChallengeError;

pub const SAMPLES: &[&str] = &["5", "13", "1", "2", "60"];

/// Keep a pair only if it generates a primitive triple, scaled by k.
fn collect(pair: EuclidPair, k: u64) -> Option<Triple> {
    if !pair.is_primitive() {
        trace!(u = pair.u, v = pair.v, "rejected non-primitive pair");
        return None;
    }
    Some(pair.triple().scale(k))
}

/// Triples of the form k * (primitive with d as a side), where k = n / d.
fn triples_for_divisor(n: u64, d: u64) -> Vec<Triple> {
    let k = n / d;
    Role::ALL
        .iter()
        .flat_map(|&role| params_for(role, d))
        .filter_map(|pair| collect(pair, k))
        .collect()
}

/// Find every Pythagorean triple with n as one of its sides.
///
/// Results follow divisor order, then role (x, y, z), then parameter order.
/// They are not sorted.
pub fn find_triples(n: u64) -> Result<Vec<Triple>, ChallengeError> {
    if n == 0 {
        return Err(ChallengeError::InvalidArgument(
            "n must be a positive integer".to_string(),
        ));
    }

    let mut triples = Vec::new();
    // d = 1 would need a primitive triple with a side of 1, and none exists.
    for d in divisors(n).skip(1) {
        let found = triples_for_divisor(n, d);
        debug!(n, divisor = d, cofactor = n / d, found = found.len(), "searched divisor");
        triples.extend(found);
    }
    Ok(triples)
}

/// Parse N and render one `(x y z)` line per triple, or `-1` if there are none.
pub fn solve(input: &str) -> Result<String, ChallengeError> {
    let n: u64 = input.trim().parse().map_err(|_| {
        ChallengeError::InvalidArgument(format!("{:?} is not a positive integer", input))
    })?;

    let triples = find_triples(n)?;
    debug!(n, count = triples.len(), "found triples");

    if triples.is_empty() {
        return Ok("-1".to_string());
    }
    Ok(triples
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
