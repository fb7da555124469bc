//! Additive numbers.
//!
//! A digit string is additive if it splits into at least three numbers where
//! every number after the first two is the sum of the two before it, e.g.
//! "199100199" = 1, 99, 100, 199.

use tracing::debug;

use crate::error::ChallengeError;

pub const SAMPLES: &[&str] = &[
    "112358",
    "12345",
    "199100199",
    "4588321981458832199",
    "1321517324981130211",
];

/// A seed term may be "0" but not otherwise start with a zero.
fn parse_seed(digits: &str) -> Option<u128> {
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

/// Extend the seeds a, b by repeated sums until the terms cover all of s.
///
/// Each new term must appear next in s; the walk stops as soon as the covered
/// length reaches s.len(), and succeeds only if it lands exactly on the end.
fn extend_from_seeds(s: &str, a: u128, b: u128, seed_len: usize) -> Option<Vec<u128>> {
    let mut terms = vec![a, b];
    let mut covered = seed_len;

    while covered < s.len() {
        let next = terms[terms.len() - 2].checked_add(terms[terms.len() - 1])?;
        let rendered = next.to_string();
        if !s[covered..].starts_with(&rendered) {
            return None;
        }
        covered += rendered.len();
        terms.push(next);
    }

    (terms.len() >= 3).then_some(terms)
}

/// Find the first additive decomposition of s, if there is one.
///
/// Seeds are tried by first-term length, then second-term length. Strings
/// that are empty or contain non-digits have no decomposition.
///
/// Terms are u128; a candidate whose sums overflow is abandoned.
pub fn additive_split(s: &str) -> Option<Vec<u128>> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let len = s.len();
    for i in 1..len {
        for j in i + 1..len {
            // The third term is at least as long as either seed.
            if i.max(j - i) > len - j {
                continue;
            }
            let (Some(a), Some(b)) = (parse_seed(&s[..i]), parse_seed(&s[i..j])) else {
                continue;
            };
            if let Some(terms) = extend_from_seeds(s, a, b, j) {
                return Some(terms);
            }
        }
    }
    None
}

/// True if s can be split into an additive sequence.
pub fn is_additive(s: &str) -> bool {
    additive_split(s).is_some()
}

pub fn solve(input: &str) -> Result<String, ChallengeError> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChallengeError::InvalidDigits(input.to_string()));
    }

    match additive_split(digits) {
        Some(terms) => {
            debug!(input = digits, ?terms, "additive");
            Ok("true".to_string())
        }
        None => {
            debug!(input = digits, "not additive");
            Ok("false".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert!(is_additive("112358"));
        assert!(!is_additive("12345"));
        assert!(is_additive("199100199"));
        assert!(is_additive("4588321981458832199"));
        assert!(is_additive("1321517324981130211"));
    }

    #[test]
    fn test_decompositions() {
        assert_eq!(additive_split("112358"), Some(vec![1, 1, 2, 3, 5, 8]));
        assert_eq!(additive_split("199100199"), Some(vec![1, 99, 100, 199]));
        assert_eq!(
            additive_split("4588321981458832199"),
            Some(vec![458832198, 1, 458832199])
        );
        assert_eq!(
            additive_split("1321517324981130211"),
            Some(vec![13, 2, 15, 17, 32, 49, 81, 130, 211])
        );
    }

    #[test]
    fn test_equal_width_terms() {
        assert_eq!(additive_split("100200300"), Some(vec![100, 200, 300]));
        assert_eq!(additive_split("111122"), Some(vec![11, 11, 22]));
    }

    #[test]
    fn test_truncated_final_term_is_rejected() {
        // 9, 9, 18 would need the string to continue past "991"
        assert!(!is_additive("991"));
        assert!(!is_additive("1123581"));
    }

    #[test]
    fn test_needs_three_terms() {
        assert!(!is_additive("1"));
        assert!(!is_additive("12"));
        assert!(is_additive("123"));
        assert!(is_additive("000"));
    }

    #[test]
    fn test_leading_zeros() {
        // 0, 1, 1, 2 is fine; a seed like "01" is not
        assert!(is_additive("0112"));
        assert!(!is_additive("1023"));
        assert_eq!(additive_split("101"), Some(vec![1, 0, 1]));
    }

    #[test]
    fn test_non_digit_input() {
        assert!(!is_additive(""));
        assert!(!is_additive("1a2"));
        assert!(!is_additive("-112358"));
    }

    #[test]
    fn test_overflowing_sums_are_abandoned() {
        let max = u128::MAX.to_string();
        assert!(!is_additive(&format!("{}{}1", max, max)));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve("112358").unwrap(), "true");
        assert_eq!(solve("12345\n").unwrap(), "false");
        assert_eq!(
            solve("12a45"),
            Err(ChallengeError::InvalidDigits("12a45".to_string()))
        );
        assert!(solve("").is_err());
    }
}
