//! Divisor enumeration.

/// Iterator over the divisors of n in ascending order.
///
/// Walks candidates up to sqrt(n), yielding each small divisor as it is found
/// and holding back its paired cofactor n / d. Once the walk passes sqrt(n) the
/// held cofactors are popped off the back, which yields them ascending.
///
/// # Example
///
/// ```
/// use math::divisors::Divisors;
///
/// let divs: Vec<u64> = Divisors::new(28).collect();
/// assert_eq!(divs, vec![1, 2, 4, 7, 14, 28]);
/// ```
pub struct Divisors {
    n: u64,
    candidate: u64,
    large: Vec<u64>,
}

impl Divisors {
    pub fn new(n: u64) -> Self {
        Divisors {
            n,
            candidate: 1,
            large: Vec::new(),
        }
    }
}

impl Iterator for Divisors {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        while self.n > 0 && self.candidate <= self.n / self.candidate {
            let d = self.candidate;
            self.candidate += 1;
            if self.n.is_multiple_of(d) {
                let pair = self.n / d;
                if pair != d {
                    self.large.push(pair);
                }
                return Some(d);
            }
        }
        self.large.pop()
    }
}

/// Returns an iterator over the divisors of n, ascending, including 1 and n.
///
/// Zero has no divisors in this sense and yields an empty iterator.
///
/// # Example
///
/// ```
/// use math::divisors::divisors;
///
/// assert_eq!(divisors(12).collect::<Vec<_>>(), vec![1, 2, 3, 4, 6, 12]);
/// assert_eq!(divisors(1).collect::<Vec<_>>(), vec![1]);
/// assert_eq!(divisors(0).count(), 0);
/// ```
pub fn divisors(n: u64) -> Divisors {
    Divisors::new(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors_small() {
        assert_eq!(divisors(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(divisors(2).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(divisors(13).collect::<Vec<_>>(), vec![1, 13]);
        assert_eq!(
            divisors(60).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60]
        );
    }

    #[test]
    fn test_divisors_perfect_square_visits_root_once() {
        assert_eq!(divisors(36).collect::<Vec<_>>(), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
        assert_eq!(divisors(49).collect::<Vec<_>>(), vec![1, 7, 49]);
    }

    #[test]
    fn test_divisors_zero() {
        assert_eq!(divisors(0).next(), None);
    }

    #[test]
    fn test_divisors_match_trial_division() {
        for n in 1..=2_000u64 {
            let expected: Vec<u64> = (1..=n).filter(|d| n % d == 0).collect();
            assert_eq!(divisors(n).collect::<Vec<_>>(), expected, "n={}", n);
        }
    }
}
