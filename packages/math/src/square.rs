//! Exact integer square roots.

/// Returns the exact square root of n if n is a perfect square.
///
/// Uses integer arithmetic only, so large squares are never misjudged by
/// floating-point rounding.
///
/// # Example
///
/// ```
/// use math::square::perfect_sqrt;
///
/// assert_eq!(perfect_sqrt(144), Some(12));
/// assert_eq!(perfect_sqrt(0), Some(0));
/// assert_eq!(perfect_sqrt(145), None);
/// ```
pub fn perfect_sqrt(n: u64) -> Option<u64> {
    let root = n.isqrt();
    (root * root == n).then_some(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_sqrt() {
        assert_eq!(perfect_sqrt(1), Some(1));
        assert_eq!(perfect_sqrt(2), None);
        assert_eq!(perfect_sqrt(4), Some(2));
        assert_eq!(perfect_sqrt(99), None);
        assert_eq!(perfect_sqrt(100), Some(10));

        let squares: Vec<u64> = (0..50).filter(|&n| perfect_sqrt(n).is_some()).collect();
        assert_eq!(squares, vec![0, 1, 4, 9, 16, 25, 36, 49]);
    }

    #[test]
    fn test_perfect_sqrt_near_float_precision_limit() {
        // (2^32 - 1)^2 and its neighbours are not separable as f64
        let root = u32::MAX as u64;
        assert_eq!(perfect_sqrt(root * root), Some(root));
        assert_eq!(perfect_sqrt(root * root - 1), None);
        assert_eq!(perfect_sqrt(root * root + 1), None);
    }
}
