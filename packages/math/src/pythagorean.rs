//! Pythagorean triples and Euclid's parametrization.
//!
//! For u > v > 0, Euclid's formula gives the triple
//! (u² - v², 2uv, u² + v²). It is primitive exactly when gcd(u, v) = 1 and
//! u, v are not both odd, and every primitive triple arises this way.

use std::fmt;

use num_integer::Integer;

use crate::divisors::divisors;
use crate::square::perfect_sqrt;

/// A triple (x, y, z) with x² + y² = z².
///
/// x and y are kept in the order they were generated, so x may exceed y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub x: u64,
    pub y: u64,
    pub z: u64,
}

impl Triple {
    pub fn new(x: u64, y: u64, z: u64) -> Self {
        Triple { x, y, z }
    }

    /// Multiply every side by k.
    pub fn scale(&self, k: u64) -> Self {
        Triple {
            x: self.x * k,
            y: self.y * k,
            z: self.z * k,
        }
    }

    /// Check x² + y² = z² exactly.
    ///
    /// Widens to u128 so the check itself cannot overflow.
    pub fn is_valid(&self) -> bool {
        let (x, y, z) = (self.x as u128, self.y as u128, self.z as u128);
        x * x + y * y == z * z
    }

    /// True if n is one of the three sides.
    pub fn contains(&self, n: u64) -> bool {
        self.x == n || self.y == n || self.z == n
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.x, self.y, self.z)
    }
}

/// Parameters (u, v) of Euclid's formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EuclidPair {
    pub u: u64,
    pub v: u64,
}

impl EuclidPair {
    pub fn new(u: u64, v: u64) -> Self {
        EuclidPair { u, v }
    }

    /// True if the pair generates a primitive triple: u > v > 0, coprime,
    /// and not both odd.
    ///
    /// # Example
    ///
    /// ```
    /// use math::pythagorean::EuclidPair;
    ///
    /// assert!(EuclidPair::new(2, 1).is_primitive()); // (3, 4, 5)
    /// assert!(!EuclidPair::new(3, 1).is_primitive()); // both odd: (8, 6, 10)
    /// assert!(!EuclidPair::new(4, 2).is_primitive()); // gcd 2: (12, 16, 20)
    /// ```
    pub fn is_primitive(&self) -> bool {
        let (u, v) = (self.u, self.v);
        u > v && v > 0 && u.gcd(&v) == 1 && !(u.is_odd() && v.is_odd())
    }

    /// The triple (u² - v², 2uv, u² + v²).
    pub fn triple(&self) -> Triple {
        let (u, v) = (self.u, self.v);
        Triple {
            x: u * u - v * v,
            y: 2 * u * v,
            z: u * u + v * v,
        }
    }
}

/// Position a value takes in a generated triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// x = u² - v²
    X,
    /// y = 2uv
    Y,
    /// z = u² + v²
    Z,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::X, Role::Y, Role::Z];

    /// The side of `triple` this role refers to.
    pub fn side(&self, triple: &Triple) -> u64 {
        match self {
            Role::X => triple.x,
            Role::Y => triple.y,
            Role::Z => triple.z,
        }
    }
}

/// Find every pair (u, v) with u > v > 0 whose Euclid triple has `target`
/// in the given role.
///
/// Pairs are not filtered for primitivity; callers screen them with
/// [`EuclidPair::is_primitive`].
///
/// # Example
///
/// ```
/// use math::pythagorean::{params_for, EuclidPair, Role};
///
/// assert_eq!(params_for(Role::X, 15), vec![EuclidPair::new(4, 1), EuclidPair::new(8, 7)]);
/// assert_eq!(params_for(Role::Y, 12), vec![EuclidPair::new(6, 1), EuclidPair::new(3, 2)]);
/// assert_eq!(params_for(Role::Z, 25), vec![EuclidPair::new(4, 3)]);
/// ```
pub fn params_for(role: Role, target: u64) -> Vec<EuclidPair> {
    if target == 0 {
        return Vec::new();
    }
    match role {
        Role::X => params_for_difference(target),
        Role::Y => params_for_product(target),
        Role::Z => params_for_sum(target),
    }
}

// u² - v² = t. u > sqrt(t) keeps v > 0, and u ≤ (t + 1) / 2 keeps v < u.
fn params_for_difference(t: u64) -> Vec<EuclidPair> {
    (t.isqrt() + 1..=t.div_ceil(2))
        .filter_map(|u| perfect_sqrt(u * u - t).map(|v| EuclidPair::new(u, v)))
        .collect()
}

// 2uv = t. Divisors of t / 2 come ascending, so v < u holds for a prefix.
fn params_for_product(t: u64) -> Vec<EuclidPair> {
    if t.is_odd() {
        return Vec::new();
    }
    let half = t / 2;
    divisors(half)
        .map(|v| EuclidPair::new(half / v, v))
        .take_while(|p| p.v < p.u)
        .collect()
}

// u² + v² = t. u > v needs (v + 1)² + v² ≤ t, i.e. v ≤ (sqrt(2t - 1) - 1) / 2.
fn params_for_sum(t: u64) -> Vec<EuclidPair> {
    let max_v = ((2 * t - 1).isqrt() - 1) / 2;
    (1..=max_v)
        .filter_map(|v| perfect_sqrt(t - v * v).map(|u| EuclidPair::new(u, v)))
        .collect()
}
