pub mod divisors;
pub mod pythagorean;
pub mod square;

pub use divisors::{Divisors, divisors};
pub use pythagorean::{EuclidPair, Role, Triple, params_for};
pub use square::perfect_sqrt;
