pub mod additive_number;
pub mod pythagorean_triples;
