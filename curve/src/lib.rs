//! The ECgFp5 elliptic curve group over GF(p^5), p = 2^64 - 2^32 + 1.
//!
//! This crate provides points in fractional `(X : Z : U : T)` coordinates,
//! affine windows for scalar multiplication, the prime-order scalar field,
//! and the canonical single-element point encoding.

mod affine;
mod basefield;
mod errors;
mod generator_table;
mod group;
mod msm;
mod projective;
mod random;
mod scalarfield;

pub use affine::Affine;
pub use basefield::BaseField;
pub use errors::CurveError;
pub use field::RandomField;
pub use generator_table::mul_generator;
pub use group::{Group, ScalarBits};
pub use msm::double_scalar_mul_basepoint;
pub use projective::{Projective, WINDOW, WINDOW_SIZE};
pub use scalarfield::ScalarField;
