//! Goldilocks prime field and its degree-5 extension.
//!
//! The base field is `GF(p)` with `p = 2^64 - 2^32 + 1`. The extension is
//! `GF(p^5) = GF(p)[X] / (X^5 - 3)`, the field the ECgFp5 curve is defined over
//! and the codomain of `hash_to_quintic_extension`.

mod errors;
mod goldilocks;
mod quintic;
mod random;

pub use errors::FieldError;
pub use goldilocks::Goldilocks;
pub use quintic::QuinticExtension;
pub use random::RandomField;
