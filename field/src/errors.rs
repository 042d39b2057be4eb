use thiserror::Error;

/// Errors raised by base and extension field arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// An inverse was requested for the zero element.
    #[error("zero has no multiplicative inverse")]
    NonInvertible,
    /// A value outside `[0, p)` was supplied where a canonical element was required.
    #[error("{0:#018x} is not a canonical Goldilocks element")]
    NonCanonical(u64),
}
