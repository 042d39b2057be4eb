use field::FieldError;
use thiserror::Error;

/// Errors from the byte-oriented hashing entry points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Byte input whose length is not a multiple of 8.
    #[error("input length {0} is not a multiple of 8 bytes")]
    InvalidLength(usize),
    #[error(transparent)]
    Field(#[from] FieldError),
}
