use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("encoding does not decode to a curve point")]
    MalformedPoint,
    #[error("scalar limbs are not below the group order")]
    NonCanonicalScalar,
}
