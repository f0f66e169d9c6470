use crate::error::Result;

/// Validate structural integrity of a curve, point set, or settings value.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
