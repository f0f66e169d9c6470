pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{CasteljauError, Result};
pub use tolerance::Tolerance;
