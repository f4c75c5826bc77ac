pub mod error;
pub mod types;

#[cfg(feature = "pricing")]
pub mod pricing;

#[cfg(feature = "ratings")]
pub mod ratings;

pub use error::RarocError;
pub use types::*;

/// Standard result type for all raroc-core operations
pub type RarocResult<T> = Result<T, RarocError>;
