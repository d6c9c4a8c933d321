use std::collections::TryReserveError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] zkaccel_backend::Error),

    #[error("invalid modulus: {0}")]
    InvalidModulus(&'static str),

    /// A caller-owned buffer could not be allocated.
    #[error("allocation failed: {0}")]
    OutOfMemory(TryReserveError),
}
