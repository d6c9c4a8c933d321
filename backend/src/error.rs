/// Result type for the checked [`crate::api`] layer.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the checked [`crate::api`] layer before any arithmetic runs.
///
/// The [`crate::oep`] implementations and the [`crate::reference`] kernels never
/// return errors: a call that reaches them has already been validated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A buffer does not have the length implied by the other arguments.
    #[error("invalid length for `{name}`: expected {expected}, got {got}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    /// The product of the shape arguments does not fit in `usize`.
    #[error("shape overflow while computing the length of `{0}`")]
    ShapeOverflow(&'static str),

    /// The operation has no kernel for this limb count.
    #[error("unsupported limb count {0}: expected 4 or 6")]
    UnsupportedLimbCount(usize),

    /// Window sizes must produce digits that fit in `u32`.
    #[error("invalid window size {0}: expected 1..=32")]
    InvalidWindowSize(u32),

    /// The running CPU lacks a feature the backend requires.
    #[error("backend `{0}` is not supported on this CPU")]
    BackendUnavailable(&'static str),
}

/// Checks that `got == expected`.
#[inline]
pub(crate) fn check_len(name: &'static str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(Error::LengthMismatch { name, expected, got });
    }
    Ok(())
}

/// Returns `a * b`, or [`Error::ShapeOverflow`] naming the buffer being sized.
#[inline]
pub(crate) fn checked_shape(name: &'static str, a: usize, b: usize) -> Result<usize> {
    a.checked_mul(b).ok_or(Error::ShapeOverflow(name))
}
