use std::fmt::Debug;

use crate::api::MontgomeryMul;

/// Widest supported element, in 64-bit limbs. Sizes every stack scratch.
pub const MAX_LIMBS: usize = 6;

/// Returns `true` for the limb counts the Montgomery kernels are built for.
#[inline(always)]
pub fn is_supported_limb_count(limb_count: usize) -> bool {
    matches!(limb_count, 4 | 6)
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for [u64; 4] {}
    impl Sealed for [u64; 6] {}
}

/// Fixed-width little-endian limb arrays with a Montgomery kernel.
///
/// Implemented for `[u64; 4]` (256-bit) and `[u64; 6]` (384-bit) only.
pub trait FieldLimbs: sealed::Sealed + Copy + Default + Eq + Debug + Send + Sync + 'static {
    const LIMBS: usize;

    /// Dispatches to the matching fixed-width method of [`MontgomeryMul`].
    fn mont_mul<M: MontgomeryMul + ?Sized>(module: &M, a: &Self, b: &Self, modulus: &Self, mu: u64) -> Self;
}

impl FieldLimbs for [u64; 4] {
    const LIMBS: usize = 4;

    #[inline(always)]
    fn mont_mul<M: MontgomeryMul + ?Sized>(module: &M, a: &Self, b: &Self, modulus: &Self, mu: u64) -> Self {
        module.mont_mul_4limb(a, b, modulus, mu)
    }
}

impl FieldLimbs for [u64; 6] {
    const LIMBS: usize = 6;

    #[inline(always)]
    fn mont_mul<M: MontgomeryMul + ?Sized>(module: &M, a: &Self, b: &Self, modulus: &Self, mu: u64) -> Self {
        module.mont_mul_6limb(a, b, modulus, mu)
    }
}
