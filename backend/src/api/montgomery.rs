use crate::error::Result;

pub trait MontgomeryMul {
    /// Returns `a * b * 2^-256 mod modulus` for reduced 256-bit operands.
    fn mont_mul_4limb(&self, a: &[u64; 4], b: &[u64; 4], modulus: &[u64; 4], mu: u64) -> [u64; 4];

    /// Returns `a * b * 2^-384 mod modulus` for reduced 384-bit operands.
    fn mont_mul_6limb(&self, a: &[u64; 6], b: &[u64; 6], modulus: &[u64; 6], mu: u64) -> [u64; 6];
}

pub trait MontgomeryMulBatch {
    /// Writes `count` products `a[i] * b[i] * R^-1 mod modulus` into `res`, each
    /// element occupying `limb_count` consecutive limbs.
    ///
    /// If `limb_count` is neither 4 nor 6, `res` is filled with zeros and the call
    /// succeeds. Length errors are reported before anything is written.
    #[allow(clippy::too_many_arguments)]
    fn mont_mul_batch(
        &self,
        res: &mut [u64],
        a: &[u64],
        b: &[u64],
        modulus: &[u64],
        mu: u64,
        count: usize,
        limb_count: usize,
    ) -> Result<()>;
}
