use crate::{
    api::{MontgomeryMul, MontgomeryMulBatch},
    error::{Result, check_len, checked_shape},
    layouts::{Backend, Module},
    oep::{MontgomeryMulBatchImpl, MontgomeryMulImpl},
};

impl<B> MontgomeryMul for Module<B>
where
    B: Backend + MontgomeryMulImpl<B>,
{
    fn mont_mul_4limb(&self, a: &[u64; 4], b: &[u64; 4], modulus: &[u64; 4], mu: u64) -> [u64; 4] {
        B::mont_mul_4limb_impl(self, a, b, modulus, mu)
    }

    fn mont_mul_6limb(&self, a: &[u64; 6], b: &[u64; 6], modulus: &[u64; 6], mu: u64) -> [u64; 6] {
        B::mont_mul_6limb_impl(self, a, b, modulus, mu)
    }
}

impl<B> MontgomeryMulBatch for Module<B>
where
    B: Backend + MontgomeryMulBatchImpl<B>,
{
    fn mont_mul_batch(
        &self,
        res: &mut [u64],
        a: &[u64],
        b: &[u64],
        modulus: &[u64],
        mu: u64,
        count: usize,
        limb_count: usize,
    ) -> Result<()> {
        let len: usize = checked_shape("res", count, limb_count)?;
        check_len("res", res.len(), len)?;
        check_len("a", a.len(), len)?;
        check_len("b", b.len(), len)?;
        check_len("modulus", modulus.len(), limb_count)?;
        B::mont_mul_batch_impl(self, res, a, b, modulus, mu, limb_count);
        Ok(())
    }
}
