use crate::{
    implementation::cpu_ref::CpuRef,
    layouts::Module,
    oep::{MontgomeryMulBatchImpl, MontgomeryMulImpl},
    reference::{
        batch::mont_mul_batch_ref,
        montgomery::{mont_mul_4limb_ref, mont_mul_6limb_ref},
    },
};

unsafe impl MontgomeryMulImpl<Self> for CpuRef {
    #[inline(always)]
    fn mont_mul_4limb_impl(_module: &Module<Self>, a: &[u64; 4], b: &[u64; 4], modulus: &[u64; 4], mu: u64) -> [u64; 4] {
        mont_mul_4limb_ref(a, b, modulus, mu)
    }

    #[inline(always)]
    fn mont_mul_6limb_impl(_module: &Module<Self>, a: &[u64; 6], b: &[u64; 6], modulus: &[u64; 6], mu: u64) -> [u64; 6] {
        mont_mul_6limb_ref(a, b, modulus, mu)
    }
}

unsafe impl MontgomeryMulBatchImpl<Self> for CpuRef {
    fn mont_mul_batch_impl(_module: &Module<Self>, res: &mut [u64], a: &[u64], b: &[u64], modulus: &[u64], mu: u64, limb_count: usize) {
        mont_mul_batch_ref(res, a, b, modulus, mu, limb_count);
    }
}
