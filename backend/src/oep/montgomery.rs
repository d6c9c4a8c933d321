use crate::layouts::{Backend, Module};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::montgomery::mont_mul_ref] for reference code.
/// * See [crate::api::MontgomeryMul] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MontgomeryMulImpl<B: Backend> {
    fn mont_mul_4limb_impl(module: &Module<B>, a: &[u64; 4], b: &[u64; 4], modulus: &[u64; 4], mu: u64) -> [u64; 4];
    fn mont_mul_6limb_impl(module: &Module<B>, a: &[u64; 6], b: &[u64; 6], modulus: &[u64; 6], mu: u64) -> [u64; 6];
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::batch::mont_mul_batch_ref] for reference code.
/// * See [crate::api::MontgomeryMulBatch] for corresponding public API.
/// * Lengths are validated; `limb_count` is not and must be zero-filled when unsupported.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MontgomeryMulBatchImpl<B: Backend> {
    fn mont_mul_batch_impl(module: &Module<B>, res: &mut [u64], a: &[u64], b: &[u64], modulus: &[u64], mu: u64, limb_count: usize);
}
