use crate::layouts::{Backend, Module};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mat::mat_mul_ref] for reference code.
/// * See [crate::api::MatMul] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MatMulImpl<B: Backend> {
    #[allow(clippy::too_many_arguments)]
    fn mat_mul_impl(module: &Module<B>, c: &mut [f64], a: &[f64], b: &[f64], m: usize, n: usize, k: usize, alpha: f64, beta: f64);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mat::mat_vec_ref] for reference code.
/// * See [crate::api::MatVec] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MatVecImpl<B: Backend> {
    #[allow(clippy::too_many_arguments)]
    fn mat_vec_impl(module: &Module<B>, y: &mut [f64], a: &[f64], x: &[f64], m: usize, n: usize, alpha: f64, beta: f64);
}
