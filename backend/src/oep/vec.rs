use crate::layouts::{Backend, Module};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::vec::vec_add_ref] for reference code.
/// * See [crate::api::VecAdd] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait VecAddImpl<B: Backend> {
    fn vec_add_impl(module: &Module<B>, res: &mut [f64], a: &[f64], b: &[f64]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::vec::vec_sub_ref] for reference code.
/// * See [crate::api::VecSub] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait VecSubImpl<B: Backend> {
    fn vec_sub_impl(module: &Module<B>, res: &mut [f64], a: &[f64], b: &[f64]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::vec::vec_mul_ref] for reference code.
/// * See [crate::api::VecMul] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait VecMulImpl<B: Backend> {
    fn vec_mul_impl(module: &Module<B>, res: &mut [f64], a: &[f64], b: &[f64]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::vec::vec_scale_ref] for reference code.
/// * See [crate::api::VecScale] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait VecScaleImpl<B: Backend> {
    fn vec_scale_impl(module: &Module<B>, res: &mut [f64], a: &[f64], scalar: f64);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::vec::vec_muladd_ref] for reference code.
/// * See [crate::api::VecMulAdd] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait VecMulAddImpl<B: Backend> {
    fn vec_muladd_impl(module: &Module<B>, res: &mut [f64], a: &[f64], b: &[f64], c: &[f64]);
}
