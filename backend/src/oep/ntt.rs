use crate::layouts::{Backend, Module};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::ntt::ntt_butterfly_ref] for reference code.
/// * See [crate::api::NttButterfly] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NttButterflyImpl<B: Backend> {
    #[allow(clippy::too_many_arguments)]
    fn ntt_butterfly_impl(
        module: &Module<B>,
        out_even: &mut [u64],
        out_odd: &mut [u64],
        in_even: &[u64],
        in_odd: &[u64],
        twiddle: &[u64],
        modulus: &[u64],
        mu: u64,
    );
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::ntt::ntt_butterfly_f64_ref] for reference code.
/// * See [crate::api::NttButterflyF64] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NttButterflyF64Impl<B: Backend> {
    fn ntt_butterfly_f64_impl(
        module: &Module<B>,
        out_even: &mut [f64],
        out_odd: &mut [f64],
        in_even: &[f64],
        in_odd: &[f64],
        twiddle_real: &[f64],
        twiddle_imag: &[f64],
    );
}
