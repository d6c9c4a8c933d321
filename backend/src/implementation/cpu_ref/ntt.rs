use crate::{
    implementation::cpu_ref::CpuRef,
    layouts::Module,
    oep::{NttButterflyF64Impl, NttButterflyImpl},
    reference::ntt::{ntt_butterfly_f64_ref, ntt_butterfly_ref},
};

unsafe impl NttButterflyImpl<Self> for CpuRef {
    fn ntt_butterfly_impl(
        _module: &Module<Self>,
        out_even: &mut [u64],
        out_odd: &mut [u64],
        in_even: &[u64],
        in_odd: &[u64],
        twiddle: &[u64],
        modulus: &[u64],
        mu: u64,
    ) {
        ntt_butterfly_ref(out_even, out_odd, in_even, in_odd, twiddle, modulus, mu);
    }
}

unsafe impl NttButterflyF64Impl<Self> for CpuRef {
    fn ntt_butterfly_f64_impl(
        _module: &Module<Self>,
        out_even: &mut [f64],
        out_odd: &mut [f64],
        in_even: &[f64],
        in_odd: &[f64],
        twiddle_real: &[f64],
        twiddle_imag: &[f64],
    ) {
        ntt_butterfly_f64_ref(out_even, out_odd, in_even, in_odd, twiddle_real, twiddle_imag);
    }
}
