use crate::{
    api::{NttButterfly, NttButterflyF64},
    error::{Error, Result, check_len},
    layouts::{Backend, Module, is_supported_limb_count},
    oep::{NttButterflyF64Impl, NttButterflyImpl},
};

impl<B> NttButterfly for Module<B>
where
    B: Backend + NttButterflyImpl<B>,
{
    fn ntt_butterfly(
        &self,
        out_even: &mut [u64],
        out_odd: &mut [u64],
        in_even: &[u64],
        in_odd: &[u64],
        twiddle: &[u64],
        modulus: &[u64],
        mu: u64,
    ) -> Result<()> {
        let limb_count: usize = modulus.len();
        if !is_supported_limb_count(limb_count) {
            return Err(Error::UnsupportedLimbCount(limb_count));
        }
        let len: usize = in_even.len() - in_even.len() % limb_count;
        check_len("in_even", in_even.len(), len)?;
        check_len("in_odd", in_odd.len(), len)?;
        check_len("twiddle", twiddle.len(), len)?;
        check_len("out_even", out_even.len(), len)?;
        check_len("out_odd", out_odd.len(), len)?;
        B::ntt_butterfly_impl(self, out_even, out_odd, in_even, in_odd, twiddle, modulus, mu);
        Ok(())
    }
}

impl<B> NttButterflyF64 for Module<B>
where
    B: Backend + NttButterflyF64Impl<B>,
{
    fn ntt_butterfly_f64(
        &self,
        out_even: &mut [f64],
        out_odd: &mut [f64],
        in_even: &[f64],
        in_odd: &[f64],
        twiddle_real: &[f64],
        twiddle_imag: &[f64],
    ) -> Result<()> {
        let n: usize = in_even.len();
        check_len("in_odd", in_odd.len(), n)?;
        check_len("twiddle_real", twiddle_real.len(), n)?;
        if !twiddle_imag.is_empty() {
            check_len("twiddle_imag", twiddle_imag.len(), n)?;
        }
        check_len("out_even", out_even.len(), n)?;
        check_len("out_odd", out_odd.len(), n)?;
        B::ntt_butterfly_f64_impl(self, out_even, out_odd, in_even, in_odd, twiddle_real, twiddle_imag);
        Ok(())
    }
}
