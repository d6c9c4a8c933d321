use crate::error::Result;

pub trait NttButterfly {
    /// Applies one radix-2 stage to `n` field elements of `modulus.len()` limbs:
    /// `t = twiddle[i] * in_odd[i]`, `out_even[i] = in_even[i] + t`, `out_odd[i] = in_even[i] - t`.
    ///
    /// Twiddles and inputs are in Montgomery form. `modulus.len()` must be 4 or 6.
    #[allow(clippy::too_many_arguments)]
    fn ntt_butterfly(
        &self,
        out_even: &mut [u64],
        out_odd: &mut [u64],
        in_even: &[u64],
        in_odd: &[u64],
        twiddle: &[u64],
        modulus: &[u64],
        mu: u64,
    ) -> Result<()>;
}

pub trait NttButterflyF64 {
    /// Real-valued butterfly using `twiddle_real`.
    ///
    /// `twiddle_imag` must be empty or as long as the inputs. It is never read.
    fn ntt_butterfly_f64(
        &self,
        out_even: &mut [f64],
        out_odd: &mut [f64],
        in_even: &[f64],
        in_odd: &[f64],
        twiddle_real: &[f64],
        twiddle_imag: &[f64],
    ) -> Result<()>;
}
