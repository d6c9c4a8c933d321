use itertools::izip;

use crate::{
    layouts::MAX_LIMBS,
    reference::{
        field::{field_add_ref, field_sub_ref},
        montgomery::mont_mul_ref,
    },
};

/// One radix-2 stage: `t = w[i] * odd[i]`, `out_even[i] = even[i] + t`, `out_odd[i] = even[i] - t`.
///
/// Every buffer holds `n` elements of `modulus.len()` limbs. Twiddles are in
/// Montgomery form, so outputs stay in the same form as the inputs.
pub fn ntt_butterfly_ref(
    out_even: &mut [u64],
    out_odd: &mut [u64],
    in_even: &[u64],
    in_odd: &[u64],
    twiddle: &[u64],
    modulus: &[u64],
    mu: u64,
) {
    ntt_butterfly_with(out_even, out_odd, in_even, in_odd, twiddle, modulus, mu, mont_mul_ref);
}

/// Butterfly driver shared by the backends: `mont_mul` computes the twiddle product.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn ntt_butterfly_with<K>(
    out_even: &mut [u64],
    out_odd: &mut [u64],
    in_even: &[u64],
    in_odd: &[u64],
    twiddle: &[u64],
    modulus: &[u64],
    mu: u64,
    mont_mul: K,
) where
    K: Fn(&mut [u64], &[u64], &[u64], &[u64], u64),
{
    let l: usize = modulus.len();

    #[cfg(debug_assertions)]
    {
        assert!(l <= MAX_LIMBS);
        assert_eq!(out_even.len(), in_even.len());
        assert_eq!(out_odd.len(), in_even.len());
        assert_eq!(in_odd.len(), in_even.len());
        assert_eq!(twiddle.len(), in_even.len());
    }

    let mut scratch: [u64; MAX_LIMBS] = [0u64; MAX_LIMBS];
    let t: &mut [u64] = &mut scratch[..l];

    izip!(
        out_even.chunks_exact_mut(l),
        out_odd.chunks_exact_mut(l),
        in_even.chunks_exact(l),
        in_odd.chunks_exact(l),
        twiddle.chunks_exact(l)
    )
    .for_each(|(oe, oo, e, o, w)| {
        mont_mul(t, w, o, modulus, mu);
        field_add_ref(oe, e, t, modulus);
        field_sub_ref(oo, e, t, modulus);
    });
}

/// Real-valued butterfly: `t = twiddle_real[i] * in_odd[i]`.
///
/// `_twiddle_imag` is accepted so the signature matches complex transforms
/// and is never read. No complex multiplication is performed.
#[inline(always)]
pub fn ntt_butterfly_f64_ref(
    out_even: &mut [f64],
    out_odd: &mut [f64],
    in_even: &[f64],
    in_odd: &[f64],
    twiddle_real: &[f64],
    _twiddle_imag: &[f64],
) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(out_even.len(), in_even.len());
        assert_eq!(out_odd.len(), in_even.len());
        assert_eq!(in_odd.len(), in_even.len());
        assert_eq!(twiddle_real.len(), in_even.len());
    }

    izip!(
        out_even.iter_mut(),
        out_odd.iter_mut(),
        in_even.iter(),
        in_odd.iter(),
        twiddle_real.iter()
    )
    .for_each(|(oe, oo, &e, &o, &w)| {
        let t: f64 = w * o;
        *oe = e + t;
        *oo = e - t;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_ignores_imaginary_twiddle() {
        let even: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
        let odd: [f64; 4] = [10.0, 20.0, 30.0, 40.0];
        let w: [f64; 4] = [1.0, -1.0, 0.5, 2.0];
        let mut oe_a: [f64; 4] = [0.0; 4];
        let mut oo_a: [f64; 4] = [0.0; 4];
        let mut oe_b: [f64; 4] = [0.0; 4];
        let mut oo_b: [f64; 4] = [0.0; 4];
        ntt_butterfly_f64_ref(&mut oe_a, &mut oo_a, &even, &odd, &w, &[]);
        ntt_butterfly_f64_ref(&mut oe_b, &mut oo_b, &even, &odd, &w, &[f64::NAN; 4]);
        assert_eq!(oe_a, [11.0, -18.0, 18.0, 84.0]);
        assert_eq!(oo_a, [-9.0, 22.0, -12.0, -76.0]);
        assert_eq!(oe_a, oe_b);
        assert_eq!(oo_a, oo_b);
    }
}
