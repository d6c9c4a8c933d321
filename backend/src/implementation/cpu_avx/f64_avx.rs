//! 256-bit `f64` kernels. Each lane performs the same operations in the same
//! order as the reference, with no fused multiply-add, so results match it bit for bit.

use crate::reference::{
    ntt::ntt_butterfly_f64_ref,
    vec::{vec_add_ref, vec_mul_ref, vec_muladd_ref, vec_scale_ref, vec_sub_ref},
};

/// # Safety
/// Caller must ensure the CPU supports AVX (e.g., via `is_x86_feature_detected!("avx")`);
/// all inputs must have the same length and must not alias.
#[target_feature(enable = "avx")]
pub fn vec_add_avx(res: &mut [f64], a: &[f64], b: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    use core::arch::x86_64::{__m256d, _mm256_add_pd, _mm256_loadu_pd, _mm256_storeu_pd};

    let n: usize = res.len();
    let span: usize = n >> 2;

    let mut rr: *mut f64 = res.as_mut_ptr();
    let mut aa: *const f64 = a.as_ptr();
    let mut bb: *const f64 = b.as_ptr();

    unsafe {
        for _ in 0..span {
            let r: __m256d = _mm256_add_pd(_mm256_loadu_pd(aa), _mm256_loadu_pd(bb));
            _mm256_storeu_pd(rr, r);
            rr = rr.add(4);
            aa = aa.add(4);
            bb = bb.add(4);
        }
    }

    // tail
    if !n.is_multiple_of(4) {
        vec_add_ref(&mut res[span << 2..], &a[span << 2..], &b[span << 2..]);
    }
}

/// # Safety
/// Caller must ensure the CPU supports AVX (e.g., via `is_x86_feature_detected!("avx")`);
/// all inputs must have the same length and must not alias.
#[target_feature(enable = "avx")]
pub fn vec_sub_avx(res: &mut [f64], a: &[f64], b: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    use core::arch::x86_64::{__m256d, _mm256_loadu_pd, _mm256_storeu_pd, _mm256_sub_pd};

    let n: usize = res.len();
    let span: usize = n >> 2;

    let mut rr: *mut f64 = res.as_mut_ptr();
    let mut aa: *const f64 = a.as_ptr();
    let mut bb: *const f64 = b.as_ptr();

    unsafe {
        for _ in 0..span {
            let r: __m256d = _mm256_sub_pd(_mm256_loadu_pd(aa), _mm256_loadu_pd(bb));
            _mm256_storeu_pd(rr, r);
            rr = rr.add(4);
            aa = aa.add(4);
            bb = bb.add(4);
        }
    }

    // tail
    if !n.is_multiple_of(4) {
        vec_sub_ref(&mut res[span << 2..], &a[span << 2..], &b[span << 2..]);
    }
}

/// # Safety
/// Caller must ensure the CPU supports AVX (e.g., via `is_x86_feature_detected!("avx")`);
/// all inputs must have the same length and must not alias.
#[target_feature(enable = "avx")]
pub fn vec_mul_avx(res: &mut [f64], a: &[f64], b: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    use core::arch::x86_64::{__m256d, _mm256_loadu_pd, _mm256_mul_pd, _mm256_storeu_pd};

    let n: usize = res.len();
    let span: usize = n >> 2;

    let mut rr: *mut f64 = res.as_mut_ptr();
    let mut aa: *const f64 = a.as_ptr();
    let mut bb: *const f64 = b.as_ptr();

    unsafe {
        for _ in 0..span {
            let r: __m256d = _mm256_mul_pd(_mm256_loadu_pd(aa), _mm256_loadu_pd(bb));
            _mm256_storeu_pd(rr, r);
            rr = rr.add(4);
            aa = aa.add(4);
            bb = bb.add(4);
        }
    }

    // tail
    if !n.is_multiple_of(4) {
        vec_mul_ref(&mut res[span << 2..], &a[span << 2..], &b[span << 2..]);
    }
}

/// # Safety
/// Caller must ensure the CPU supports AVX (e.g., via `is_x86_feature_detected!("avx")`);
/// all inputs must have the same length and must not alias.
#[target_feature(enable = "avx")]
pub fn vec_scale_avx(res: &mut [f64], a: &[f64], scalar: f64) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    use core::arch::x86_64::{__m256d, _mm256_loadu_pd, _mm256_mul_pd, _mm256_set1_pd, _mm256_storeu_pd};

    let n: usize = res.len();
    let span: usize = n >> 2;

    let mut rr: *mut f64 = res.as_mut_ptr();
    let s: __m256d = _mm256_set1_pd(scalar);
    let mut aa: *const f64 = a.as_ptr();

    unsafe {
        for _ in 0..span {
            _mm256_storeu_pd(rr, _mm256_mul_pd(_mm256_loadu_pd(aa), s));
            rr = rr.add(4);
            aa = aa.add(4);
        }
    }

    // tail
    if !n.is_multiple_of(4) {
        vec_scale_ref(&mut res[span << 2..], &a[span << 2..], scalar);
    }
}

/// `res = a * b + c`, product rounded before the sum.
///
/// # Safety
/// Caller must ensure the CPU supports AVX (e.g., via `is_x86_feature_detected!("avx")`);
/// all inputs must have the same length and must not alias.
#[target_feature(enable = "avx")]
pub fn vec_muladd_avx(res: &mut [f64], a: &[f64], b: &[f64], c: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
        assert_eq!(res.len(), c.len());
    }

    use core::arch::x86_64::{__m256d, _mm256_add_pd, _mm256_loadu_pd, _mm256_mul_pd, _mm256_storeu_pd};

    let n: usize = res.len();
    let span: usize = n >> 2;

    let mut rr: *mut f64 = res.as_mut_ptr();
    let mut aa: *const f64 = a.as_ptr();
    let mut bb: *const f64 = b.as_ptr();
    let mut cc: *const f64 = c.as_ptr();

    unsafe {
        for _ in 0..span {
            let p: __m256d = _mm256_mul_pd(_mm256_loadu_pd(aa), _mm256_loadu_pd(bb));
            _mm256_storeu_pd(rr, _mm256_add_pd(p, _mm256_loadu_pd(cc)));
            rr = rr.add(4);
            aa = aa.add(4);
            bb = bb.add(4);
            cc = cc.add(4);
        }
    }

    // tail
    if !n.is_multiple_of(4) {
        vec_muladd_ref(&mut res[span << 2..], &a[span << 2..], &b[span << 2..], &c[span << 2..]);
    }
}

/// Real butterfly: `t = twiddle_real * in_odd`, `out_even = in_even + t`, `out_odd = in_even - t`.
/// `_twiddle_imag` is never read.
///
/// # Safety
/// Caller must ensure the CPU supports AVX (e.g., via `is_x86_feature_detected!("avx")`);
/// all inputs must have the same length and must not alias.
#[target_feature(enable = "avx")]
pub fn ntt_butterfly_f64_avx(
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

    use core::arch::x86_64::{__m256d, _mm256_add_pd, _mm256_loadu_pd, _mm256_mul_pd, _mm256_storeu_pd, _mm256_sub_pd};

    let n: usize = in_even.len();
    let span: usize = n >> 2;

    let mut oe: *mut f64 = out_even.as_mut_ptr();
    let mut oo: *mut f64 = out_odd.as_mut_ptr();
    let mut ee: *const f64 = in_even.as_ptr();
    let mut dd: *const f64 = in_odd.as_ptr();
    let mut ww: *const f64 = twiddle_real.as_ptr();

    unsafe {
        for _ in 0..span {
            let e: __m256d = _mm256_loadu_pd(ee);
            let t: __m256d = _mm256_mul_pd(_mm256_loadu_pd(ww), _mm256_loadu_pd(dd));
            _mm256_storeu_pd(oe, _mm256_add_pd(e, t));
            _mm256_storeu_pd(oo, _mm256_sub_pd(e, t));
            oe = oe.add(4);
            oo = oo.add(4);
            ee = ee.add(4);
            dd = dd.add(4);
            ww = ww.add(4);
        }
    }

    // tail
    if !n.is_multiple_of(4) {
        let s: usize = span << 2;
        ntt_butterfly_f64_ref(
            &mut out_even[s..],
            &mut out_odd[s..],
            &in_even[s..],
            &in_odd[s..],
            &twiddle_real[s..],
            &[],
        );
    }
}
