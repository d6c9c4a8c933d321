use crate::{
    implementation::cpu_avx::CpuAvx,
    layouts::{MAX_LIMBS, Module},
    oep::{MontgomeryMulBatchImpl, MontgomeryMulImpl},
    reference::{
        batch::mont_mul_batch_with,
        limbs::{compare_ref, sub_with_borrow_inplace_ref},
    },
};

/// `res = a * b * R^-1 mod modulus` using `mulx` for the 64x64 products and
/// `adc` chains for the carries. Bit-identical to [`crate::reference::montgomery::mont_mul_ref`].
///
/// # Safety
/// Caller must ensure the CPU supports BMI2 and ADX (e.g., via `is_x86_feature_detected!("bmi2")`);
/// `a`, `b`, `res` must have `modulus.len() <= MAX_LIMBS` limbs.
#[target_feature(enable = "bmi2,adx")]
pub fn mont_mul_bmi2(res: &mut [u64], a: &[u64], b: &[u64], modulus: &[u64], mu: u64) {
    let l: usize = modulus.len();

    #[cfg(debug_assertions)]
    {
        assert!(l <= MAX_LIMBS);
        assert_eq!(a.len(), l);
        assert_eq!(b.len(), l);
        assert_eq!(res.len(), l);
    }

    use core::arch::x86_64::{_addcarry_u64, _mulx_u64};

    let mut scratch: [u64; 2 * MAX_LIMBS] = [0u64; 2 * MAX_LIMBS];
    let t: &mut [u64] = &mut scratch[..2 * l];
    let mut overflow: u8 = 0;

    // t = a * b. hi + carries never overflows: a_i * b_j + t + carry < 2^128.
    for (i, &ai) in a.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &bj) in b.iter().enumerate() {
            let mut hi: u64 = 0;
            let lo: u64 = _mulx_u64(ai, bj, &mut hi);
            let mut s: u64 = 0;
            let c0: u8 = _addcarry_u64(0, t[i + j], lo, &mut s);
            let c1: u8 = _addcarry_u64(0, s, carry, &mut s);
            t[i + j] = s;
            carry = hi + c0 as u64 + c1 as u64;
        }
        t[i + l] = carry;
    }

    for i in 0..l {
        let q: u64 = t[i].wrapping_mul(mu);
        let mut carry: u64 = 0;
        for (j, &mj) in modulus.iter().enumerate() {
            let mut hi: u64 = 0;
            let lo: u64 = _mulx_u64(q, mj, &mut hi);
            let mut s: u64 = 0;
            let c0: u8 = _addcarry_u64(0, t[i + j], lo, &mut s);
            let c1: u8 = _addcarry_u64(0, s, carry, &mut s);
            t[i + j] = s;
            carry = hi + c0 as u64 + c1 as u64;
        }
        let mut c: u8 = 0;
        for (k, tk) in t[i + l..].iter_mut().enumerate() {
            let addend: u64 = if k == 0 { carry } else { 0 };
            c = _addcarry_u64(c, *tk, addend, tk);
        }
        overflow += c;
    }

    res.copy_from_slice(&t[l..]);
    if overflow != 0 || compare_ref(res, modulus).is_ge() {
        sub_with_borrow_inplace_ref(res, modulus);
    }
}

unsafe impl MontgomeryMulImpl<Self> for CpuAvx {
    #[inline(always)]
    fn mont_mul_4limb_impl(_module: &Module<Self>, a: &[u64; 4], b: &[u64; 4], modulus: &[u64; 4], mu: u64) -> [u64; 4] {
        let mut res: [u64; 4] = [0u64; 4];
        unsafe {
            mont_mul_bmi2(&mut res, a, b, modulus, mu);
        }
        res
    }

    #[inline(always)]
    fn mont_mul_6limb_impl(_module: &Module<Self>, a: &[u64; 6], b: &[u64; 6], modulus: &[u64; 6], mu: u64) -> [u64; 6] {
        let mut res: [u64; 6] = [0u64; 6];
        unsafe {
            mont_mul_bmi2(&mut res, a, b, modulus, mu);
        }
        res
    }
}

unsafe impl MontgomeryMulBatchImpl<Self> for CpuAvx {
    fn mont_mul_batch_impl(_module: &Module<Self>, res: &mut [u64], a: &[u64], b: &[u64], modulus: &[u64], mu: u64, limb_count: usize) {
        mont_mul_batch_with(res, a, b, modulus, mu, limb_count, |r, a, b, m, mu| unsafe {
            mont_mul_bmi2(r, a, b, m, mu)
        });
    }
}
