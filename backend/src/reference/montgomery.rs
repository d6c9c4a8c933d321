//! Fixed-width Montgomery multiplication.
//!
//! One algorithm serves both supported widths: a schoolbook product into a
//! `2L`-limb stack buffer followed by word-by-word Montgomery reduction. The
//! modulus and `mu = -modulus^-1 mod 2^64` are caller data; nothing here is
//! specific to a field.

use std::cmp::Ordering;

use crate::{
    layouts::MAX_LIMBS,
    reference::limbs::{compare_ref, sub_with_borrow_inplace_ref},
};

/// `t = a * b` with `t.len() == 2 * a.len()`.
#[inline(always)]
pub fn schoolbook_mul_ref(t: &mut [u64], a: &[u64], b: &[u64]) {
    let l: usize = a.len();

    #[cfg(debug_assertions)]
    {
        assert_eq!(b.len(), l);
        assert_eq!(t.len(), 2 * l);
    }

    t.fill(0);
    for (i, &ai) in a.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &bj) in b.iter().enumerate() {
            let acc: u128 = (ai as u128) * (bj as u128) + (t[i + j] as u128) + (carry as u128);
            t[i + j] = acc as u64;
            carry = (acc >> 64) as u64;
        }
        t[i + l] = carry;
    }
}

/// Reduces the `2L`-limb value `t` (clobbered) and writes `t * R^-1 mod modulus` to `res`.
///
/// Requires `t < modulus * R`. Carries out of the top limb of `t` are kept in a
/// separate word so moduli above `R / 2` reduce correctly.
#[inline(always)]
pub fn montgomery_reduce_ref(res: &mut [u64], t: &mut [u64], modulus: &[u64], mu: u64) {
    let l: usize = modulus.len();

    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), l);
        assert_eq!(t.len(), 2 * l);
    }

    let mut overflow: u64 = 0;
    for i in 0..l {
        let q: u64 = t[i].wrapping_mul(mu);
        let mut carry: u64 = 0;
        for (j, &mj) in modulus.iter().enumerate() {
            let acc: u128 = (q as u128) * (mj as u128) + (t[i + j] as u128) + (carry as u128);
            t[i + j] = acc as u64;
            carry = (acc >> 64) as u64;
        }
        for tk in t[i + l..].iter_mut() {
            if carry == 0 {
                break;
            }
            let (s, c) = tk.overflowing_add(carry);
            *tk = s;
            carry = c as u64;
        }
        overflow += carry;
    }

    res.copy_from_slice(&t[l..]);
    if overflow != 0 || compare_ref(res, modulus) != Ordering::Less {
        sub_with_borrow_inplace_ref(res, modulus);
    }
}

/// `res = a * b * R^-1 mod modulus`, `R = 2^(64 * modulus.len())`.
///
/// `a` and `b` must be reduced. A wrong `mu` yields a wrong but reduced-looking value.
#[inline(always)]
pub fn mont_mul_ref(res: &mut [u64], a: &[u64], b: &[u64], modulus: &[u64], mu: u64) {
    let l: usize = modulus.len();

    #[cfg(debug_assertions)]
    {
        assert!(l <= MAX_LIMBS, "limb count {l} > MAX_LIMBS");
        assert_eq!(a.len(), l);
        assert_eq!(b.len(), l);
    }

    let mut scratch: [u64; 2 * MAX_LIMBS] = [0u64; 2 * MAX_LIMBS];
    let t: &mut [u64] = &mut scratch[..2 * l];
    schoolbook_mul_ref(t, a, b);
    montgomery_reduce_ref(res, t, modulus, mu);
}

#[inline(always)]
pub fn mont_mul_4limb_ref(a: &[u64; 4], b: &[u64; 4], modulus: &[u64; 4], mu: u64) -> [u64; 4] {
    let mut res: [u64; 4] = [0u64; 4];
    mont_mul_ref(&mut res, a, b, modulus, mu);
    res
}

#[inline(always)]
pub fn mont_mul_6limb_ref(a: &[u64; 6], b: &[u64; 6], modulus: &[u64; 6], mu: u64) -> [u64; 6] {
    let mut res: [u64; 6] = [0u64; 6];
    mont_mul_ref(&mut res, a, b, modulus, mu);
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    const FR: [u64; 4] = [0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48];
    const FR_MU: u64 = 0xfffffffeffffffff;
    const FR_R: [u64; 4] = [0x00000001fffffffe, 0x5884b7fa00034802, 0x998c4fefecbc4ff5, 0x1824b159acc5056f];
    const FR_R2: [u64; 4] = [0xc999e990f3f29c6d, 0x2b6cedcb87925c23, 0x05d314967254398f, 0x0748d9d99f59ff11];

    const FQ: [u64; 6] = [
        0xb9feffffffffaaab,
        0x1eabfffeb153ffff,
        0x6730d2a0f6b0f624,
        0x64774b84f38512bf,
        0x4b1ba7b6434bacd7,
        0x1a0111ea397fe69a,
    ];
    const FQ_MU: u64 = 0x89f3fffcfffcfffd;
    const FQ_R2: [u64; 6] = [
        0xf4df1f341c341746,
        0x0a76e6a609d104f1,
        0x8de5476c4c95b6d5,
        0x67eb88a9939d83c0,
        0x9a793e85b519952d,
        0x11988fe592cae3aa,
    ];

    #[test]
    fn schoolbook_all_ones() {
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1
        let a: [u64; 4] = [u64::MAX; 4];
        let mut t: [u64; 8] = [0; 8];
        schoolbook_mul_ref(&mut t, &a, &a);
        assert_eq!(t, [1, 0, 0, 0, u64::MAX - 1, u64::MAX, u64::MAX, u64::MAX]);
    }

    #[test]
    fn montgomery_one_is_fixed_point() {
        assert_eq!(mont_mul_4limb_ref(&FR_R, &FR_R, &FR, FR_MU), FR_R);
    }

    #[test]
    fn into_and_out_of_montgomery_form() {
        let one: [u64; 4] = [1, 0, 0, 0];
        let x: [u64; 4] = [0x0123456789abcdef, 42, 7, 0x1000];
        let x_mont: [u64; 4] = mont_mul_4limb_ref(&x, &FR_R2, &FR, FR_MU);
        assert_eq!(mont_mul_4limb_ref(&x_mont, &one, &FR, FR_MU), x);
        assert_eq!(mont_mul_4limb_ref(&one, &FR_R2, &FR, FR_MU), FR_R);

        let one: [u64; 6] = [1, 0, 0, 0, 0, 0];
        let y: [u64; 6] = [3, 1, 4, 1, 5, 9];
        let y_mont: [u64; 6] = mont_mul_6limb_ref(&y, &FQ_R2, &FQ, FQ_MU);
        assert_eq!(mont_mul_6limb_ref(&y_mont, &one, &FQ, FQ_MU), y);
    }

    #[test]
    fn zero_annihilates() {
        let a: [u64; 6] = [u64::MAX, 1, 2, 3, 4, 5];
        assert_eq!(mont_mul_6limb_ref(&[0; 6], &a, &FQ, FQ_MU), [0; 6]);
    }
}
