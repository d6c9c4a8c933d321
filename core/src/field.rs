//! Prime fields over fixed-width limbs.
//!
//! A [`Field`] couples [`FieldParams`] with a backend [`Module`]. Elements are
//! plain `[u64; L]` arrays in Montgomery form (`x * R mod m`, `R = 2^(64 * L)`);
//! they never carry their modulus.

use std::cmp::Ordering;

use zkaccel_backend::{
    api::{MontgomeryMul, MontgomeryMulBatch},
    layouts::{Backend, FieldLimbs, Module},
    reference::{
        field::{field_add_ref, field_neg_ref, field_sub_ref},
        limbs::{add_with_carry_inplace_ref, compare_ref, is_zero_ref, sub_with_borrow_inplace_ref, sub_with_borrow_ref},
    },
};

use crate::error::{Error, Result};

/// Modulus and Montgomery constants of a field with `L`-limb elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldParams<const L: usize> {
    pub modulus: [u64; L],
    /// `-modulus^-1 mod 2^64`.
    pub mu: u64,
    /// `R mod modulus`, the Montgomery form of one.
    pub r: [u64; L],
    /// `R^2 mod modulus`, used to enter Montgomery form.
    pub r2: [u64; L],
}

/// BN254 scalar field.
pub const BN254_FR: FieldParams<4> = FieldParams {
    modulus: [0x43e1f593f0000001, 0x2833e84879b97091, 0xb85045b68181585d, 0x30644e72e131a029],
    mu: 0xc2e1f593efffffff,
    r: [0xac96341c4ffffffb, 0x36fc76959f60cd29, 0x666ea36f7879462e, 0x0e0a77c19a07df2f],
    r2: [0x1bb8e645ae216da7, 0x53fe3ab1e35c59e3, 0x8c49833d53bb8085, 0x0216d0b17f4e44a5],
};

/// BN254 base field.
pub const BN254_FQ: FieldParams<4> = FieldParams {
    modulus: [0x3c208c16d87cfd47, 0x97816a916871ca8d, 0xb85045b68181585d, 0x30644e72e131a029],
    mu: 0x87d20782e4866389,
    r: [0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f],
    r2: [0xf32cfc5b538afa89, 0xb5e71911d44501fb, 0x47ab1eff0a417ff6, 0x06d89f71cab8351f],
};

/// BLS12-381 scalar field.
pub const BLS12_381_FR: FieldParams<4> = FieldParams {
    modulus: [0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48],
    mu: 0xfffffffeffffffff,
    r: [0x00000001fffffffe, 0x5884b7fa00034802, 0x998c4fefecbc4ff5, 0x1824b159acc5056f],
    r2: [0xc999e990f3f29c6d, 0x2b6cedcb87925c23, 0x05d314967254398f, 0x0748d9d99f59ff11],
};

/// BLS12-381 base field.
pub const BLS12_381_FQ: FieldParams<6> = FieldParams {
    modulus: [
        0xb9feffffffffaaab,
        0x1eabfffeb153ffff,
        0x6730d2a0f6b0f624,
        0x64774b84f38512bf,
        0x4b1ba7b6434bacd7,
        0x1a0111ea397fe69a,
    ],
    mu: 0x89f3fffcfffcfffd,
    r: [
        0x760900000002fffd,
        0xebf4000bc40c0002,
        0x5f48985753c758ba,
        0x77ce585370525745,
        0x5c071a97a256ec6d,
        0x15f65ec3fa80e493,
    ],
    r2: [
        0xf4df1f341c341746,
        0x0a76e6a609d104f1,
        0x8de5476c4c95b6d5,
        0x67eb88a9939d83c0,
        0x9a793e85b519952d,
        0x11988fe592cae3aa,
    ],
};

impl<const L: usize> FieldParams<L>
where
    [u64; L]: FieldLimbs,
{
    /// Derives `mu`, `R mod m` and `R^2 mod m` from an odd modulus greater than one.
    pub fn from_modulus(modulus: [u64; L]) -> Result<Self> {
        if modulus[0] & 1 == 0 {
            return Err(Error::InvalidModulus("modulus must be odd"));
        }
        if modulus[0] == 1 && is_zero_ref(&modulus[1..]) {
            return Err(Error::InvalidModulus("modulus must be greater than one"));
        }

        // Newton iteration doubles the number of correct low bits of the inverse.
        let mut inv: u64 = 1;
        for _ in 0..6 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(modulus[0].wrapping_mul(inv)));
        }

        let mut r: [u64; L] = [0u64; L];
        r[0] = 1;
        (0..64 * L).for_each(|_| double_mod(&mut r, &modulus));
        let mut r2: [u64; L] = r;
        (0..64 * L).for_each(|_| double_mod(&mut r2, &modulus));

        Ok(Self {
            modulus,
            mu: inv.wrapping_neg(),
            r,
            r2,
        })
    }
}

/// `x = 2x mod m` for `x < m`.
fn double_mod<const L: usize>(x: &mut [u64; L], modulus: &[u64; L]) {
    let y: [u64; L] = *x;
    let carry: u64 = add_with_carry_inplace_ref(x, &y);
    if carry != 0 || compare_ref(x, modulus) != Ordering::Less {
        sub_with_borrow_inplace_ref(x, modulus);
    }
}

/// A prime field bound to a backend module.
pub struct Field<'a, B: Backend, const L: usize>
where
    [u64; L]: FieldLimbs,
{
    module: &'a Module<B>,
    params: FieldParams<L>,
}

impl<'a, B: Backend, const L: usize> Field<'a, B, L>
where
    [u64; L]: FieldLimbs,
{
    pub fn new(module: &'a Module<B>, params: FieldParams<L>) -> Self {
        Self { module, params }
    }

    pub fn module(&self) -> &'a Module<B> {
        self.module
    }

    pub fn params(&self) -> &FieldParams<L> {
        &self.params
    }

    pub fn modulus(&self) -> &[u64; L] {
        &self.params.modulus
    }

    pub fn zero(&self) -> [u64; L] {
        [0u64; L]
    }

    pub fn one(&self) -> [u64; L] {
        self.params.r
    }

    pub fn is_zero(&self, a: &[u64; L]) -> bool {
        is_zero_ref(a)
    }

    pub fn add(&self, a: &[u64; L], b: &[u64; L]) -> [u64; L] {
        let mut res: [u64; L] = [0u64; L];
        field_add_ref(&mut res, a, b, &self.params.modulus);
        res
    }

    pub fn sub(&self, a: &[u64; L], b: &[u64; L]) -> [u64; L] {
        let mut res: [u64; L] = [0u64; L];
        field_sub_ref(&mut res, a, b, &self.params.modulus);
        res
    }

    pub fn neg(&self, a: &[u64; L]) -> [u64; L] {
        let mut res: [u64; L] = [0u64; L];
        field_neg_ref(&mut res, a, &self.params.modulus);
        res
    }
}

impl<B: Backend, const L: usize> Field<'_, B, L>
where
    [u64; L]: FieldLimbs,
    Module<B>: MontgomeryMul,
{
    #[inline]
    pub fn mul(&self, a: &[u64; L], b: &[u64; L]) -> [u64; L] {
        <[u64; L] as FieldLimbs>::mont_mul(self.module, a, b, &self.params.modulus, self.params.mu)
    }

    #[inline]
    pub fn square(&self, a: &[u64; L]) -> [u64; L] {
        self.mul(a, a)
    }

    /// Converts a canonical integer to Montgomery form. Any `L`-limb value is
    /// accepted and reduced modulo the field.
    pub fn from_canonical(&self, x: &[u64; L]) -> [u64; L] {
        // x * R^2 < R * m for every x < R, so one Montgomery product reduces fully.
        self.mul(x, &self.params.r2)
    }

    /// Converts out of Montgomery form into the canonical representative in `[0, m)`.
    pub fn to_canonical(&self, a: &[u64; L]) -> [u64; L] {
        let mut one: [u64; L] = [0u64; L];
        one[0] = 1;
        self.mul(a, &one)
    }

    pub fn from_u64(&self, x: u64) -> [u64; L] {
        let mut limbs: [u64; L] = [0u64; L];
        limbs[0] = x;
        self.from_canonical(&limbs)
    }

    /// `a^exp` with `exp` given as little-endian limbs of any length.
    pub fn pow(&self, a: &[u64; L], exp: &[u64]) -> [u64; L] {
        let mut res: [u64; L] = self.one();
        for &word in exp.iter().rev() {
            for bit in (0..64).rev() {
                res = self.square(&res);
                if (word >> bit) & 1 == 1 {
                    res = self.mul(&res, a);
                }
            }
        }
        res
    }

    /// Multiplicative inverse by Fermat's little theorem; `None` for zero.
    /// Only meaningful when the modulus is prime.
    pub fn inv(&self, a: &[u64; L]) -> Option<[u64; L]> {
        if is_zero_ref(a) {
            return None;
        }
        let mut exp: [u64; L] = [0u64; L];
        let mut two: [u64; L] = [0u64; L];
        two[0] = 2;
        sub_with_borrow_ref(&mut exp, &self.params.modulus, &two);
        Some(self.pow(a, &exp))
    }

    /// `[1, base, base^2, ..., base^(n-1)]`, e.g. the twiddles of one NTT stage.
    pub fn powers(&self, base: &[u64; L], n: usize) -> Vec<[u64; L]> {
        let mut res: Vec<[u64; L]> = Vec::with_capacity(n);
        let mut acc: [u64; L] = self.one();
        for _ in 0..n {
            res.push(acc);
            acc = self.mul(&acc, base);
        }
        res
    }
}

impl<B: Backend, const L: usize> Field<'_, B, L>
where
    [u64; L]: FieldLimbs,
    Module<B>: MontgomeryMulBatch,
{
    /// `res[i] = a[i] * b[i]` through the backend batch kernel.
    pub fn mul_batch(&self, res: &mut [[u64; L]], a: &[[u64; L]], b: &[[u64; L]]) -> Result<()> {
        let count: usize = res.len();
        self.module.mont_mul_batch(
            res.as_flattened_mut(),
            a.as_flattened(),
            b.as_flattened(),
            &self.params.modulus,
            self.params.mu,
            count,
            L,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants_match_tables() {
        assert_eq!(FieldParams::from_modulus(BN254_FR.modulus), Ok(BN254_FR));
        assert_eq!(FieldParams::from_modulus(BN254_FQ.modulus), Ok(BN254_FQ));
        assert_eq!(FieldParams::from_modulus(BLS12_381_FR.modulus), Ok(BLS12_381_FR));
        assert_eq!(FieldParams::from_modulus(BLS12_381_FQ.modulus), Ok(BLS12_381_FQ));
    }

    #[test]
    fn rejects_even_and_trivial_moduli() {
        assert_eq!(
            FieldParams::<4>::from_modulus([2, 0, 0, 1]),
            Err(Error::InvalidModulus("modulus must be odd"))
        );
        assert_eq!(
            FieldParams::<6>::from_modulus([1, 0, 0, 0, 0, 0]),
            Err(Error::InvalidModulus("modulus must be greater than one"))
        );
    }

    #[test]
    fn small_modulus() {
        let params: FieldParams<4> = FieldParams::from_modulus([17, 0, 0, 0]).unwrap();
        assert_eq!(params.modulus[0].wrapping_mul(params.mu), u64::MAX);
        // 2^256 mod 17 = 1 since 2^8 = 256 = 1 mod 17.
        assert_eq!(params.r, [1, 0, 0, 0]);
        assert_eq!(params.r2, [1, 0, 0, 0]);
    }
}
