use std::cmp::Ordering;

use crate::reference::limbs::{
    add_with_carry_inplace_ref, add_with_carry_ref, compare_ref, is_zero_ref, sub_with_borrow_inplace_ref, sub_with_borrow_ref,
};

/// `res = a + b mod modulus` for reduced `a`, `b`.
#[inline(always)]
pub fn field_add_ref(res: &mut [u64], a: &[u64], b: &[u64], modulus: &[u64]) {
    let carry: u64 = add_with_carry_ref(res, a, b);
    if carry != 0 || compare_ref(res, modulus) != Ordering::Less {
        sub_with_borrow_inplace_ref(res, modulus);
    }
}

/// `res = a - b mod modulus` for reduced `a`, `b`.
#[inline(always)]
pub fn field_sub_ref(res: &mut [u64], a: &[u64], b: &[u64], modulus: &[u64]) {
    if sub_with_borrow_ref(res, a, b) != 0 {
        add_with_carry_inplace_ref(res, modulus);
    }
}

/// `res = -a mod modulus` for reduced `a`.
#[inline(always)]
pub fn field_neg_ref(res: &mut [u64], a: &[u64], modulus: &[u64]) {
    if is_zero_ref(a) {
        res.fill(0);
    } else {
        sub_with_borrow_ref(res, modulus, a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: [u64; 4] = [0x3c208c16d87cfd47, 0x97816a916871ca8d, 0xb85045b68181585d, 0x30644e72e131a029];

    fn m_minus(k: u64) -> [u64; 4] {
        let mut res: [u64; 4] = [0; 4];
        sub_with_borrow_ref(&mut res, &M, &[k, 0, 0, 0]);
        res
    }

    #[test]
    fn add_wraps_at_modulus() {
        let mut res: [u64; 4] = [0; 4];
        field_add_ref(&mut res, &m_minus(1), &[1, 0, 0, 0], &M);
        assert_eq!(res, [0; 4]);
        field_add_ref(&mut res, &m_minus(1), &m_minus(1), &M);
        assert_eq!(res, m_minus(2));
    }

    #[test]
    fn sub_wraps_below_zero() {
        let mut res: [u64; 4] = [0; 4];
        field_sub_ref(&mut res, &[0; 4], &[1, 0, 0, 0], &M);
        assert_eq!(res, m_minus(1));
        field_sub_ref(&mut res, &[5, 0, 0, 0], &[3, 0, 0, 0], &M);
        assert_eq!(res, [2, 0, 0, 0]);
    }

    #[test]
    fn neg_of_zero_is_zero() {
        let mut res: [u64; 4] = [9; 4];
        field_neg_ref(&mut res, &[0; 4], &M);
        assert_eq!(res, [0; 4]);
        field_neg_ref(&mut res, &[1, 0, 0, 0], &M);
        assert_eq!(res, m_minus(1));
    }
}
