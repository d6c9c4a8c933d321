use std::cmp::Ordering;

use itertools::izip;

/// `res = a + b`, returns the carry out of the top limb (0 or 1).
#[inline(always)]
pub fn add_with_carry_ref(res: &mut [u64], a: &[u64], b: &[u64]) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let mut carry: bool = false;
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &a, &b)| {
        let (s, c0) = a.overflowing_add(b);
        let (s, c1) = s.overflowing_add(carry as u64);
        *r = s;
        carry = c0 | c1;
    });
    carry as u64
}

/// `res += a`, returns the carry out of the top limb.
#[inline(always)]
pub fn add_with_carry_inplace_ref(res: &mut [u64], a: &[u64]) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let mut carry: bool = false;
    res.iter_mut().zip(a.iter()).for_each(|(r, &a)| {
        let (s, c0) = r.overflowing_add(a);
        let (s, c1) = s.overflowing_add(carry as u64);
        *r = s;
        carry = c0 | c1;
    });
    carry as u64
}

/// `res = a - b mod 2^(64 * len)`, returns 1 iff `a < b`.
#[inline(always)]
pub fn sub_with_borrow_ref(res: &mut [u64], a: &[u64], b: &[u64]) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let mut borrow: bool = false;
    izip!(res.iter_mut(), a.iter(), b.iter()).for_each(|(r, &a, &b)| {
        let (d, b0) = a.overflowing_sub(b);
        let (d, b1) = d.overflowing_sub(borrow as u64);
        *r = d;
        borrow = b0 | b1;
    });
    borrow as u64
}

/// `res -= a mod 2^(64 * len)`, returns 1 iff `res < a` before the call.
#[inline(always)]
pub fn sub_with_borrow_inplace_ref(res: &mut [u64], a: &[u64]) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let mut borrow: bool = false;
    res.iter_mut().zip(a.iter()).for_each(|(r, &a)| {
        let (d, b0) = r.overflowing_sub(a);
        let (d, b1) = d.overflowing_sub(borrow as u64);
        *r = d;
        borrow = b0 | b1;
    });
    borrow as u64
}

/// Compares two limb sequences of equal length, most significant limb first.
#[inline(always)]
pub fn compare_ref(a: &[u64], b: &[u64]) -> Ordering {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
    }
    a.iter().rev().cmp(b.iter().rev())
}

#[inline(always)]
pub fn is_zero_ref(a: &[u64]) -> bool {
    a.iter().all(|&x| x == 0)
}
