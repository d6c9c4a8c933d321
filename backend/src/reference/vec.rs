//! Element-wise f64 kernels. Every result is rounded once per operation;
//! [`vec_muladd_ref`] rounds the product and the sum separately.

#[inline(always)]
pub fn vec_add_ref(res: &mut [f64], a: &[f64], b: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = a[i] + b[i];
    }
}

#[inline(always)]
pub fn vec_add_inplace_ref(res: &mut [f64], a: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] += a[i];
    }
}

#[inline(always)]
pub fn vec_sub_ref(res: &mut [f64], a: &[f64], b: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = a[i] - b[i];
    }
}

#[inline(always)]
pub fn vec_mul_ref(res: &mut [f64], a: &[f64], b: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = a[i] * b[i];
    }
}

#[inline(always)]
pub fn vec_scale_ref(res: &mut [f64], a: &[f64], scalar: f64) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = a[i] * scalar;
    }
}

/// `res = a * b + c`.
#[inline(always)]
pub fn vec_muladd_ref(res: &mut [f64], a: &[f64], b: &[f64], c: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
        assert_eq!(res.len(), c.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        let p: f64 = a[i] * b[i];
        res[i] = p + c[i];
    }
}
