//! Row-major f64 matrix kernels with BLAS `beta` semantics: when `beta == 0`
//! the output is overwritten without being read, so it may hold NaN.

/// `c = alpha * a * b + beta * c` with `a: m x k`, `b: k x n`, `c: m x n`.
#[allow(clippy::too_many_arguments)]
pub fn mat_mul_ref(c: &mut [f64], a: &[f64], b: &[f64], m: usize, n: usize, k: usize, alpha: f64, beta: f64) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), m * k);
        assert_eq!(b.len(), k * n);
        assert_eq!(c.len(), m * n);
    }

    for i in 0..m {
        let a_row: &[f64] = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let mut sum: f64 = 0.0;
            for (p, &a_ip) in a_row.iter().enumerate() {
                sum += a_ip * b[p * n + j];
            }
            let c_ij: &mut f64 = &mut c[i * n + j];
            *c_ij = scale_accumulate(alpha, sum, beta, *c_ij);
        }
    }
}

/// `y = alpha * a * x + beta * y` with `a: m x n`.
#[allow(clippy::too_many_arguments)]
pub fn mat_vec_ref(y: &mut [f64], a: &[f64], x: &[f64], m: usize, n: usize, alpha: f64, beta: f64) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), m * n);
        assert_eq!(x.len(), n);
        assert_eq!(y.len(), m);
    }

    for (i, y_i) in y.iter_mut().enumerate() {
        let sum: f64 = a[i * n..(i + 1) * n]
            .iter()
            .zip(x.iter())
            .fold(0.0, |acc, (&a_ij, &x_j)| acc + a_ij * x_j);
        *y_i = scale_accumulate(alpha, sum, beta, *y_i);
    }
}

/// `y = alpha * a^T * x + beta * y` with `a: m x n`, `x` of length `m`, `y` of length `n`.
///
/// Each `y[j]` sums over rows in increasing order.
#[allow(clippy::too_many_arguments)]
pub fn mat_vec_trans_ref(y: &mut [f64], a: &[f64], x: &[f64], m: usize, n: usize, alpha: f64, beta: f64) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), m * n);
        assert_eq!(x.len(), m);
        assert_eq!(y.len(), n);
    }

    for (j, y_j) in y.iter_mut().enumerate() {
        let mut sum: f64 = 0.0;
        for (i, &x_i) in x.iter().enumerate() {
            sum += a[i * n + j] * x_i;
        }
        *y_j = scale_accumulate(alpha, sum, beta, *y_j);
    }
}

#[inline(always)]
fn scale_accumulate(alpha: f64, sum: f64, beta: f64, prev: f64) -> f64 {
    if beta == 0.0 {
        alpha * sum
    } else {
        alpha * sum + beta * prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mat_mul_small() {
        // [1 2 3]   [1 0]   [ 4  5]
        // [4 5 6] x [0 1] = [10 11]
        //           [1 1]
        let a: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let mut c: [f64; 4] = [f64::NAN; 4];
        mat_mul_ref(&mut c, &a, &b, 2, 2, 3, 1.0, 0.0);
        assert_eq!(c, [4.0, 5.0, 10.0, 11.0]);

        mat_mul_ref(&mut c, &a, &b, 2, 2, 3, 2.0, -1.0);
        assert_eq!(c, [4.0, 5.0, 10.0, 11.0]);
    }

    #[test]
    fn mat_vec_and_transpose() {
        let a: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let mut y: [f64; 2] = [f64::NAN; 2];
        mat_vec_ref(&mut y, &a, &[1.0, 1.0, 1.0], 2, 3, 1.0, 0.0);
        assert_eq!(y, [6.0, 15.0]);

        let mut y: [f64; 3] = [1.0; 3];
        mat_vec_trans_ref(&mut y, &a, &[1.0, -1.0], 2, 3, 2.0, 1.0);
        assert_eq!(y, [-5.0, -5.0, -5.0]);
    }
}
