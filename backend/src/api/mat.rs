use crate::error::Result;

pub trait MatMul {
    /// `c = alpha * a * b + beta * c` for row-major `a: m x k`, `b: k x n`, `c: m x n`.
    /// `c` is not read when `beta == 0`.
    #[allow(clippy::too_many_arguments)]
    fn mat_mul(&self, c: &mut [f64], a: &[f64], b: &[f64], m: usize, n: usize, k: usize, alpha: f64, beta: f64) -> Result<()>;
}

pub trait MatVec {
    /// `y = alpha * a * x + beta * y` for row-major `a: m x n`.
    /// `y` is not read when `beta == 0`.
    #[allow(clippy::too_many_arguments)]
    fn mat_vec(&self, y: &mut [f64], a: &[f64], x: &[f64], m: usize, n: usize, alpha: f64, beta: f64) -> Result<()>;
}
