use crate::{
    api::{MatMul, MatVec},
    error::{Result, check_len, checked_shape},
    layouts::{Backend, Module},
    oep::{MatMulImpl, MatVecImpl},
};

impl<B> MatMul for Module<B>
where
    B: Backend + MatMulImpl<B>,
{
    fn mat_mul(&self, c: &mut [f64], a: &[f64], b: &[f64], m: usize, n: usize, k: usize, alpha: f64, beta: f64) -> Result<()> {
        check_len("a", a.len(), checked_shape("a", m, k)?)?;
        check_len("b", b.len(), checked_shape("b", k, n)?)?;
        check_len("c", c.len(), checked_shape("c", m, n)?)?;
        B::mat_mul_impl(self, c, a, b, m, n, k, alpha, beta);
        Ok(())
    }
}

impl<B> MatVec for Module<B>
where
    B: Backend + MatVecImpl<B>,
{
    fn mat_vec(&self, y: &mut [f64], a: &[f64], x: &[f64], m: usize, n: usize, alpha: f64, beta: f64) -> Result<()> {
        check_len("a", a.len(), checked_shape("a", m, n)?)?;
        check_len("x", x.len(), n)?;
        check_len("y", y.len(), m)?;
        B::mat_vec_impl(self, y, a, x, m, n, alpha, beta);
        Ok(())
    }
}
