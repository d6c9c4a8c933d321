use crate::{
    api::{VecAdd, VecMul, VecMulAdd, VecScale, VecSub},
    error::{Result, check_len},
    layouts::{Backend, Module},
    oep::{VecAddImpl, VecMulAddImpl, VecMulImpl, VecScaleImpl, VecSubImpl},
};

impl<B> VecAdd for Module<B>
where
    B: Backend + VecAddImpl<B>,
{
    fn vec_add(&self, res: &mut [f64], a: &[f64], b: &[f64]) -> Result<()> {
        check_len("a", a.len(), res.len())?;
        check_len("b", b.len(), res.len())?;
        B::vec_add_impl(self, res, a, b);
        Ok(())
    }
}

impl<B> VecSub for Module<B>
where
    B: Backend + VecSubImpl<B>,
{
    fn vec_sub(&self, res: &mut [f64], a: &[f64], b: &[f64]) -> Result<()> {
        check_len("a", a.len(), res.len())?;
        check_len("b", b.len(), res.len())?;
        B::vec_sub_impl(self, res, a, b);
        Ok(())
    }
}

impl<B> VecMul for Module<B>
where
    B: Backend + VecMulImpl<B>,
{
    fn vec_mul(&self, res: &mut [f64], a: &[f64], b: &[f64]) -> Result<()> {
        check_len("a", a.len(), res.len())?;
        check_len("b", b.len(), res.len())?;
        B::vec_mul_impl(self, res, a, b);
        Ok(())
    }
}

impl<B> VecScale for Module<B>
where
    B: Backend + VecScaleImpl<B>,
{
    fn vec_scale(&self, res: &mut [f64], a: &[f64], scalar: f64) -> Result<()> {
        check_len("a", a.len(), res.len())?;
        B::vec_scale_impl(self, res, a, scalar);
        Ok(())
    }
}

impl<B> VecMulAdd for Module<B>
where
    B: Backend + VecMulAddImpl<B>,
{
    fn vec_muladd(&self, res: &mut [f64], a: &[f64], b: &[f64], c: &[f64]) -> Result<()> {
        check_len("a", a.len(), res.len())?;
        check_len("b", b.len(), res.len())?;
        check_len("c", c.len(), res.len())?;
        B::vec_muladd_impl(self, res, a, b, c);
        Ok(())
    }
}
