use crate::error::Result;

pub trait VecAdd {
    /// `res = a + b` element-wise.
    fn vec_add(&self, res: &mut [f64], a: &[f64], b: &[f64]) -> Result<()>;
}

pub trait VecSub {
    /// `res = a - b` element-wise.
    fn vec_sub(&self, res: &mut [f64], a: &[f64], b: &[f64]) -> Result<()>;
}

pub trait VecMul {
    /// `res = a * b` element-wise.
    fn vec_mul(&self, res: &mut [f64], a: &[f64], b: &[f64]) -> Result<()>;
}

pub trait VecScale {
    /// `res = a * scalar`.
    fn vec_scale(&self, res: &mut [f64], a: &[f64], scalar: f64) -> Result<()>;
}

pub trait VecMulAdd {
    /// `res = a * b + c` element-wise, with the product rounded before the sum.
    fn vec_muladd(&self, res: &mut [f64], a: &[f64], b: &[f64], c: &[f64]) -> Result<()>;
}
