use crate::{
    implementation::cpu_ref::CpuRef,
    layouts::Module,
    oep::{MatMulImpl, MatVecImpl, VecAddImpl, VecMulAddImpl, VecMulImpl, VecScaleImpl, VecSubImpl},
    reference::{
        mat::{mat_mul_ref, mat_vec_ref},
        vec::{vec_add_ref, vec_mul_ref, vec_muladd_ref, vec_scale_ref, vec_sub_ref},
    },
};

unsafe impl VecAddImpl<Self> for CpuRef {
    #[inline(always)]
    fn vec_add_impl(_module: &Module<Self>, res: &mut [f64], a: &[f64], b: &[f64]) {
        vec_add_ref(res, a, b);
    }
}

unsafe impl VecSubImpl<Self> for CpuRef {
    #[inline(always)]
    fn vec_sub_impl(_module: &Module<Self>, res: &mut [f64], a: &[f64], b: &[f64]) {
        vec_sub_ref(res, a, b);
    }
}

unsafe impl VecMulImpl<Self> for CpuRef {
    #[inline(always)]
    fn vec_mul_impl(_module: &Module<Self>, res: &mut [f64], a: &[f64], b: &[f64]) {
        vec_mul_ref(res, a, b);
    }
}

unsafe impl VecScaleImpl<Self> for CpuRef {
    #[inline(always)]
    fn vec_scale_impl(_module: &Module<Self>, res: &mut [f64], a: &[f64], scalar: f64) {
        vec_scale_ref(res, a, scalar);
    }
}

unsafe impl VecMulAddImpl<Self> for CpuRef {
    #[inline(always)]
    fn vec_muladd_impl(_module: &Module<Self>, res: &mut [f64], a: &[f64], b: &[f64], c: &[f64]) {
        vec_muladd_ref(res, a, b, c);
    }
}

unsafe impl MatMulImpl<Self> for CpuRef {
    fn mat_mul_impl(_module: &Module<Self>, c: &mut [f64], a: &[f64], b: &[f64], m: usize, n: usize, k: usize, alpha: f64, beta: f64) {
        mat_mul_ref(c, a, b, m, n, k, alpha, beta);
    }
}

unsafe impl MatVecImpl<Self> for CpuRef {
    fn mat_vec_impl(_module: &Module<Self>, y: &mut [f64], a: &[f64], x: &[f64], m: usize, n: usize, alpha: f64, beta: f64) {
        mat_vec_ref(y, a, x, m, n, alpha, beta);
    }
}
