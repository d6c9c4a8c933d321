use crate::{
    implementation::cpu_avx::{CpuAvx, vec_add_avx, vec_mul_avx, vec_muladd_avx, vec_scale_avx, vec_sub_avx},
    layouts::Module,
    oep::{MatMulImpl, MatVecImpl, VecAddImpl, VecMulAddImpl, VecMulImpl, VecScaleImpl, VecSubImpl},
    reference::mat::{mat_mul_ref, mat_vec_ref},
};

unsafe impl VecAddImpl<Self> for CpuAvx {
    #[inline(always)]
    fn vec_add_impl(_module: &Module<Self>, res: &mut [f64], a: &[f64], b: &[f64]) {
        unsafe {
            vec_add_avx(res, a, b);
        }
    }
}

unsafe impl VecSubImpl<Self> for CpuAvx {
    #[inline(always)]
    fn vec_sub_impl(_module: &Module<Self>, res: &mut [f64], a: &[f64], b: &[f64]) {
        unsafe {
            vec_sub_avx(res, a, b);
        }
    }
}

unsafe impl VecMulImpl<Self> for CpuAvx {
    #[inline(always)]
    fn vec_mul_impl(_module: &Module<Self>, res: &mut [f64], a: &[f64], b: &[f64]) {
        unsafe {
            vec_mul_avx(res, a, b);
        }
    }
}

unsafe impl VecScaleImpl<Self> for CpuAvx {
    #[inline(always)]
    fn vec_scale_impl(_module: &Module<Self>, res: &mut [f64], a: &[f64], scalar: f64) {
        unsafe {
            vec_scale_avx(res, a, scalar);
        }
    }
}

unsafe impl VecMulAddImpl<Self> for CpuAvx {
    #[inline(always)]
    fn vec_muladd_impl(_module: &Module<Self>, res: &mut [f64], a: &[f64], b: &[f64], c: &[f64]) {
        unsafe {
            vec_muladd_avx(res, a, b, c);
        }
    }
}

unsafe impl MatMulImpl<Self> for CpuAvx {
    fn mat_mul_impl(_module: &Module<Self>, c: &mut [f64], a: &[f64], b: &[f64], m: usize, n: usize, k: usize, alpha: f64, beta: f64) {
        mat_mul_ref(c, a, b, m, n, k, alpha, beta);
    }
}

unsafe impl MatVecImpl<Self> for CpuAvx {
    fn mat_vec_impl(_module: &Module<Self>, y: &mut [f64], a: &[f64], x: &[f64], m: usize, n: usize, alpha: f64, beta: f64) {
        mat_vec_ref(y, a, x, m, n, alpha, beta);
    }
}
