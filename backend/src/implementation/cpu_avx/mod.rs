mod f64_avx;
mod module;
mod montgomery;
mod msm;
mod ntt;
mod vec;


pub use f64_avx::*;
pub use montgomery::mont_mul_bmi2;

/// x86_64 backend: `mulx`/`adc` Montgomery kernel and 256-bit `f64` kernels.
///
/// Requires AVX, AVX2, BMI2 and ADX. Bucket accumulation and the matrix
/// kernels run the [`crate::reference`] code.
pub struct CpuAvx {}
