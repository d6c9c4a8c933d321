mod module;
mod montgomery;
mod msm;
mod ntt;
mod vec;


/// Portable backend running the [`crate::reference`] kernels. Available everywhere.
pub struct CpuRef {}
