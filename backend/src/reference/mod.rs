//! Pure-Rust reference kernels for every operation.
//!
//! [`crate::implementation::cpu_ref::CpuRef`] is a thin wrapper over these
//! functions, and every accelerated backend is tested against them through
//! [`crate::test_suite`]. Kernels never validate their arguments beyond debug
//! assertions: validation happens in [`crate::api`].

pub mod batch;
pub mod field;
pub mod limbs;
pub mod mat;
pub mod montgomery;
pub mod msm;
pub mod ntt;
pub mod vec;
