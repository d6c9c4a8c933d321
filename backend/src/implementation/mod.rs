pub mod cpu_ref;

#[cfg(target_arch = "x86_64")]
pub mod cpu_avx;
