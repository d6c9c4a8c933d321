//! Hardware capability probe.
//!
//! Capabilities are detected once per process, on first access, and are
//! immutable afterwards. Backends consult them in
//! [`crate::layouts::Backend::is_supported`]; nothing in the arithmetic path
//! re-checks them per call.

use once_cell::sync::Lazy;
use tracing::debug;

/// Features of the running machine relevant to the available backends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// ARM Advanced SIMD.
    pub has_neon: bool,
    /// Apple matrix coprocessor, reachable through the Accelerate framework.
    pub has_amx: bool,
    /// ARM Scalable Matrix Extension (Apple M4 and later).
    pub has_sme: bool,
    /// A Metal device may be present. Only reported, never used here.
    pub has_metal: bool,
    pub has_avx: bool,
    pub has_avx2: bool,
    /// `mulx`, used by the x86 Montgomery kernel.
    pub has_bmi2: bool,
    /// `adcx`/`adox`.
    pub has_adx: bool,
    pub unified_memory: bool,
    pub is_apple_silicon: bool,
    pub cpu_cores: usize,
    pub arch: &'static str,
    pub os: &'static str,
}

static CAPABILITIES: Lazy<Capabilities> = Lazy::new(|| {
    let caps: Capabilities = Capabilities::detect();
    debug!(?caps, "detected hardware capabilities");
    caps
});

/// Returns the process-wide capability set, detecting it on first call.
pub fn capabilities() -> &'static Capabilities {
    &CAPABILITIES
}

const APPLE_SILICON: bool = cfg!(all(target_os = "macos", target_arch = "aarch64"));

impl Capabilities {
    /// Probes the running machine. Prefer [`capabilities`], which caches the result.
    pub fn detect() -> Self {
        let (has_avx, has_avx2, has_bmi2, has_adx) = x86_features();
        Self {
            has_neon: detect_neon(),
            has_amx: APPLE_SILICON,
            has_sme: detect_sme(),
            has_metal: cfg!(target_os = "macos"),
            has_avx,
            has_avx2,
            has_bmi2,
            has_adx,
            unified_memory: APPLE_SILICON,
            is_apple_silicon: APPLE_SILICON,
            cpu_cores: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            arch: std::env::consts::ARCH,
            os: std::env::consts::OS,
        }
    }
}

#[cfg(target_arch = "x86_64")]
fn x86_features() -> (bool, bool, bool, bool) {
    (
        std::arch::is_x86_feature_detected!("avx"),
        std::arch::is_x86_feature_detected!("avx2"),
        std::arch::is_x86_feature_detected!("bmi2"),
        std::arch::is_x86_feature_detected!("adx"),
    )
}

#[cfg(not(target_arch = "x86_64"))]
fn x86_features() -> (bool, bool, bool, bool) {
    (false, false, false, false)
}

#[cfg(target_arch = "aarch64")]
fn detect_neon() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

#[cfg(not(target_arch = "aarch64"))]
fn detect_neon() -> bool {
    false
}

#[cfg(all(target_os = "macos", target_arch = "aarch64"))]
fn detect_sme() -> bool {
    use std::ffi::{CStr, c_char, c_int, c_void};

    unsafe extern "C" {
        fn sysctlbyname(
            name: *const c_char,
            oldp: *mut c_void,
            oldlenp: *mut usize,
            newp: *mut c_void,
            newlen: usize,
        ) -> c_int;
    }

    let mut value: i64 = 0;
    let mut size: usize = size_of::<i64>();
    let rc: c_int = unsafe {
        sysctlbyname(
            c"hw.optional.arm.FEAT_SME".as_ptr(),
            (&raw mut value).cast(),
            &mut size,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc == 0 {
        return value != 0;
    }

    // Older kernels do not expose FEAT_SME: fall back on the brand string.
    let mut brand: [u8; 256] = [0u8; 256];
    let mut brand_size: usize = brand.len();
    let rc: c_int = unsafe {
        sysctlbyname(
            c"machdep.cpu.brand_string".as_ptr(),
            brand.as_mut_ptr().cast(),
            &mut brand_size,
            std::ptr::null_mut(),
            0,
        )
    };
    rc == 0
        && CStr::from_bytes_until_nul(&brand)
            .ok()
            .and_then(|s| s.to_str().ok())
            .is_some_and(|s| s.contains("M4"))
}

#[cfg(not(all(target_os = "macos", target_arch = "aarch64")))]
fn detect_sme() -> bool {
    false
}
