use crate::{
    capabilities::{Capabilities, capabilities},
    implementation::cpu_avx::CpuAvx,
    layouts::{Backend, Module, ModuleConfig},
    oep::ModuleNewImpl,
};

impl Backend for CpuAvx {
    const NAME: &'static str = "cpu-avx";

    fn is_supported(caps: &Capabilities) -> bool {
        caps.has_avx && caps.has_avx2 && caps.has_bmi2 && caps.has_adx
    }
}

unsafe impl ModuleNewImpl<Self> for CpuAvx {
    fn new_impl(config: ModuleConfig) -> Module<Self> {
        if !Self::is_supported(capabilities()) {
            panic!("arch must support avx, avx2, bmi2 and adx")
        }
        // Features checked above.
        unsafe { Module::from_config(config) }
    }
}
