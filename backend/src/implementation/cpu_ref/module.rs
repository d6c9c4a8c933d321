use crate::{
    capabilities::Capabilities,
    implementation::cpu_ref::CpuRef,
    layouts::{Backend, Module, ModuleConfig},
    oep::ModuleNewImpl,
};

impl Backend for CpuRef {
    const NAME: &'static str = "cpu-ref";

    fn is_supported(_caps: &Capabilities) -> bool {
        true
    }
}

unsafe impl ModuleNewImpl<Self> for CpuRef {
    fn new_impl(config: ModuleConfig) -> Module<Self> {
        // CpuRef needs no CPU feature.
        unsafe { Module::from_config(config) }
    }
}
