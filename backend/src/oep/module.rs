use crate::layouts::{Backend, Module, ModuleConfig};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::ModuleNew] for corresponding public API.
/// * Implementations must panic if [`Backend::is_supported`] is false for the running CPU.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait ModuleNewImpl<B: Backend> {
    fn new_impl(config: ModuleConfig) -> Module<B>;
}
