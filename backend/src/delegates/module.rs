use tracing::warn;

use crate::{
    api::{ModuleNew, ModuleTryNew},
    capabilities::capabilities,
    error::{Error, Result},
    layouts::{Backend, Module, ModuleConfig},
    oep::ModuleNewImpl,
};

impl<B> ModuleNew<B> for Module<B>
where
    B: Backend + ModuleNewImpl<B>,
{
    fn new() -> Self {
        B::new_impl(ModuleConfig::default())
    }

    fn with_config(config: ModuleConfig) -> Self {
        B::new_impl(config)
    }
}

impl<B> ModuleTryNew<B> for Module<B>
where
    B: Backend + ModuleNewImpl<B>,
{
    fn try_new(config: ModuleConfig) -> Result<Self> {
        if !B::is_supported(capabilities()) {
            warn!(backend = B::NAME, "backend unavailable on this CPU");
            return Err(Error::BackendUnavailable(B::NAME));
        }
        Ok(B::new_impl(config))
    }
}
