use crate::{
    error::Result,
    layouts::{Backend, ModuleConfig},
};

/// Instantiate a new [crate::layouts::Module].
pub trait ModuleNew<B: Backend> {
    /// Creates a module with the default [`ModuleConfig`].
    ///
    /// # Panics
    /// Panics if the running CPU cannot execute `B`. Use [`ModuleTryNew::try_new`] to recover.
    fn new() -> Self;

    /// Same as [`ModuleNew::new`] with an explicit configuration.
    fn with_config(config: ModuleConfig) -> Self;
}

/// Fallible counterpart of [`ModuleNew`].
pub trait ModuleTryNew<B: Backend>: Sized {
    /// Returns [`crate::error::Error::BackendUnavailable`] if the running CPU cannot execute `B`.
    fn try_new(config: ModuleConfig) -> Result<Self>;
}
