use std::marker::PhantomData;

use crate::capabilities::Capabilities;

/// A family of kernels, selected by the caller as the type parameter of [`Module`].
pub trait Backend: Sized + Sync + Send {
    /// Name used in logs and in [`crate::error::Error::BackendUnavailable`].
    const NAME: &'static str;

    /// Returns `true` if the machine described by `caps` can run this backend.
    fn is_supported(caps: &Capabilities) -> bool;
}

/// How [`crate::api::BucketAccumulate`] scatters points into buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BucketStrategy {
    /// Dense when both dimensions are under the [`ModuleConfig`] thresholds, direct otherwise.
    #[default]
    Auto,
    /// Scatter-add each point row into its bucket.
    Direct,
    /// Indicator matrix transposed times the point matrix, one coordinate column at a time.
    /// Falls back to [`BucketStrategy::Direct`] when its scratch cannot be reserved.
    Dense,
}

/// Runtime knobs of a [`Module`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleConfig {
    pub bucket_strategy: BucketStrategy,
    /// Largest bucket count for which [`BucketStrategy::Auto`] picks the dense path.
    pub dense_max_buckets: usize,
    /// Largest point count for which [`BucketStrategy::Auto`] picks the dense path.
    pub dense_max_points: usize,
}

impl ModuleConfig {
    pub const DEFAULT_DENSE_MAX_BUCKETS: usize = 1024;
    pub const DEFAULT_DENSE_MAX_POINTS: usize = 4096;

    pub fn with_bucket_strategy(mut self, bucket_strategy: BucketStrategy) -> Self {
        self.bucket_strategy = bucket_strategy;
        self
    }

    pub fn with_dense_limits(mut self, max_buckets: usize, max_points: usize) -> Self {
        self.dense_max_buckets = max_buckets;
        self.dense_max_points = max_points;
        self
    }

    /// Returns `true` if the dense bucket path should be attempted for this shape.
    #[inline]
    pub fn prefers_dense(&self, num_points: usize, num_buckets: usize) -> bool {
        match self.bucket_strategy {
            BucketStrategy::Auto => num_buckets <= self.dense_max_buckets && num_points <= self.dense_max_points,
            BucketStrategy::Direct => false,
            BucketStrategy::Dense => true,
        }
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            bucket_strategy: BucketStrategy::Auto,
            dense_max_buckets: Self::DEFAULT_DENSE_MAX_BUCKETS,
            dense_max_points: Self::DEFAULT_DENSE_MAX_POINTS,
        }
    }
}

/// Handle through which every [`crate::api`] operation is invoked.
///
/// A module holds no backend state beyond its [`ModuleConfig`]; it is cheap to
/// create and can be shared across threads.
pub struct Module<B: Backend> {
    config: ModuleConfig,
    _marker: PhantomData<B>,
}

impl<B: Backend> Module<B> {
    /// Creates a module without consulting the capability probe.
    /// Backends call this from [`crate::oep::ModuleNewImpl::new_impl`] after their own checks.
    ///
    /// # Safety
    /// The running CPU must support every feature `B` requires, i.e.
    /// `B::is_supported(capabilities())` must hold. Safe callers go through
    /// [`crate::api::ModuleNew`] or [`crate::api::ModuleTryNew`].
    ///
    /// ```compile_fail,E0133
    /// use zkaccel_backend::{
    ///     implementation::cpu_ref::CpuRef,
    ///     layouts::{Module, ModuleConfig},
    /// };
    ///
    /// let module: Module<CpuRef> = Module::<CpuRef>::from_config(ModuleConfig::default());
    /// ```
    #[inline]
    pub unsafe fn from_config(config: ModuleConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    #[inline]
    pub fn backend_name(&self) -> &'static str {
        B::NAME
    }
}

impl<B: Backend> std::fmt::Debug for Module<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Module")
            .field("backend", &B::NAME)
            .field("config", &self.config)
            .finish()
    }
}
