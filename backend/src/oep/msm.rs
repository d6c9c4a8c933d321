use crate::layouts::{Backend, Module};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::msm::bucket_accumulate_ref] for reference code.
/// * See [crate::api::BucketAccumulate] for corresponding public API.
/// * The strategy is read from [`Module::config`].
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait BucketAccumulateImpl<B: Backend> {
    fn bucket_accumulate_impl(
        module: &Module<B>,
        bucket_accum: &mut [f64],
        bucket_indices: &[u32],
        point_coords: &[f64],
        num_buckets: usize,
        coord_size: usize,
    );
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::msm::bucket_accumulate_scalars_ref] for reference code.
/// * See [crate::api::BucketAccumulateScalars] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait BucketAccumulateScalarsImpl<B: Backend> {
    #[allow(clippy::too_many_arguments)]
    fn bucket_accumulate_scalars_impl(
        module: &Module<B>,
        bucket_accum: &mut [f64],
        scalars: &[u64],
        window_size: u32,
        point_coords: &[f64],
        num_buckets: usize,
        coord_size: usize,
    );
}
