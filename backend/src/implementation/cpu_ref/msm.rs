use crate::{
    implementation::cpu_ref::CpuRef,
    layouts::Module,
    oep::{BucketAccumulateImpl, BucketAccumulateScalarsImpl},
    reference::msm::{bucket_accumulate_ref, bucket_accumulate_scalars_ref},
};

unsafe impl BucketAccumulateImpl<Self> for CpuRef {
    fn bucket_accumulate_impl(
        module: &Module<Self>,
        bucket_accum: &mut [f64],
        bucket_indices: &[u32],
        point_coords: &[f64],
        num_buckets: usize,
        coord_size: usize,
    ) {
        bucket_accumulate_ref(
            module.config(),
            bucket_accum,
            bucket_indices,
            point_coords,
            num_buckets,
            coord_size,
        );
    }
}

unsafe impl BucketAccumulateScalarsImpl<Self> for CpuRef {
    fn bucket_accumulate_scalars_impl(
        module: &Module<Self>,
        bucket_accum: &mut [f64],
        scalars: &[u64],
        window_size: u32,
        point_coords: &[f64],
        num_buckets: usize,
        coord_size: usize,
    ) {
        bucket_accumulate_scalars_ref(
            module.config(),
            bucket_accum,
            scalars,
            window_size,
            point_coords,
            num_buckets,
            coord_size,
        );
    }
}
