use crate::error::Result;

pub trait BucketAccumulate {
    /// For every point `i` with `1 <= bucket_indices[i] <= num_buckets`, adds its
    /// `coord_size` coordinates into bucket `bucket_indices[i]` (row `bucket_indices[i] - 1`
    /// of `bucket_accum`). Other indices are skipped. `bucket_accum` is not cleared.
    fn bucket_accumulate(
        &self,
        bucket_accum: &mut [f64],
        bucket_indices: &[u32],
        point_coords: &[f64],
        num_buckets: usize,
        coord_size: usize,
    ) -> Result<()>;
}

pub trait BucketAccumulateScalars {
    /// Same as [`BucketAccumulate::bucket_accumulate`] with the digit of point `i`
    /// taken as the low `window_size` bits of `scalars[i]`, `window_size` in `1..=32`.
    #[allow(clippy::too_many_arguments)]
    fn bucket_accumulate_scalars(
        &self,
        bucket_accum: &mut [f64],
        scalars: &[u64],
        window_size: u32,
        point_coords: &[f64],
        num_buckets: usize,
        coord_size: usize,
    ) -> Result<()>;
}
