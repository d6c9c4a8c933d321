use crate::{
    api::{BucketAccumulate, BucketAccumulateScalars},
    error::{Error, Result, check_len, checked_shape},
    layouts::{Backend, Module},
    oep::{BucketAccumulateImpl, BucketAccumulateScalarsImpl},
};

fn check_bucket_shapes(bucket_accum: &[f64], num_points: usize, point_coords: &[f64], num_buckets: usize, coord_size: usize) -> Result<()> {
    check_len("point_coords", point_coords.len(), checked_shape("point_coords", num_points, coord_size)?)?;
    check_len("bucket_accum", bucket_accum.len(), checked_shape("bucket_accum", num_buckets, coord_size)?)
}

impl<B> BucketAccumulate for Module<B>
where
    B: Backend + BucketAccumulateImpl<B>,
{
    fn bucket_accumulate(
        &self,
        bucket_accum: &mut [f64],
        bucket_indices: &[u32],
        point_coords: &[f64],
        num_buckets: usize,
        coord_size: usize,
    ) -> Result<()> {
        check_bucket_shapes(bucket_accum, bucket_indices.len(), point_coords, num_buckets, coord_size)?;
        B::bucket_accumulate_impl(self, bucket_accum, bucket_indices, point_coords, num_buckets, coord_size);
        Ok(())
    }
}

impl<B> BucketAccumulateScalars for Module<B>
where
    B: Backend + BucketAccumulateScalarsImpl<B>,
{
    fn bucket_accumulate_scalars(
        &self,
        bucket_accum: &mut [f64],
        scalars: &[u64],
        window_size: u32,
        point_coords: &[f64],
        num_buckets: usize,
        coord_size: usize,
    ) -> Result<()> {
        if !(1..=32).contains(&window_size) {
            return Err(Error::InvalidWindowSize(window_size));
        }
        check_bucket_shapes(bucket_accum, scalars.len(), point_coords, num_buckets, coord_size)?;
        B::bucket_accumulate_scalars_impl(
            self,
            bucket_accum,
            scalars,
            window_size,
            point_coords,
            num_buckets,
            coord_size,
        );
        Ok(())
    }
}
