//! Bucket accumulation for the Pippenger method.
//!
//! Buckets are numbered `1..=num_buckets`; bucket `d` lives at row `d - 1` of
//! the accumulator. Digit 0 and digits above `num_buckets` contribute nothing.
//! Every entry point adds into the accumulator and never clears it.

use std::collections::TryReserveError;

use tracing::debug;

use crate::{
    layouts::ModuleConfig,
    reference::{mat::mat_vec_trans_ref, vec::vec_add_inplace_ref},
};

/// Row of the accumulator that `digit` feeds, if any.
#[inline(always)]
pub fn bucket_row(digit: u64, num_buckets: usize) -> Option<usize> {
    if digit == 0 || digit > num_buckets as u64 {
        None
    } else {
        Some(digit as usize - 1)
    }
}

/// Low `window_size` bits of `scalar`.
#[inline(always)]
pub fn window_mask(window_size: u32) -> u64 {
    debug_assert!((1..=32).contains(&window_size));
    (1u64 << window_size) - 1
}

/// Scatter-adds each point row into the bucket named by its index.
pub fn bucket_accumulate_direct_ref(
    bucket_accum: &mut [f64],
    bucket_indices: &[u32],
    point_coords: &[f64],
    num_buckets: usize,
    coord_size: usize,
) {
    direct_with(
        bucket_accum,
        bucket_indices.len(),
        |i| bucket_indices[i] as u64,
        point_coords,
        num_buckets,
        coord_size,
    );
}

/// Dense formulation: `bucket_accum += indicator^T * points`, one coordinate column at a time.
///
/// Returns an error, leaving `bucket_accum` untouched, if the indicator matrix
/// cannot be reserved. Non-finite coordinates are only supported by the direct path.
pub fn bucket_accumulate_dense_ref(
    bucket_accum: &mut [f64],
    bucket_indices: &[u32],
    point_coords: &[f64],
    num_buckets: usize,
    coord_size: usize,
) -> Result<(), TryReserveError> {
    dense_with(
        bucket_accum,
        bucket_indices.len(),
        |i| bucket_indices[i] as u64,
        point_coords,
        num_buckets,
        coord_size,
    )
}

/// Accumulates with the strategy selected by `config`.
pub fn bucket_accumulate_ref(
    config: &ModuleConfig,
    bucket_accum: &mut [f64],
    bucket_indices: &[u32],
    point_coords: &[f64],
    num_buckets: usize,
    coord_size: usize,
) {
    accumulate_with(
        config,
        bucket_accum,
        bucket_indices.len(),
        |i| bucket_indices[i] as u64,
        point_coords,
        num_buckets,
        coord_size,
    );
}

/// Same as [`bucket_accumulate_ref`] with digits taken as `scalars[i] & (2^window_size - 1)`.
#[allow(clippy::too_many_arguments)]
pub fn bucket_accumulate_scalars_ref(
    config: &ModuleConfig,
    bucket_accum: &mut [f64],
    scalars: &[u64],
    window_size: u32,
    point_coords: &[f64],
    num_buckets: usize,
    coord_size: usize,
) {
    let mask: u64 = window_mask(window_size);
    accumulate_with(
        config,
        bucket_accum,
        scalars.len(),
        |i| scalars[i] & mask,
        point_coords,
        num_buckets,
        coord_size,
    );
}

fn accumulate_with<D>(
    config: &ModuleConfig,
    bucket_accum: &mut [f64],
    num_points: usize,
    digit: D,
    point_coords: &[f64],
    num_buckets: usize,
    coord_size: usize,
) where
    D: Fn(usize) -> u64,
{
    if config.prefers_dense(num_points, num_buckets) {
        // 0.0 * inf poisons every bucket of the indicator product.
        if !point_coords.iter().all(|x| x.is_finite()) {
            debug!(num_points, num_buckets, "non-finite coordinates, falling back to direct");
        } else {
            match dense_with(bucket_accum, num_points, &digit, point_coords, num_buckets, coord_size) {
                Ok(()) => {
                    debug!(num_points, num_buckets, coord_size, "dense bucket accumulation");
                    return;
                }
                Err(err) => {
                    debug!(%err, num_points, num_buckets, "dense bucket scratch unavailable, falling back to direct");
                }
            }
        }
    }
    direct_with(bucket_accum, num_points, digit, point_coords, num_buckets, coord_size);
}

fn direct_with<D>(bucket_accum: &mut [f64], num_points: usize, digit: D, point_coords: &[f64], num_buckets: usize, coord_size: usize)
where
    D: Fn(usize) -> u64,
{
    #[cfg(debug_assertions)]
    {
        assert_eq!(bucket_accum.len(), num_buckets * coord_size);
        assert_eq!(point_coords.len(), num_points * coord_size);
    }

    if coord_size == 0 {
        return;
    }

    for (i, point) in point_coords.chunks_exact(coord_size).enumerate() {
        if let Some(row) = bucket_row(digit(i), num_buckets) {
            vec_add_inplace_ref(&mut bucket_accum[row * coord_size..(row + 1) * coord_size], point);
        }
    }
}

fn dense_with<D>(
    bucket_accum: &mut [f64],
    num_points: usize,
    digit: D,
    point_coords: &[f64],
    num_buckets: usize,
    coord_size: usize,
) -> Result<(), TryReserveError>
where
    D: Fn(usize) -> u64,
{
    #[cfg(debug_assertions)]
    {
        assert_eq!(bucket_accum.len(), num_buckets * coord_size);
        assert_eq!(point_coords.len(), num_points * coord_size);
    }

    // All scratch is reserved before the accumulator is touched.
    let mut indicator: Vec<f64> = try_zeroed(num_points.saturating_mul(num_buckets))?;
    let mut column: Vec<f64> = try_zeroed(num_points)?;
    let mut sums: Vec<f64> = try_zeroed(num_buckets)?;

    for i in 0..num_points {
        if let Some(row) = bucket_row(digit(i), num_buckets) {
            indicator[i * num_buckets + row] = 1.0;
        }
    }

    for c in 0..coord_size {
        column
            .iter_mut()
            .enumerate()
            .for_each(|(i, x)| *x = point_coords[i * coord_size + c]);
        mat_vec_trans_ref(&mut sums, &indicator, &column, num_points, num_buckets, 1.0, 0.0);
        sums.iter()
            .enumerate()
            .for_each(|(row, &s)| bucket_accum[row * coord_size + c] += s);
    }

    Ok(())
}

fn try_zeroed(len: usize) -> Result<Vec<f64>, TryReserveError> {
    let mut v: Vec<f64> = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, 0.0);
    Ok(v)
}
