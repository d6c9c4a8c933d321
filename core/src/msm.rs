//! Per-window bucket passes of Pippenger's method.
//!
//! A scalar is split into `window_size`-bit digits. For each window, every point
//! is added into the bucket named by its digit; the window result is then
//! `sum_d d * bucket_d`, computed by [`BucketAccumulator::weighted_sum`].
//! Points are opaque rows of `coord_size` f64 coordinates.

use itertools::izip;
use tracing::trace;
use zkaccel_backend::{
    api::{BucketAccumulate, BucketAccumulateScalars},
    layouts::{Backend, Module},
    reference::vec::vec_add_inplace_ref,
};

use crate::error::{Error, Result};

/// Number of `window_size`-bit windows covering `scalar_bits` bits.
pub fn num_windows(scalar_bits: usize, window_size: u32) -> usize {
    scalar_bits.div_ceil(window_size as usize)
}

/// Digit of `scalar` (little-endian limbs) in window `window`. A window may
/// straddle two limbs; bits beyond the last limb read as zero.
pub fn window_digit(scalar: &[u64], window: usize, window_size: u32) -> u32 {
    debug_assert!((1..=32).contains(&window_size));
    let bit: usize = window * window_size as usize;
    let limb: usize = bit / 64;
    let offset: u32 = (bit % 64) as u32;
    if limb >= scalar.len() {
        return 0;
    }
    let mut digit: u64 = scalar[limb] >> offset;
    if offset + window_size > 64 && limb + 1 < scalar.len() {
        digit |= scalar[limb + 1] << (64 - offset);
    }
    (digit & ((1u64 << window_size) - 1)) as u32
}

/// Owns the `(2^window_size - 1) x coord_size` bucket buffer of one window.
///
/// The buffer is zeroed on construction and by [`BucketAccumulator::reset`];
/// every `accumulate_*` call adds into it.
pub struct BucketAccumulator<'a, B: Backend> {
    module: &'a Module<B>,
    window_size: u32,
    num_buckets: usize,
    coord_size: usize,
    buckets: Vec<f64>,
}

impl<'a, B: Backend> BucketAccumulator<'a, B> {
    pub fn new(module: &'a Module<B>, window_size: u32, coord_size: usize) -> Result<Self> {
        if !(1..=32).contains(&window_size) {
            return Err(zkaccel_backend::Error::InvalidWindowSize(window_size).into());
        }
        let num_buckets: usize = 1usize
            .checked_shl(window_size)
            .map(|x| x - 1)
            .ok_or(zkaccel_backend::Error::ShapeOverflow("buckets"))?;
        let size: usize = num_buckets
            .checked_mul(coord_size)
            .ok_or(zkaccel_backend::Error::ShapeOverflow("buckets"))?;

        let mut buckets: Vec<f64> = Vec::new();
        buckets.try_reserve_exact(size).map_err(Error::OutOfMemory)?;
        buckets.resize(size, 0.0);

        Ok(Self {
            module,
            window_size,
            num_buckets,
            coord_size,
            buckets,
        })
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    pub fn coord_size(&self) -> usize {
        self.coord_size
    }

    /// Zeroes every bucket, starting a new pass.
    pub fn reset(&mut self) {
        trace!(num_buckets = self.num_buckets, coord_size = self.coord_size, "bucket pass reset");
        self.buckets.fill(0.0);
    }

    /// Coordinates of bucket `digit`, `None` for digit 0 or out of range.
    pub fn bucket(&self, digit: u32) -> Option<&[f64]> {
        if digit == 0 || digit as usize > self.num_buckets {
            return None;
        }
        let row: usize = digit as usize - 1;
        Some(&self.buckets[row * self.coord_size..(row + 1) * self.coord_size])
    }

    pub fn buckets(&self) -> &[f64] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<f64> {
        self.buckets
    }

    /// `sum_d d * bucket_d` by the running-sum trick: one pass from the top
    /// bucket down, two additions per bucket.
    pub fn weighted_sum(&self) -> Vec<f64> {
        let mut running: Vec<f64> = vec![0.0; self.coord_size];
        let mut total: Vec<f64> = vec![0.0; self.coord_size];
        if self.coord_size == 0 {
            return total;
        }
        for bucket in self.buckets.chunks_exact(self.coord_size).rev() {
            vec_add_inplace_ref(&mut running, bucket);
            for (t, r) in izip!(total.iter_mut(), running.iter()) {
                *t += r;
            }
        }
        total
    }
}

impl<B: Backend> BucketAccumulator<'_, B>
where
    Module<B>: BucketAccumulate,
{
    /// Adds point `i` into bucket `digits[i]`.
    pub fn accumulate_digits(&mut self, digits: &[u32], point_coords: &[f64]) -> Result<()> {
        trace!(num_points = digits.len(), "bucket pass accumulate");
        self.module
            .bucket_accumulate(&mut self.buckets, digits, point_coords, self.num_buckets, self.coord_size)?;
        Ok(())
    }

    /// Adds point `i` into the bucket of `scalars[i]`'s digit in window `window`.
    pub fn accumulate_window<S: AsRef<[u64]>>(&mut self, scalars: &[S], window: usize, point_coords: &[f64]) -> Result<()> {
        let digits: Vec<u32> = scalars
            .iter()
            .map(|s| window_digit(s.as_ref(), window, self.window_size))
            .collect();
        self.accumulate_digits(&digits, point_coords)
    }
}

impl<B: Backend> BucketAccumulator<'_, B>
where
    Module<B>: BucketAccumulateScalars,
{
    /// Adds point `i` into the bucket named by the low `window_size` bits of `scalars[i]`.
    pub fn accumulate_scalars(&mut self, scalars: &[u64], point_coords: &[f64]) -> Result<()> {
        trace!(num_points = scalars.len(), "bucket pass accumulate");
        self.module.bucket_accumulate_scalars(
            &mut self.buckets,
            scalars,
            self.window_size,
            point_coords,
            self.num_buckets,
            self.coord_size,
        )?;
        Ok(())
    }
}
