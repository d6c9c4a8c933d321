use rand_core::RngCore;
use zkaccel_sampling::Source;

use crate::{
    api::{BucketAccumulate, BucketAccumulateScalars},
    error::Error,
    layouts::{Backend, Module},
};

/// Random digits in `0..=num_buckets + 2`, so that zero and out-of-range digits occur.
fn random_indices(source: &mut Source, num_points: usize, num_buckets: usize) -> Vec<u32> {
    let max: u64 = num_buckets as u64 + 3;
    let mask: u64 = max.next_power_of_two() - 1;
    (0..num_points)
        .map(|_| source.next_u64n(max, mask) as u32)
        .collect()
}

pub fn test_bucket_accumulate<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: BucketAccumulate,
    Module<BT>: BucketAccumulate,
{
    let mut source: Source = Source::new([5u8; 32]);

    for (num_points, num_buckets, coord_size) in [(0, 3, 2), (5, 3, 1), (64, 15, 3), (300, 255, 2), (1000, 31, 4), (17, 1, 0)] {
        let indices: Vec<u32> = random_indices(&mut source, num_points, num_buckets);
        let mut coords: Vec<f64> = vec![0.0; num_points * coord_size];
        source.fill_integral_f64(1 << 20, &mut coords);

        let mut accum_ref: Vec<f64> = vec![0.0; num_buckets * coord_size];
        source.fill_integral_f64(1 << 20, &mut accum_ref);
        let mut accum_test: Vec<f64> = accum_ref.clone();

        module_ref
            .bucket_accumulate(&mut accum_ref, &indices, &coords, num_buckets, coord_size)
            .unwrap();
        module_test
            .bucket_accumulate(&mut accum_test, &indices, &coords, num_buckets, coord_size)
            .unwrap();
        assert_eq!(accum_ref, accum_test, "shape=({num_points}, {num_buckets}, {coord_size})");
    }
}

pub fn test_bucket_accumulate_scalars<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: BucketAccumulateScalars,
    Module<BT>: BucketAccumulateScalars + BucketAccumulate,
{
    let mut source: Source = Source::new([6u8; 32]);
    let num_points: usize = 100;
    let coord_size: usize = 2;

    for window_size in [1, 4, 8, 12] {
        let num_buckets: usize = (1 << window_size) - 1;
        let scalars: Vec<u64> = (0..num_points).map(|_| source.next_u64()).collect();
        let mut coords: Vec<f64> = vec![0.0; num_points * coord_size];
        source.fill_integral_f64(1 << 20, &mut coords);

        let mut accum_ref: Vec<f64> = vec![0.0; num_buckets * coord_size];
        let mut accum_test: Vec<f64> = vec![0.0; num_buckets * coord_size];
        module_ref
            .bucket_accumulate_scalars(&mut accum_ref, &scalars, window_size, &coords, num_buckets, coord_size)
            .unwrap();
        module_test
            .bucket_accumulate_scalars(&mut accum_test, &scalars, window_size, &coords, num_buckets, coord_size)
            .unwrap();
        assert_eq!(accum_ref, accum_test, "window_size={window_size}");

        let digits: Vec<u32> = scalars
            .iter()
            .map(|&s| (s & ((1 << window_size) - 1)) as u32)
            .collect();
        let mut accum_digits: Vec<f64> = vec![0.0; num_buckets * coord_size];
        module_test
            .bucket_accumulate(&mut accum_digits, &digits, &coords, num_buckets, coord_size)
            .unwrap();
        assert_eq!(accum_test, accum_digits, "window_size={window_size}");
    }
}

/// Indices `[1, 0, 2, 3, 1]` over three buckets.
pub fn test_bucket_accumulate_scenario<B: Backend>(module: &Module<B>)
where
    Module<B>: BucketAccumulate,
{
    let mut accum: Vec<f64> = vec![0.0; 3];
    module
        .bucket_accumulate(&mut accum, &[1, 0, 2, 3, 1], &[10.0, 20.0, 30.0, 40.0, 50.0], 3, 1)
        .unwrap();
    assert_eq!(accum, [60.0, 30.0, 40.0]);

    // A second pass adds on top of the first.
    module
        .bucket_accumulate(&mut accum, &[3], &[1.0], 3, 1)
        .unwrap();
    assert_eq!(accum, [60.0, 30.0, 41.0]);
}

/// Every valid point lands in exactly one bucket, so the column sums of the
/// buckets equal the column sums of the valid points.
pub fn test_bucket_accumulate_conservation<B: Backend>(module: &Module<B>)
where
    Module<B>: BucketAccumulate,
{
    let mut source: Source = Source::new([7u8; 32]);
    let (num_points, num_buckets, coord_size): (usize, usize, usize) = (513, 63, 3);

    let indices: Vec<u32> = random_indices(&mut source, num_points, num_buckets);
    let mut coords: Vec<f64> = vec![0.0; num_points * coord_size];
    source.fill_integral_f64(1 << 20, &mut coords);

    let mut accum: Vec<f64> = vec![0.0; num_buckets * coord_size];
    module
        .bucket_accumulate(&mut accum, &indices, &coords, num_buckets, coord_size)
        .unwrap();

    for c in 0..coord_size {
        let want: f64 = indices
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != 0 && d as usize <= num_buckets)
            .map(|(i, _)| coords[i * coord_size + c])
            .sum();
        let have: f64 = (0..num_buckets).map(|b| accum[b * coord_size + c]).sum();
        assert_eq!(want, have, "coordinate {c}");
    }
}

pub fn test_bucket_accumulate_errors<B: Backend>(module: &Module<B>)
where
    Module<B>: BucketAccumulate + BucketAccumulateScalars,
{
    let mut accum: Vec<f64> = vec![0.0; 6];
    let coords: Vec<f64> = vec![1.0; 4];

    assert_eq!(
        module.bucket_accumulate(&mut accum, &[1, 2, 3], &coords, 3, 2),
        Err(Error::LengthMismatch {
            name: "point_coords",
            expected: 6,
            got: 4
        })
    );
    assert_eq!(
        module.bucket_accumulate(&mut accum, &[1, 2], &coords, 4, 2),
        Err(Error::LengthMismatch {
            name: "bucket_accum",
            expected: 8,
            got: 6
        })
    );
    assert_eq!(
        module.bucket_accumulate(&mut accum, &[1, 2], &coords, usize::MAX, 2),
        Err(Error::ShapeOverflow("bucket_accum"))
    );
    for window_size in [0, 33, 64] {
        assert_eq!(
            module.bucket_accumulate_scalars(&mut accum, &[1, 2], window_size, &coords, 3, 2),
            Err(Error::InvalidWindowSize(window_size))
        );
    }
    assert!(accum.iter().all(|&x| x == 0.0));
}
