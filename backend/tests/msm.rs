use zkaccel_backend::{
    api::{BucketAccumulate, BucketAccumulateScalars, ModuleNew},
    implementation::cpu_ref::CpuRef,
    layouts::{BucketStrategy, Module, ModuleConfig},
};
use zkaccel_sampling::Source;

fn module(strategy: BucketStrategy) -> Module<CpuRef> {
    Module::<CpuRef>::with_config(ModuleConfig::default().with_bucket_strategy(strategy))
}

#[test]
fn scenario_under_every_strategy() {
    for strategy in [BucketStrategy::Auto, BucketStrategy::Direct, BucketStrategy::Dense] {
        let mut accum: Vec<f64> = vec![0.0; 3];
        module(strategy)
            .bucket_accumulate(&mut accum, &[1, 0, 2, 3, 1], &[10.0, 20.0, 30.0, 40.0, 50.0], 3, 1)
            .unwrap();
        assert_eq!(accum, [60.0, 30.0, 40.0], "{strategy:?}");
    }
}

#[test]
fn strategies_agree_around_auto_thresholds() {
    let mut source: Source = Source::new([30u8; 32]);
    let coord_size: usize = 3;

    // Shapes on both sides of the default 1024-bucket and 4096-point thresholds.
    for (num_points, num_buckets) in [(4096, 1024), (4097, 15), (100, 1025), (1, 1)] {
        let indices: Vec<u32> = (0..num_points)
            .map(|_| source.next_u64n(num_buckets as u64 + 1, u64::MAX >> (num_buckets as u64 + 1).leading_zeros()) as u32)
            .collect();
        let mut coords: Vec<f64> = vec![0.0; num_points * coord_size];
        source.fill_integral_f64(1 << 16, &mut coords);

        let mut results: Vec<Vec<f64>> = Vec::new();
        for strategy in [BucketStrategy::Auto, BucketStrategy::Direct, BucketStrategy::Dense] {
            let mut accum: Vec<f64> = vec![0.0; num_buckets * coord_size];
            module(strategy)
                .bucket_accumulate(&mut accum, &indices, &coords, num_buckets, coord_size)
                .unwrap();
            results.push(accum);
        }
        assert_eq!(results[0], results[1], "auto vs direct ({num_points}, {num_buckets})");
        assert_eq!(results[1], results[2], "direct vs dense ({num_points}, {num_buckets})");
    }
}

#[test]
fn window_pass_lifecycle() {
    // Accumulate two windows of 4-bit digits into the same buffer, clearing between passes.
    let m: Module<CpuRef> = Module::<CpuRef>::new();
    let scalars: [u64; 4] = [0x21, 0x10, 0xf3, 0x02];
    let coords: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let mut buckets: Vec<f64> = vec![0.0; 15 * 2];

    m.bucket_accumulate_scalars(&mut buckets, &scalars, 4, &coords, 15, 2)
        .unwrap();
    let mut want: Vec<f64> = vec![0.0; 30];
    want[0..2].copy_from_slice(&[1.0, 2.0]);
    want[2..4].copy_from_slice(&[7.0, 8.0]);
    want[4..6].copy_from_slice(&[5.0, 6.0]);
    assert_eq!(buckets, want);

    buckets.fill(0.0);
    let shifted: Vec<u64> = scalars.iter().map(|s| s >> 4).collect();
    m.bucket_accumulate_scalars(&mut buckets, &shifted, 4, &coords, 15, 2)
        .unwrap();
    let mut want: Vec<f64> = vec![0.0; 30];
    want[2..4].copy_from_slice(&[1.0, 2.0]);
    want[0..2].copy_from_slice(&[3.0, 4.0]);
    want[14 * 2..14 * 2 + 2].copy_from_slice(&[5.0, 6.0]);
    assert_eq!(buckets, want);
}

#[test]
fn non_integral_data_within_tolerance() {
    let mut source: Source = Source::new([31u8; 32]);
    let (num_points, num_buckets, coord_size): (usize, usize, usize) = (2000, 255, 2);
    let indices: Vec<u32> = (0..num_points)
        .map(|_| source.next_u64n(256, 255) as u32)
        .collect();
    let coords: Vec<f64> = (0..num_points * coord_size)
        .map(|_| source.next_f64(-1.0, 1.0))
        .collect();

    let mut direct: Vec<f64> = vec![0.0; num_buckets * coord_size];
    let mut dense: Vec<f64> = vec![0.0; num_buckets * coord_size];
    module(BucketStrategy::Direct)
        .bucket_accumulate(&mut direct, &indices, &coords, num_buckets, coord_size)
        .unwrap();
    module(BucketStrategy::Dense)
        .bucket_accumulate(&mut dense, &indices, &coords, num_buckets, coord_size)
        .unwrap();
    for (x, y) in direct.iter().zip(dense.iter()) {
        assert!((x - y).abs() <= 1e-12, "{x} vs {y}");
    }
}

#[test]
fn non_finite_coordinates_match_direct() {
    for strategy in [BucketStrategy::Auto, BucketStrategy::Direct, BucketStrategy::Dense] {
        // Digit 0 skips the infinite point.
        let mut accum: Vec<f64> = vec![0.0; 3];
        module(strategy)
            .bucket_accumulate(&mut accum, &[1, 0, 2], &[10.0, f64::INFINITY, 30.0], 3, 1)
            .unwrap();
        assert_eq!(accum, [10.0, 30.0, 0.0], "{strategy:?}");

        // A NaN point only reaches its own bucket.
        let mut accum: Vec<f64> = vec![0.0; 6];
        module(strategy)
            .bucket_accumulate_scalars(&mut accum, &[1, 2], 2, &[f64::NAN, 1.0, 5.0, 6.0], 3, 2)
            .unwrap();
        assert!(accum[0].is_nan(), "{strategy:?}");
        assert_eq!(accum[1..], [1.0, 5.0, 6.0, 0.0, 0.0], "{strategy:?}");
    }
}
