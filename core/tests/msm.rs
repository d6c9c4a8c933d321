use zkaccel_backend::{
    api::ModuleNew,
    implementation::cpu_ref::CpuRef,
    layouts::{BucketStrategy, Module, ModuleConfig},
};
use zkaccel_core::{
    Error,
    msm::{BucketAccumulator, num_windows, window_digit},
};
use zkaccel_sampling::Source;

#[test]
fn rejects_bad_window_sizes() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    for w in [0, 33] {
        assert!(matches!(
            BucketAccumulator::new(&module, w, 2),
            Err(Error::Backend(zkaccel_backend::Error::InvalidWindowSize(x))) if x == w
        ));
    }
}

#[test]
fn pass_lifecycle() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let mut acc: BucketAccumulator<'_, CpuRef> = BucketAccumulator::new(&module, 2, 1).unwrap();
    assert_eq!(acc.num_buckets(), 3);
    assert_eq!(acc.buckets(), [0.0; 3]);

    acc.accumulate_digits(&[1, 0, 2, 3, 1], &[10.0, 20.0, 30.0, 40.0, 50.0])
        .unwrap();
    assert_eq!(acc.bucket(1), Some(&[60.0][..]));
    assert_eq!(acc.bucket(2), Some(&[30.0][..]));
    assert_eq!(acc.bucket(3), Some(&[40.0][..]));
    assert_eq!(acc.bucket(0), None);
    assert_eq!(acc.bucket(4), None);
    assert_eq!(acc.weighted_sum(), [60.0 + 2.0 * 30.0 + 3.0 * 40.0]);

    // Accumulation adds on top of what is there.
    acc.accumulate_digits(&[2], &[1.0]).unwrap();
    assert_eq!(acc.bucket(2), Some(&[31.0][..]));

    acc.reset();
    assert_eq!(acc.buckets(), [0.0; 3]);
    acc.accumulate_scalars(&[0b111, 0b100], &[5.0, 7.0]).unwrap();
    assert_eq!(acc.into_buckets(), [0.0, 0.0, 5.0]);
}

#[test]
fn length_errors_leave_buckets_untouched() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let mut acc: BucketAccumulator<'_, CpuRef> = BucketAccumulator::new(&module, 3, 2).unwrap();
    acc.accumulate_digits(&[1], &[1.0, 2.0]).unwrap();
    assert!(acc.accumulate_digits(&[1, 2], &[1.0, 2.0]).is_err());
    assert!(acc.accumulate_scalars(&[1], &[1.0]).is_err());
    assert_eq!(acc.bucket(1), Some(&[1.0, 2.0][..]));
    assert_eq!(acc.weighted_sum(), [1.0, 2.0]);
}

fn pippenger(
    module: &Module<CpuRef>,
    scalars: &[[u64; 1]],
    points: &[f64],
    coord_size: usize,
    scalar_bits: usize,
    window_size: u32,
) -> Vec<f64> {
    let mut acc: BucketAccumulator<'_, CpuRef> = BucketAccumulator::new(module, window_size, coord_size).unwrap();
    let mut total: Vec<f64> = vec![0.0; coord_size];
    for window in (0..num_windows(scalar_bits, window_size)).rev() {
        acc.reset();
        acc.accumulate_window(scalars, window, points).unwrap();
        let window_sum: Vec<f64> = acc.weighted_sum();
        for (t, s) in total.iter_mut().zip(window_sum) {
            *t = *t * (1u64 << window_size) as f64 + s;
        }
    }
    total
}

#[test]
fn windowed_sum_matches_naive() {
    let mut source: Source = Source::new([40u8; 32]);
    let (num_points, coord_size, scalar_bits) = (64, 3, 20);

    let scalars: Vec<[u64; 1]> = (0..num_points)
        .map(|_| [source.next_u64n(1 << scalar_bits, (1 << scalar_bits) - 1)])
        .collect();
    let mut points: Vec<f64> = vec![0.0; num_points * coord_size];
    source.fill_integral_f64(1000, &mut points);

    let mut want: Vec<f64> = vec![0.0; coord_size];
    for (s, p) in scalars.iter().zip(points.chunks_exact(coord_size)) {
        for c in 0..coord_size {
            want[c] += s[0] as f64 * p[c];
        }
    }

    for strategy in [BucketStrategy::Direct, BucketStrategy::Dense, BucketStrategy::Auto] {
        let module: Module<CpuRef> = Module::<CpuRef>::with_config(ModuleConfig::default().with_bucket_strategy(strategy));
        for window_size in [1, 4, 7, 13] {
            assert_eq!(
                pippenger(&module, &scalars, &points, coord_size, scalar_bits, window_size),
                want,
                "{strategy:?} w={window_size}"
            );
        }
    }
}

#[test]
fn window_digits_agree_with_scalar_masking() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let mut source: Source = Source::new([41u8; 32]);
    let scalars: Vec<u64> = (0..50).map(|_| source.next_u64n(u64::MAX, u64::MAX)).collect();
    let mut points: Vec<f64> = vec![0.0; 50 * 2];
    source.fill_integral_f64(100, &mut points);

    let mut by_scalar: BucketAccumulator<'_, CpuRef> = BucketAccumulator::new(&module, 6, 2).unwrap();
    by_scalar.accumulate_scalars(&scalars, &points).unwrap();

    let digits: Vec<u32> = scalars
        .iter()
        .map(|s| window_digit(std::slice::from_ref(s), 0, 6))
        .collect();
    let mut by_digit: BucketAccumulator<'_, CpuRef> = BucketAccumulator::new(&module, 6, 2).unwrap();
    by_digit.accumulate_digits(&digits, &points).unwrap();

    assert_eq!(by_scalar.buckets(), by_digit.buckets());
}
