use num_bigint::BigUint;
use num_traits::One;
use zkaccel_backend::{api::ModuleNew, implementation::cpu_ref::CpuRef, layouts::Module};
use zkaccel_core::field::{BLS12_381_FQ, BLS12_381_FR, BN254_FQ, BN254_FR, Field, FieldParams};
use zkaccel_sampling::Source;

fn to_big(limbs: &[u64]) -> BigUint {
    BigUint::from_slice(
        &limbs
            .iter()
            .flat_map(|&x| [x as u32, (x >> 32) as u32])
            .collect::<Vec<u32>>(),
    )
}

fn from_big<const L: usize>(x: &BigUint) -> [u64; L] {
    let mut limbs: [u64; L] = [0u64; L];
    for (dst, src) in limbs.iter_mut().zip(x.to_u64_digits()) {
        *dst = src;
    }
    limbs
}

fn check_arithmetic<const L: usize>(params: FieldParams<L>, seed: u8)
where
    [u64; L]: zkaccel_backend::layouts::FieldLimbs,
{
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let field: Field<'_, CpuRef, L> = Field::new(&module, params);
    let m: BigUint = to_big(&params.modulus);
    let mut source: Source = Source::new([seed; 32]);

    for _ in 0..200 {
        let a: [u64; L] = source.next_limbs_below(&params.modulus);
        let b: [u64; L] = source.next_limbs_below(&params.modulus);
        let (ba, bb) = (to_big(&a), to_big(&b));
        let (ma, mb) = (field.from_canonical(&a), field.from_canonical(&b));

        assert_eq!(field.to_canonical(&ma), a);
        assert_eq!(to_big(&field.to_canonical(&field.mul(&ma, &mb))), (&ba * &bb) % &m);
        assert_eq!(to_big(&field.to_canonical(&field.add(&ma, &mb))), (&ba + &bb) % &m);
        assert_eq!(to_big(&field.to_canonical(&field.sub(&ma, &mb))), (&ba + &m - &bb) % &m);
        assert_eq!(to_big(&field.to_canonical(&field.neg(&ma))), (&m - &ba) % &m);
        assert_eq!(to_big(&field.to_canonical(&field.square(&ma))), (&ba * &ba) % &m);
    }
}

#[test]
fn arithmetic_matches_bigint() {
    check_arithmetic(BN254_FR, 1);
    check_arithmetic(BN254_FQ, 2);
    check_arithmetic(BLS12_381_FR, 3);
    check_arithmetic(BLS12_381_FQ, 4);
}

#[test]
fn constants_are_consistent() {
    for params in [BN254_FR, BN254_FQ, BLS12_381_FR] {
        let m: BigUint = to_big(&params.modulus);
        let r: BigUint = (BigUint::one() << 256) % &m;
        assert_eq!(to_big(&params.r), r);
        assert_eq!(to_big(&params.r2), (&r * &r) % &m);
        assert_eq!(params.modulus[0].wrapping_mul(params.mu), u64::MAX);
    }
    let m: BigUint = to_big(&BLS12_381_FQ.modulus);
    let r: BigUint = (BigUint::one() << 384) % &m;
    assert_eq!(to_big(&BLS12_381_FQ.r), r);
    assert_eq!(to_big(&BLS12_381_FQ.r2), (&r * &r) % &m);
}

#[test]
fn from_modulus_on_custom_prime() {
    // 2^255 - 19.
    let modulus: [u64; 4] = [u64::MAX - 18, u64::MAX, u64::MAX, u64::MAX >> 1];
    let params: FieldParams<4> = FieldParams::from_modulus(modulus).unwrap();
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let field: Field<'_, CpuRef, 4> = Field::new(&module, params);

    let m: BigUint = to_big(&modulus);
    assert_eq!(to_big(&params.r), (BigUint::one() << 256) % &m);
    let x: [u64; 4] = field.from_u64(123_456_789);
    let y: [u64; 4] = field.from_u64(987_654_321);
    assert_eq!(
        to_big(&field.to_canonical(&field.mul(&x, &y))),
        BigUint::from(123_456_789u64 * 987_654_321u64)
    );
}

#[test]
fn from_canonical_reduces() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let field: Field<'_, CpuRef, 6> = Field::new(&module, BLS12_381_FQ);
    let m: BigUint = to_big(&BLS12_381_FQ.modulus);
    let x: [u64; 6] = from_big(&(&m + BigUint::from(5u64)));
    assert_eq!(field.from_canonical(&x), field.from_u64(5));
    assert_eq!(field.from_canonical(field.modulus()), field.zero());
    assert_eq!(field.from_u64(1), field.one());
}

#[test]
fn pow_and_inv() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let field: Field<'_, CpuRef, 4> = Field::new(&module, BLS12_381_FR);
    let m: BigUint = to_big(&BLS12_381_FR.modulus);
    let mut source: Source = Source::new([5u8; 32]);

    for _ in 0..16 {
        let a: [u64; 4] = source.next_limbs_below(&BLS12_381_FR.modulus);
        let e: [u64; 2] = [source.next_limbs_below(&[u64::MAX])[0], 7];
        let ma: [u64; 4] = field.from_canonical(&a);
        assert_eq!(
            to_big(&field.to_canonical(&field.pow(&ma, &e))),
            to_big(&a).modpow(&to_big(&e), &m)
        );
        if !field.is_zero(&ma) {
            let inv: [u64; 4] = field.inv(&ma).unwrap();
            assert_eq!(field.mul(&ma, &inv), field.one());
        }
    }

    assert_eq!(field.pow(&field.from_u64(3), &[]), field.one());
    assert_eq!(field.pow(&field.zero(), &[0, 0]), field.one());
    assert_eq!(field.inv(&field.zero()), None);
}

#[test]
fn powers_are_geometric() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let field: Field<'_, CpuRef, 4> = Field::new(&module, BN254_FR);
    let g: [u64; 4] = field.from_u64(5);
    let powers: Vec<[u64; 4]> = field.powers(&g, 10);
    assert_eq!(powers.len(), 10);
    assert_eq!(powers[0], field.one());
    for (i, p) in powers.iter().enumerate() {
        assert_eq!(*p, field.pow(&g, &[i as u64]));
    }
    assert!(field.powers(&g, 0).is_empty());
}

#[test]
fn mul_batch_matches_mul() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let field: Field<'_, CpuRef, 6> = Field::new(&module, BLS12_381_FQ);
    let mut source: Source = Source::new([6u8; 32]);

    let a: Vec<[u64; 6]> = (0..33)
        .map(|_| source.next_limbs_below(&BLS12_381_FQ.modulus))
        .collect();
    let b: Vec<[u64; 6]> = (0..33)
        .map(|_| source.next_limbs_below(&BLS12_381_FQ.modulus))
        .collect();
    let mut res: Vec<[u64; 6]> = vec![[0u64; 6]; 33];
    field.mul_batch(&mut res, &a, &b).unwrap();
    for i in 0..33 {
        assert_eq!(res[i], field.mul(&a[i], &b[i]));
    }

    let mut short: Vec<[u64; 6]> = vec![[0u64; 6]; 32];
    assert!(field.mul_batch(&mut short, &a, &b).is_err());
}

#[test]
fn zero_behaves() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let field: Field<'_, CpuRef, 4> = Field::new(&module, BN254_FQ);
    let x: [u64; 4] = field.from_u64(42);
    assert!(field.is_zero(&field.zero()));
    assert_eq!(field.mul(&x, &field.zero()), field.zero());
    assert_eq!(field.add(&x, &field.zero()), x);
    assert_eq!(field.neg(&field.zero()), field.zero());
}
