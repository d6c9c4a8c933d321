use num_bigint::BigUint;
use num_traits::Zero;
use zkaccel_backend::{
    api::{ModuleNew, MontgomeryMul, MontgomeryMulBatch},
    implementation::cpu_ref::CpuRef,
    layouts::Module,
    reference::montgomery::mont_mul_ref,
    test_suite::{BLS12_381_FQ, BLS12_381_FQ_MU, BLS12_381_FR, BLS12_381_FR_MU, BN254_FR, BN254_FR_MU},
};
use zkaccel_sampling::Source;

fn to_big(limbs: &[u64]) -> BigUint {
    BigUint::from_slice(
        &limbs
            .iter()
            .flat_map(|&x| [x as u32, (x >> 32) as u32])
            .collect::<Vec<u32>>(),
    )
}

fn neg_inv(m0: u64) -> u64 {
    let mut inv: u64 = 1;
    for _ in 0..6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(inv)));
    }
    inv.wrapping_neg()
}

/// Checks `res * R == a * b (mod m)` and `res < m`.
fn check(res: &[u64], a: &[u64], b: &[u64], modulus: &[u64]) {
    let m: BigUint = to_big(modulus);
    let lhs: BigUint = (to_big(res) << (64 * modulus.len())) % &m;
    let rhs: BigUint = (to_big(a) * to_big(b)) % &m;
    assert_eq!(lhs, rhs, "a={a:x?} b={b:x?} m={modulus:x?}");
    assert!(to_big(res) < m);
}

#[test]
fn mu_constants_match_moduli() {
    assert_eq!(neg_inv(BLS12_381_FR[0]), BLS12_381_FR_MU);
    assert_eq!(neg_inv(BN254_FR[0]), BN254_FR_MU);
    assert_eq!(neg_inv(BLS12_381_FQ[0]), BLS12_381_FQ_MU);
}

#[test]
fn matches_bigint_oracle() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let mut source: Source = Source::new([10u8; 32]);

    for modulus in [&BLS12_381_FR, &BN254_FR] {
        let mu: u64 = neg_inv(modulus[0]);
        for _ in 0..500 {
            let a: [u64; 4] = source.next_limbs_below(modulus);
            let b: [u64; 4] = source.next_limbs_below(modulus);
            check(&module.mont_mul_4limb(&a, &b, modulus, mu), &a, &b, modulus);
        }
    }

    for _ in 0..500 {
        let a: [u64; 6] = source.next_limbs_below(&BLS12_381_FQ);
        let b: [u64; 6] = source.next_limbs_below(&BLS12_381_FQ);
        check(
            &module.mont_mul_6limb(&a, &b, &BLS12_381_FQ, BLS12_381_FQ_MU),
            &a,
            &b,
            &BLS12_381_FQ,
        );
    }
}

#[test]
fn moduli_above_half_r() {
    // 2^256 - 189 and 2^384 - 317: the reduction overflows the 2L-limb buffer.
    let m4: [u64; 4] = [u64::MAX - 188, u64::MAX, u64::MAX, u64::MAX];
    let m6: [u64; 6] = [u64::MAX - 316, u64::MAX, u64::MAX, u64::MAX, u64::MAX, u64::MAX];
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let mut source: Source = Source::new([11u8; 32]);

    let mut top4: [u64; 4] = m4;
    top4[0] -= 1;
    let mut cases4: Vec<([u64; 4], [u64; 4])> = vec![(top4, top4)];
    cases4.extend((0..500).map(|_| (source.next_limbs_below(&m4), source.next_limbs_below(&m4))));
    for (a, b) in cases4 {
        check(&module.mont_mul_4limb(&a, &b, &m4, neg_inv(m4[0])), &a, &b, &m4);
    }

    let mut top6: [u64; 6] = m6;
    top6[0] -= 1;
    let mut cases6: Vec<([u64; 6], [u64; 6])> = vec![(top6, top6)];
    cases6.extend((0..500).map(|_| (source.next_limbs_below(&m6), source.next_limbs_below(&m6))));
    for (a, b) in cases6 {
        check(&module.mont_mul_6limb(&a, &b, &m6, neg_inv(m6[0])), &a, &b, &m6);
    }
}

#[test]
fn one_algorithm_for_both_widths() {
    // A 6-limb modulus whose top two limbs are zero gives the 4-limb residue scaled by 2^-128.
    let mut m6: [u64; 6] = [0; 6];
    m6[..4].copy_from_slice(&BN254_FR);
    let a: [u64; 6] = [5, 6, 7, 8, 0, 0];
    let b: [u64; 6] = [9, 10, 11, 12, 0, 0];
    let mut res: [u64; 6] = [0; 6];
    mont_mul_ref(&mut res, &a, &b, &m6, BN254_FR_MU);
    check(&res, &a, &b, &m6);
}

#[test]
fn batch_matches_oracle() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let mut source: Source = Source::new([12u8; 32]);
    let count: usize = 64;

    let mut a: Vec<u64> = vec![0; count * 6];
    let mut b: Vec<u64> = vec![0; count * 6];
    a.chunks_exact_mut(6)
        .chain(b.chunks_exact_mut(6))
        .for_each(|x| source.fill_limbs_below(&BLS12_381_FQ, x));

    let mut res: Vec<u64> = vec![0; count * 6];
    module
        .mont_mul_batch(&mut res, &a, &b, &BLS12_381_FQ, BLS12_381_FQ_MU, count, 6)
        .unwrap();

    for i in 0..count {
        let s: std::ops::Range<usize> = i * 6..(i + 1) * 6;
        check(&res[s.clone()], &a[s.clone()], &b[s], &BLS12_381_FQ);
    }
}

#[test]
fn zero_and_one() {
    let module: Module<CpuRef> = Module::<CpuRef>::new();
    let x: [u64; 4] = [3, 1, 4, 1];
    assert!(to_big(&module.mont_mul_4limb(&[0; 4], &x, &BLS12_381_FR, BLS12_381_FR_MU)).is_zero());
    // 1 * x * R^-1: scaling back by R recovers x.
    let res: [u64; 4] = module.mont_mul_4limb(&[1, 0, 0, 0], &x, &BLS12_381_FR, BLS12_381_FR_MU);
    check(&res, &[1, 0, 0, 0], &x, &BLS12_381_FR);
}
