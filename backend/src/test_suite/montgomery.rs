use rand_core::RngCore;
use zkaccel_sampling::Source;

use crate::{
    api::{MontgomeryMul, MontgomeryMulBatch},
    error::Error,
    layouts::{Backend, Module},
    reference::limbs::{compare_ref, sub_with_borrow_ref},
    test_suite::{BLS12_381_FQ, BLS12_381_FQ_MU, BLS12_381_FR, BLS12_381_FR_MU, BLS12_381_FR_R, BN254_FR, BN254_FR_MU},
};

fn minus_one<const L: usize>(modulus: &[u64; L]) -> [u64; L] {
    let mut one: [u64; L] = [0u64; L];
    one[0] = 1;
    let mut res: [u64; L] = [0u64; L];
    sub_with_borrow_ref(&mut res, modulus, &one);
    res
}

pub fn test_mont_mul<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: MontgomeryMul,
    Module<BT>: MontgomeryMul,
{
    let mut source: Source = Source::new([0u8; 32]);

    for (modulus, mu) in [(&BLS12_381_FR, BLS12_381_FR_MU), (&BN254_FR, BN254_FR_MU)] {
        let top: [u64; 4] = minus_one(modulus);
        let mut cases: Vec<([u64; 4], [u64; 4])> = vec![([0; 4], top), (top, top), ([1, 0, 0, 0], top)];
        cases.extend((0..256).map(|_| (source.next_limbs_below(modulus), source.next_limbs_below(modulus))));

        for (a, b) in cases {
            let want: [u64; 4] = module_ref.mont_mul_4limb(&a, &b, modulus, mu);
            let have: [u64; 4] = module_test.mont_mul_4limb(&a, &b, modulus, mu);
            assert_eq!(want, have, "a={a:x?} b={b:x?}");
            assert!(compare_ref(&have, modulus).is_lt());
        }
    }

    let top: [u64; 6] = minus_one(&BLS12_381_FQ);
    let mut cases: Vec<([u64; 6], [u64; 6])> = vec![([0; 6], top), (top, top)];
    cases.extend((0..256).map(|_| {
        (
            source.next_limbs_below(&BLS12_381_FQ),
            source.next_limbs_below(&BLS12_381_FQ),
        )
    }));
    for (a, b) in cases {
        let want: [u64; 6] = module_ref.mont_mul_6limb(&a, &b, &BLS12_381_FQ, BLS12_381_FQ_MU);
        let have: [u64; 6] = module_test.mont_mul_6limb(&a, &b, &BLS12_381_FQ, BLS12_381_FQ_MU);
        assert_eq!(want, have, "a={a:x?} b={b:x?}");
        assert!(compare_ref(&have, &BLS12_381_FQ).is_lt());
    }
}

/// `R mod m` is the Montgomery form of one and is fixed by multiplication with itself.
pub fn test_mont_mul_identity<B: Backend>(module: &Module<B>)
where
    Module<B>: MontgomeryMul,
{
    let res: [u64; 4] = module.mont_mul_4limb(&BLS12_381_FR_R, &BLS12_381_FR_R, &BLS12_381_FR, BLS12_381_FR_MU);
    assert_eq!(res, BLS12_381_FR_R);
}

pub fn test_mont_mul_batch<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: MontgomeryMulBatch,
    Module<BT>: MontgomeryMulBatch + MontgomeryMul,
{
    let mut source: Source = Source::new([1u8; 32]);

    for count in [0, 1, 7, 33] {
        for modulus in [&BLS12_381_FR[..], &BLS12_381_FQ[..]] {
            let l: usize = modulus.len();
            let mu: u64 = if l == 4 { BLS12_381_FR_MU } else { BLS12_381_FQ_MU };

            let mut a: Vec<u64> = vec![0; count * l];
            let mut b: Vec<u64> = vec![0; count * l];
            a.chunks_exact_mut(l)
                .chain(b.chunks_exact_mut(l))
                .for_each(|x| source.fill_limbs_below(modulus, x));

            // Garbage in the outputs must be overwritten.
            let mut res_ref: Vec<u64> = (0..count * l).map(|_| source.next_u64()).collect();
            let mut res_test: Vec<u64> = res_ref.clone();

            module_ref
                .mont_mul_batch(&mut res_ref, &a, &b, modulus, mu, count, l)
                .unwrap();
            module_test
                .mont_mul_batch(&mut res_test, &a, &b, modulus, mu, count, l)
                .unwrap();
            assert_eq!(res_ref, res_test);

            for i in 0..count {
                let lane: &[u64] = &res_test[i * l..(i + 1) * l];
                if l == 4 {
                    let want: [u64; 4] = module_test.mont_mul_4limb(
                        a[i * 4..i * 4 + 4].try_into().unwrap(),
                        b[i * 4..i * 4 + 4].try_into().unwrap(),
                        &BLS12_381_FR,
                        mu,
                    );
                    assert_eq!(lane, want, "lane {i}");
                } else {
                    let want: [u64; 6] = module_test.mont_mul_6limb(
                        a[i * 6..i * 6 + 6].try_into().unwrap(),
                        b[i * 6..i * 6 + 6].try_into().unwrap(),
                        &BLS12_381_FQ,
                        mu,
                    );
                    assert_eq!(lane, want, "lane {i}");
                }
            }
        }
    }
}

pub fn test_mont_mul_batch_unsupported_limb_count<B: Backend>(module: &Module<B>)
where
    Module<B>: MontgomeryMulBatch,
{
    for limb_count in [0, 1, 3, 5, 8] {
        let count: usize = 3;
        let modulus: Vec<u64> = vec![u64::MAX; limb_count];
        let a: Vec<u64> = vec![1; count * limb_count];
        let b: Vec<u64> = vec![2; count * limb_count];
        let mut res: Vec<u64> = vec![0xdead; count * limb_count];
        module
            .mont_mul_batch(&mut res, &a, &b, &modulus, 1, count, limb_count)
            .unwrap();
        assert!(res.iter().all(|&x| x == 0), "limb_count={limb_count}");
    }
}

pub fn test_mont_mul_batch_length_errors<B: Backend>(module: &Module<B>)
where
    Module<B>: MontgomeryMulBatch,
{
    let a: Vec<u64> = vec![1; 8];
    let b: Vec<u64> = vec![1; 8];
    let mut res: Vec<u64> = vec![7; 8];

    assert_eq!(
        module.mont_mul_batch(&mut res, &a, &b[..4], &BLS12_381_FR, BLS12_381_FR_MU, 2, 4),
        Err(Error::LengthMismatch {
            name: "b",
            expected: 8,
            got: 4
        })
    );
    assert_eq!(
        module.mont_mul_batch(&mut res, &a, &b, &BLS12_381_FR, BLS12_381_FR_MU, 3, 4),
        Err(Error::LengthMismatch {
            name: "res",
            expected: 12,
            got: 8
        })
    );
    assert_eq!(
        module.mont_mul_batch(&mut res, &a, &b, &BLS12_381_FR[..3], BLS12_381_FR_MU, 2, 4),
        Err(Error::LengthMismatch {
            name: "modulus",
            expected: 4,
            got: 3
        })
    );
    assert_eq!(
        module.mont_mul_batch(&mut res, &a, &b, &BLS12_381_FR, BLS12_381_FR_MU, usize::MAX, 4),
        Err(Error::ShapeOverflow("res"))
    );
    assert!(res.iter().all(|&x| x == 7));
}
