use zkaccel_sampling::Source;

use crate::{
    api::{NttButterfly, NttButterflyF64},
    error::Error,
    layouts::{Backend, MAX_LIMBS, Module},
    reference::{
        field::{field_add_ref, field_sub_ref},
        montgomery::mont_mul_ref,
    },
    test_suite::{BLS12_381_FQ, BLS12_381_FQ_MU, BLS12_381_FR, BLS12_381_FR_MU, BN254_FR, BN254_FR_MU},
};

fn random_elements(source: &mut Source, modulus: &[u64], n: usize) -> Vec<u64> {
    let mut res: Vec<u64> = vec![0; n * modulus.len()];
    res.chunks_exact_mut(modulus.len())
        .for_each(|x| source.fill_limbs_below(modulus, x));
    res
}

pub fn test_ntt_butterfly<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: NttButterfly,
    Module<BT>: NttButterfly,
{
    let mut source: Source = Source::new([2u8; 32]);

    for (modulus, mu) in [
        (&BLS12_381_FR[..], BLS12_381_FR_MU),
        (&BN254_FR[..], BN254_FR_MU),
        (&BLS12_381_FQ[..], BLS12_381_FQ_MU),
    ] {
        let l: usize = modulus.len();
        for n in [0, 1, 8, 33] {
            let in_even: Vec<u64> = random_elements(&mut source, modulus, n);
            let in_odd: Vec<u64> = random_elements(&mut source, modulus, n);
            let twiddle: Vec<u64> = random_elements(&mut source, modulus, n);

            let mut even_ref: Vec<u64> = vec![0; n * l];
            let mut odd_ref: Vec<u64> = vec![0; n * l];
            let mut even_test: Vec<u64> = vec![u64::MAX; n * l];
            let mut odd_test: Vec<u64> = vec![u64::MAX; n * l];

            module_ref
                .ntt_butterfly(&mut even_ref, &mut odd_ref, &in_even, &in_odd, &twiddle, modulus, mu)
                .unwrap();
            module_test
                .ntt_butterfly(&mut even_test, &mut odd_test, &in_even, &in_odd, &twiddle, modulus, mu)
                .unwrap();
            assert_eq!(even_ref, even_test);
            assert_eq!(odd_ref, odd_test);

            // out_even + out_odd = 2 * in_even, out_even - out_odd = 2 * twiddle * in_odd.
            let mut lhs: [u64; MAX_LIMBS] = [0; MAX_LIMBS];
            let mut rhs: [u64; MAX_LIMBS] = [0; MAX_LIMBS];
            let mut t: [u64; MAX_LIMBS] = [0; MAX_LIMBS];
            for i in 0..n {
                let s: std::ops::Range<usize> = i * l..(i + 1) * l;
                field_add_ref(&mut lhs[..l], &even_test[s.clone()], &odd_test[s.clone()], modulus);
                field_add_ref(&mut rhs[..l], &in_even[s.clone()], &in_even[s.clone()], modulus);
                assert_eq!(lhs[..l], rhs[..l]);

                field_sub_ref(&mut lhs[..l], &even_test[s.clone()], &odd_test[s.clone()], modulus);
                mont_mul_ref(&mut t[..l], &twiddle[s.clone()], &in_odd[s.clone()], modulus, mu);
                field_add_ref(&mut rhs[..l], &t[..l], &t[..l], modulus);
                assert_eq!(lhs[..l], rhs[..l]);
            }
        }
    }
}

pub fn test_ntt_butterfly_errors<B: Backend>(module: &Module<B>)
where
    Module<B>: NttButterfly + NttButterflyF64,
{
    let x: Vec<u64> = vec![0; 8];
    let mut even: Vec<u64> = vec![0; 8];
    let mut odd: Vec<u64> = vec![0; 8];

    assert_eq!(
        module.ntt_butterfly(&mut even, &mut odd, &x, &x, &x, &[3, 0, 0, 0, 1], 1),
        Err(Error::UnsupportedLimbCount(5))
    );
    assert_eq!(
        module.ntt_butterfly(&mut even, &mut odd, &x, &x[..4], &x, &BLS12_381_FR, BLS12_381_FR_MU),
        Err(Error::LengthMismatch {
            name: "in_odd",
            expected: 8,
            got: 4
        })
    );
    assert_eq!(
        module.ntt_butterfly(&mut even, &mut odd, &x, &x, &x, &BLS12_381_FQ, BLS12_381_FQ_MU),
        Err(Error::LengthMismatch {
            name: "in_even",
            expected: 6,
            got: 8
        })
    );

    let y: Vec<f64> = vec![0.0; 4];
    let mut even: Vec<f64> = vec![0.0; 4];
    let mut odd: Vec<f64> = vec![0.0; 4];
    assert_eq!(
        module.ntt_butterfly_f64(&mut even, &mut odd, &y, &y, &y, &y[..3]),
        Err(Error::LengthMismatch {
            name: "twiddle_imag",
            expected: 4,
            got: 3
        })
    );
    assert_eq!(
        module.ntt_butterfly_f64(&mut even, &mut odd[..2], &y, &y, &y, &[]),
        Err(Error::LengthMismatch {
            name: "out_odd",
            expected: 4,
            got: 2
        })
    );
}

pub fn test_ntt_butterfly_f64<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: NttButterflyF64,
    Module<BT>: NttButterflyF64,
{
    let mut source: Source = Source::new([3u8; 32]);

    for n in [0, 1, 3, 4, 5, 17, 64] {
        let mut draw = |n: usize| -> Vec<f64> { (0..n).map(|_| source.next_f64(-1.0, 1.0)).collect() };
        let in_even: Vec<f64> = draw(n);
        let in_odd: Vec<f64> = draw(n);
        let twiddle_real: Vec<f64> = draw(n);
        let twiddle_imag: Vec<f64> = draw(n);

        let mut even_ref: Vec<f64> = vec![0.0; n];
        let mut odd_ref: Vec<f64> = vec![0.0; n];
        let mut even_test: Vec<f64> = vec![f64::NAN; n];
        let mut odd_test: Vec<f64> = vec![f64::NAN; n];

        module_ref
            .ntt_butterfly_f64(&mut even_ref, &mut odd_ref, &in_even, &in_odd, &twiddle_real, &[])
            .unwrap();
        module_test
            .ntt_butterfly_f64(&mut even_test, &mut odd_test, &in_even, &in_odd, &twiddle_real, &twiddle_imag)
            .unwrap();
        assert_eq!(even_ref, even_test);
        assert_eq!(odd_ref, odd_test);
    }
}

/// On integral data the f64 butterfly satisfies the butterfly identities exactly.
pub fn test_ntt_butterfly_f64_identities<B: Backend>(module: &Module<B>)
where
    Module<B>: NttButterflyF64,
{
    let mut source: Source = Source::new([4u8; 32]);
    let n: usize = 37;
    let mut in_even: Vec<f64> = vec![0.0; n];
    let mut in_odd: Vec<f64> = vec![0.0; n];
    let mut twiddle: Vec<f64> = vec![0.0; n];
    source.fill_integral_f64(1 << 20, &mut in_even);
    source.fill_integral_f64(1 << 20, &mut in_odd);
    source.fill_integral_f64(1 << 10, &mut twiddle);

    let mut even: Vec<f64> = vec![0.0; n];
    let mut odd: Vec<f64> = vec![0.0; n];
    module
        .ntt_butterfly_f64(&mut even, &mut odd, &in_even, &in_odd, &twiddle, &[])
        .unwrap();

    for i in 0..n {
        assert_eq!(even[i] + odd[i], 2.0 * in_even[i]);
        assert_eq!(even[i] - odd[i], 2.0 * twiddle[i] * in_odd[i]);
    }
}
