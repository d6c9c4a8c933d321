use zkaccel_sampling::Source;

use crate::{
    api::{MatMul, MatVec, VecAdd, VecMul, VecMulAdd, VecScale, VecSub},
    layouts::{Backend, Module},
};

fn draw(source: &mut Source, n: usize) -> Vec<f64> {
    (0..n).map(|_| source.next_f64(-8.0, 8.0)).collect()
}

pub fn test_vec_ops<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: VecAdd + VecSub + VecMul + VecScale + VecMulAdd,
    Module<BT>: VecAdd + VecSub + VecMul + VecScale + VecMulAdd,
{
    let mut source: Source = Source::new([8u8; 32]);

    for n in [0, 1, 3, 4, 7, 64, 65] {
        let a: Vec<f64> = draw(&mut source, n);
        let b: Vec<f64> = draw(&mut source, n);
        let c: Vec<f64> = draw(&mut source, n);
        let s: f64 = source.next_f64(-2.0, 2.0);

        let mut res_ref: Vec<f64> = vec![0.0; n];
        let mut res_test: Vec<f64> = vec![f64::NAN; n];

        module_ref.vec_add(&mut res_ref, &a, &b).unwrap();
        module_test.vec_add(&mut res_test, &a, &b).unwrap();
        assert_eq!(res_ref, res_test, "vec_add n={n}");

        module_ref.vec_sub(&mut res_ref, &a, &b).unwrap();
        module_test.vec_sub(&mut res_test, &a, &b).unwrap();
        assert_eq!(res_ref, res_test, "vec_sub n={n}");

        module_ref.vec_mul(&mut res_ref, &a, &b).unwrap();
        module_test.vec_mul(&mut res_test, &a, &b).unwrap();
        assert_eq!(res_ref, res_test, "vec_mul n={n}");

        module_ref.vec_scale(&mut res_ref, &a, s).unwrap();
        module_test.vec_scale(&mut res_test, &a, s).unwrap();
        assert_eq!(res_ref, res_test, "vec_scale n={n}");

        module_ref.vec_muladd(&mut res_ref, &a, &b, &c).unwrap();
        module_test.vec_muladd(&mut res_test, &a, &b, &c).unwrap();
        assert_eq!(res_ref, res_test, "vec_muladd n={n}");
    }
}

pub fn test_mat_ops<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: MatMul + MatVec,
    Module<BT>: MatMul + MatVec,
{
    let mut source: Source = Source::new([9u8; 32]);

    for (m, n, k) in [(1, 1, 1), (3, 5, 2), (8, 8, 8), (7, 1, 13)] {
        let a: Vec<f64> = draw(&mut source, m * k);
        let b: Vec<f64> = draw(&mut source, k * n);
        let c0: Vec<f64> = draw(&mut source, m * n);

        for (alpha, beta) in [(1.0, 0.0), (0.5, 1.0), (-2.0, 0.25)] {
            let mut c_ref: Vec<f64> = c0.clone();
            let mut c_test: Vec<f64> = c0.clone();
            module_ref.mat_mul(&mut c_ref, &a, &b, m, n, k, alpha, beta).unwrap();
            module_test.mat_mul(&mut c_test, &a, &b, m, n, k, alpha, beta).unwrap();
            assert_eq!(c_ref, c_test, "mat_mul ({m}, {n}, {k}) alpha={alpha} beta={beta}");
        }

        let x: Vec<f64> = draw(&mut source, k);
        let mut y_ref: Vec<f64> = vec![f64::NAN; m];
        let mut y_test: Vec<f64> = vec![f64::NAN; m];
        module_ref.mat_vec(&mut y_ref, &a, &x, m, k, 1.5, 0.0).unwrap();
        module_test.mat_vec(&mut y_test, &a, &x, m, k, 1.5, 0.0).unwrap();
        assert!(y_ref.iter().all(|y| y.is_finite()));
        assert_eq!(y_ref, y_test, "mat_vec ({m}, {k})");
    }
}
