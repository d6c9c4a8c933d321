pub mod montgomery;
pub mod msm;
pub mod ntt;
pub mod vec;

/// BLS12-381 scalar field modulus.
pub const BLS12_381_FR: [u64; 4] = [0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48];
pub const BLS12_381_FR_MU: u64 = 0xfffffffeffffffff;
/// `2^256 mod BLS12_381_FR`.
pub const BLS12_381_FR_R: [u64; 4] = [0x00000001fffffffe, 0x5884b7fa00034802, 0x998c4fefecbc4ff5, 0x1824b159acc5056f];

/// BN254 scalar field modulus.
pub const BN254_FR: [u64; 4] = [0x43e1f593f0000001, 0x2833e84879b97091, 0xb85045b68181585d, 0x30644e72e131a029];
pub const BN254_FR_MU: u64 = 0xc2e1f593efffffff;

/// BLS12-381 base field modulus.
pub const BLS12_381_FQ: [u64; 6] = [
    0xb9feffffffffaaab,
    0x1eabfffeb153ffff,
    0x6730d2a0f6b0f624,
    0x64774b84f38512bf,
    0x4b1ba7b6434bacd7,
    0x1a0111ea397fe69a,
];
pub const BLS12_381_FQ_MU: u64 = 0x89f3fffcfffcfffd;

/// Instantiates backend-parametric tests taking `&Module<B>`.
#[macro_export]
macro_rules! backend_test_suite {
    (
        mod $modname:ident,
        backend = $backend:ty,
        config = $config:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use $crate::{api::ModuleTryNew, layouts::Module};

            use once_cell::sync::Lazy;

            static MODULE: Lazy<Option<Module<$backend>>> =
                Lazy::new(|| Module::<$backend>::try_new($config).ok());

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    let Some(module) = MODULE.as_ref() else {
                        eprintln!("skipping {}: backend unavailable", stringify!($test_name));
                        return;
                    };
                    ($impl)(module);
                }
            )+
        }
    };
}

/// Instantiates tests comparing a backend against a reference backend,
/// taking `(&Module<BR>, &Module<BT>)`. Tests are skipped when the backend
/// under test cannot run on this CPU.
#[macro_export]
macro_rules! cross_backend_test_suite {
    (
        mod $modname:ident,
        backend_ref = $backend_ref:ty,
        backend_test = $backend_test:ty,
        config = $config:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use $crate::{
                api::{ModuleNew, ModuleTryNew},
                layouts::Module,
            };

            use once_cell::sync::Lazy;

            static MODULE_REF: Lazy<Module<$backend_ref>> =
                Lazy::new(|| Module::<$backend_ref>::with_config($config));
            static MODULE_TEST: Lazy<Option<Module<$backend_test>>> =
                Lazy::new(|| Module::<$backend_test>::try_new($config).ok());

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    let Some(module_test) = MODULE_TEST.as_ref() else {
                        eprintln!("skipping {}: backend unavailable", stringify!($test_name));
                        return;
                    };
                    ($impl)(&*MODULE_REF, module_test);
                }
            )+
        }
    };
}
