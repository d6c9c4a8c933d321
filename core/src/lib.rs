//! # zkaccel-core
//!
//! Caller-level types over [`zkaccel_backend`]:
//!
//! - [`field::Field`] -- a prime field bound to a [`zkaccel_backend::layouts::Module`],
//!   with elements kept in Montgomery form as `[u64; 4]` or `[u64; 6]`.
//! - [`field::FieldParams`] -- modulus and Montgomery constants, with ready-made
//!   parameters for BN254 and BLS12-381.
//! - NTT butterfly stages over typed elements ([`field::Field::ntt_butterfly`]).
//! - [`msm::BucketAccumulator`] -- the per-window bucket buffer of Pippenger's method.

pub mod error;
pub mod field;
pub mod msm;
pub mod ntt;

pub use error::{Error, Result};
