//! # zkaccel-backend
//!
//! Fixed-width modular arithmetic for zero-knowledge proof systems behind a
//! trait-based hardware abstraction layer.
//!
//! The crate provides Montgomery multiplication over 256-bit and 384-bit
//! prime fields (single and batched), the radix-2 NTT butterfly (over field
//! elements and over `f64`), and the bucket accumulation step of Pippenger
//! multi-scalar multiplication. Points are opaque rows of `f64` coordinates.
//!
//! ## Architecture
//!
//! 1. **[`api`]** -- Safe traits on [`layouts::Module`]. Each call validates its
//!    slice lengths and returns [`error::Error`] before any arithmetic runs.
//! 2. **[`oep`]** -- Unsafe extension-point traits mirroring the API (e.g.
//!    [`oep::MontgomeryMulImpl`]). Backends implement these.
//! 3. **[`delegates`]** -- Blanket `impl`s connecting each [`api`] trait to the
//!    corresponding [`oep`] trait.
//! 4. **[`mod@reference`]** -- Pure-Rust kernels for every operation, used by
//!    [`implementation::cpu_ref::CpuRef`] and as the oracle for every other backend.
//!
//! The caller picks the backend through the type parameter of
//! [`layouts::Module`]; nothing in this crate switches backends at run time.
//! Every backend produces the same bits as the reference for integer paths
//! and for the `f64` element-wise kernels.
//!
//! ## Testing and Benchmarking
//!
//! The [`test_suite`] module provides backend-parametric test functions,
//! instantiated per backend with [`backend_test_suite!`] and
//! [`cross_backend_test_suite!`].
//!
//! ## Example
//!
//! ```
//! use zkaccel_backend::{
//!     api::{BucketAccumulate, ModuleNew},
//!     implementation::cpu_ref::CpuRef,
//!     layouts::Module,
//! };
//!
//! let module: Module<CpuRef> = Module::<CpuRef>::new();
//! let mut buckets: [f64; 3] = [0.0; 3];
//! module
//!     .bucket_accumulate(&mut buckets, &[1, 0, 2, 3, 1], &[10.0, 20.0, 30.0, 40.0, 50.0], 3, 1)
//!     .unwrap();
//! assert_eq!(buckets, [60.0, 30.0, 40.0]);
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

/// Safe, user-facing trait definitions.
pub mod api;

/// Hardware capability probe, evaluated once per process.
pub mod capabilities;

/// Blanket implementations connecting [`api`] traits to [`oep`] traits on
/// [`layouts::Module`].
pub mod delegates;

/// Errors returned by the [`api`] layer.
pub mod error;

/// Backends shipped with this crate.
pub mod implementation;

/// [`layouts::Backend`], [`layouts::Module`] and its configuration, limb-width types.
pub mod layouts;

/// Open Extension Points: `unsafe` traits that backends implement.
///
/// Each trait mirrors a corresponding [`api`] trait and carries the `Impl`
/// suffix. See [`doc::backend_safety`] for the safety contract.
pub mod oep;

pub mod reference;

/// Backend-parametric test functions.
pub mod test_suite;

/// Embedded safety contract documentation for backend implementors.
pub mod doc {
    /// Safety contract that all [`crate::oep`] trait implementations must uphold.
    #[doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/docs/backend_safety_contract.md"))]
    pub mod backend_safety {
        pub const _PLACEHOLDER: () = ();
    }
}

pub use capabilities::{Capabilities, capabilities};
pub use error::{Error, Result};
