//! Seeded pseudorandom sampling for the zkaccel workspace.
//!
//! [`source::Source`] wraps a ChaCha8 stream and adds the samplers the
//! arithmetic tests and benches need: reduced multi-limb integers, windowed
//! digits and integral `f64` coordinates.

pub mod source;

pub use source::Source;
