use std::cmp::Ordering;

use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;

const MAXF64: f64 = 9007199254740992.0;

/// Deterministic ChaCha8 source. Two sources built from the same seed
/// produce the same stream.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.fill_bytes(&mut seed);
        seed
    }

    /// Derives an independent child source and returns it with its seed.
    pub fn branch(&mut self) -> ([u8; 32], Self) {
        let seed: [u8; 32] = self.new_seed();
        (seed, Source::new(seed))
    }

    /// Returns a uniform value in `[0, max)` by rejection on `next_u64() & mask`.
    /// `mask` must cover `max - 1`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() << 11 >> 11) as f64) / MAXF64 * (max - min)
    }

    /// Fills `res` with a uniform little-endian integer in `[0, modulus)`.
    ///
    /// # Panics
    /// Panics if `modulus` is zero or if `res.len() != modulus.len()`.
    pub fn fill_limbs_below(&mut self, modulus: &[u64], res: &mut [u64]) {
        assert_eq!(res.len(), modulus.len(), "res.len() != modulus.len()");

        let top: usize = modulus
            .iter()
            .rposition(|&x| x != 0)
            .unwrap_or_else(|| panic!("modulus must be non-zero"));
        let top_mask: u64 = u64::MAX >> modulus[top].leading_zeros();

        loop {
            res[..=top].iter_mut().for_each(|x| *x = self.source.next_u64());
            res[top] &= top_mask;
            res[top + 1..].fill(0);
            if res.iter().rev().cmp(modulus.iter().rev()) == Ordering::Less {
                return;
            }
        }
    }

    /// Returns a uniform integer in `[0, modulus)`.
    pub fn next_limbs_below<const L: usize>(&mut self, modulus: &[u64; L]) -> [u64; L] {
        let mut res: [u64; L] = [0u64; L];
        self.fill_limbs_below(modulus, &mut res);
        res
    }

    /// Returns a uniform `window_size`-bit digit, zero included.
    #[inline(always)]
    pub fn next_digit(&mut self, window_size: u32) -> u32 {
        debug_assert!((1..=32).contains(&window_size), "window_size={window_size}");
        (self.next_u64() & ((1u64 << window_size) - 1)) as u32
    }

    /// Fills `res` with integers drawn uniformly from `[-bound, bound]`, stored as `f64`.
    /// Keeping `bound` well under `2^53 / res.len()` keeps every partial sum exact.
    pub fn fill_integral_f64(&mut self, bound: u64, res: &mut [f64]) {
        assert!(bound < (1 << 52), "bound={bound} exceeds the f64 mantissa");
        let max: u64 = 2 * bound + 1;
        let mask: u64 = max.next_power_of_two() - 1;
        res.iter_mut()
            .for_each(|x| *x = (self.next_u64n(max, mask) as i64 - bound as i64) as f64);
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a: Source = Source::new([7u8; 32]);
        let mut b: Source = Source::new([7u8; 32]);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn limbs_below_modulus() {
        let modulus: [u64; 4] = [0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48];
        let mut source: Source = Source::new([0u8; 32]);
        for _ in 0..256 {
            let x: [u64; 4] = source.next_limbs_below(&modulus);
            assert_eq!(x.iter().rev().cmp(modulus.iter().rev()), Ordering::Less);
        }
    }

    #[test]
    fn limbs_below_short_modulus() {
        // Upper limbs of the modulus are zero: samples must keep them zero.
        let modulus: [u64; 6] = [17, 3, 0, 0, 0, 0];
        let mut source: Source = Source::new([1u8; 32]);
        for _ in 0..64 {
            let x: [u64; 6] = source.next_limbs_below(&modulus);
            assert!(x[2..].iter().all(|&l| l == 0));
            assert!(x[1] < 3 || (x[1] == 3 && x[0] < 17));
        }
    }

    #[test]
    fn integral_coordinates_in_range() {
        let mut source: Source = Source::new([2u8; 32]);
        let mut coords: Vec<f64> = vec![0.0; 512];
        source.fill_integral_f64(1000, &mut coords);
        assert!(coords.iter().all(|x| x.fract() == 0.0 && x.abs() <= 1000.0));
    }

    #[test]
    fn digits_fit_window() {
        let mut source: Source = Source::new([3u8; 32]);
        for w in [1, 4, 8, 16, 32] {
            for _ in 0..32 {
                let d: u32 = source.next_digit(w);
                assert!(w == 32 || d < (1 << w));
            }
        }
    }
}
