#[cfg(not(feature = "parallel"))]
use itertools::izip;
use tracing::warn;

use crate::{layouts::is_supported_limb_count, reference::montgomery::mont_mul_ref};

/// Element-wise `res[i] = a[i] * b[i] * R^-1 mod modulus` over `limb_count`-limb chunks.
///
/// An unsupported `limb_count` zero-fills `res`.
pub fn mont_mul_batch_ref(res: &mut [u64], a: &[u64], b: &[u64], modulus: &[u64], mu: u64, limb_count: usize) {
    mont_mul_batch_with(res, a, b, modulus, mu, limb_count, mont_mul_ref);
}

/// Batch driver shared by the backends: `kernel` computes one product.
///
/// With the `parallel` feature, lanes are split across the rayon pool. Lanes
/// write disjoint chunks of `res`, so the result is identical to the
/// sequential loop.
pub fn mont_mul_batch_with<K>(res: &mut [u64], a: &[u64], b: &[u64], modulus: &[u64], mu: u64, limb_count: usize, kernel: K)
where
    K: Fn(&mut [u64], &[u64], &[u64], &[u64], u64) + Sync + Send,
{
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    if !is_supported_limb_count(limb_count) {
        warn!(limb_count, len = res.len(), "unsupported limb count, zeroing batch output");
        res.fill(0);
        return;
    }

    #[cfg(debug_assertions)]
    {
        assert_eq!(modulus.len(), limb_count);
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        res.par_chunks_exact_mut(limb_count)
            .zip(a.par_chunks_exact(limb_count))
            .zip(b.par_chunks_exact(limb_count))
            .for_each(|((r, a), b)| kernel(r, a, b, modulus, mu));
    }

    #[cfg(not(feature = "parallel"))]
    {
        izip!(
            res.chunks_exact_mut(limb_count),
            a.chunks_exact(limb_count),
            b.chunks_exact(limb_count)
        )
        .for_each(|(r, a, b)| kernel(r, a, b, modulus, mu));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::montgomery::mont_mul_4limb_ref;

    const FR: [u64; 4] = [0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48];
    const FR_MU: u64 = 0xfffffffeffffffff;

    #[test]
    fn lanes_are_independent() {
        let a: Vec<u64> = (0..12).map(|i| (i as u64 + 1).wrapping_mul(0x9e3779b97f4a7c15)).map(|x| x >> 2).collect();
        let b: Vec<u64> = (0..12).map(|i| (i as u64 + 7).wrapping_mul(0xbf58476d1ce4e5b9)).map(|x| x >> 2).collect();
        let mut res: Vec<u64> = vec![0; 12];
        mont_mul_batch_ref(&mut res, &a, &b, &FR, FR_MU, 4);

        for i in 0..3 {
            let ai: [u64; 4] = a[4 * i..4 * i + 4].try_into().unwrap();
            let bi: [u64; 4] = b[4 * i..4 * i + 4].try_into().unwrap();
            assert_eq!(res[4 * i..4 * i + 4], mont_mul_4limb_ref(&ai, &bi, &FR, FR_MU));
        }
    }

    #[test]
    fn unsupported_limb_count_zeroes() {
        let a: Vec<u64> = vec![1; 10];
        let b: Vec<u64> = vec![2; 10];
        let mut res: Vec<u64> = vec![7; 10];
        mont_mul_batch_ref(&mut res, &a, &b, &[3, 5, 7, 11, 13], 1, 5);
        assert!(res.iter().all(|&x| x == 0));
    }
}
