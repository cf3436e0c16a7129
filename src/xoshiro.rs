//! A seedable random number generator for reproducible picks.
//!
//! ```
//! use weighted_pool::{xoshiro::Xoshiro256, Pool};
//! let pool = Pool::equal(["x", "y", "z"]);
//! let mut first = Xoshiro256::from("seed");
//! let mut second = Xoshiro256::from("seed");
//! for _ in 0..10 {
//!     assert_eq!(pool.pick_with(&mut first), pool.pick_with(&mut second));
//! }
//! ```

use bitcoin_hashes::Hash;
use rand_xoshiro::rand_core::{Error, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// xoshiro256** seeded from the SHA-256 digest of a byte string.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
pub struct Xoshiro256 {
    inner: Xoshiro256StarStar,
}

impl From<Xoshiro256StarStar> for Xoshiro256 {
    fn from(from: Xoshiro256StarStar) -> Self {
        Self { inner: from }
    }
}

impl From<&[u8]> for Xoshiro256 {
    fn from(from: &[u8]) -> Self {
        let hash = bitcoin_hashes::sha256::Hash::hash(from);
        Self::from(hash.to_byte_array())
    }
}

impl From<&str> for Xoshiro256 {
    fn from(value: &str) -> Self {
        Self::from(value.as_bytes())
    }
}

impl From<u64> for Xoshiro256 {
    fn from(value: u64) -> Self {
        Xoshiro256StarStar::seed_from_u64(value).into()
    }
}

impl From<[u8; 32]> for Xoshiro256 {
    /// Reads the digest as four big-endian words of generator state.
    fn from(value: [u8; 32]) -> Self {
        let mut s = [0_u8; 32];
        for (word, chunk) in s.chunks_exact_mut(8).zip(value.chunks_exact(8)) {
            let v = chunk.iter().fold(0_u64, |v, &b| (v << 8) | u64::from(b));
            word.copy_from_slice(&v.to_le_bytes());
        }
        Xoshiro256StarStar::from_seed(s).into()
    }
}

impl Xoshiro256 {
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_double(&mut self) -> f64 {
        crate::sampler::next_double(self)
    }
}

impl RngCore for Xoshiro256 {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng() {
        let mut rng = Xoshiro256::from("Wolf");
        let expected = [
            42, 81, 85, 8, 82, 84, 76, 73, 70, 88, 2, 74, 40, 48, 77, 54, 88, 7, 5, 88,
        ];
        for e in expected {
            assert_eq!(rng.next() % 100, e);
        }
    }

    #[test]
    fn test_next_double_in_unit_interval() {
        let mut rng = Xoshiro256::from("unit");
        for _ in 0..10_000 {
            let d = rng.next_double();
            assert!((0.0..1.0).contains(&d));
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Xoshiro256::from(&b"bytes"[..]);
        let mut b = Xoshiro256::from("bytes");
        let mut c = Xoshiro256::from(7_u64);
        let mut d = Xoshiro256::from(7_u64);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
            assert_eq!(c.next_u64(), d.next_u64());
        }
    }
}
