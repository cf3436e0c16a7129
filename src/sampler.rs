use rand_xoshiro::rand_core::RngCore;

use crate::pool::Pool;

/// Uniform float in `[0, 1)` built from the top 53 bits of a random word.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn next_double<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

/// Draws a slot uniformly from `[0, total)`, or `None` if there are no slots.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub(crate) fn draw_slot<R: RngCore + ?Sized>(rng: &mut R, total: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    let slot = (next_double(rng) * total as f64) as u64;
    // rounding can land on `total` once it exceeds 2^53
    Some(slot.min(total - 1))
}

impl<T> Pool<T> {
    /// Picks a random element using the thread-local generator.
    ///
    /// Returns `None` only for a pool without any slots.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn pick(&self) -> Option<&T> {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Picks a random element using the given generator.
    ///
    /// Each element is returned with probability `weight / len()`.
    pub fn pick_with<R: RngCore + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.get(draw_slot(rng, self.len())?)
    }
}
