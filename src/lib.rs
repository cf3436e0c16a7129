//! `weighted_pool` picks random elements according to integer weights.
//!
//! Every element owns as many consecutive slots as its weight. A pick draws a
//! slot uniformly and finds its owner with a binary search over the
//! cumulative weights, so picking is `O(log n)` in the number of elements.
//!
//! # Build a pool and pick from it
//! ```
//! use weighted_pool::Pool;
//! let pool = Pool::from_elements([("common", 90), ("rare", 9), ("epic", 1)]).unwrap();
//! assert_eq!(pool.len(), 100);
//! assert_eq!(pool.chance_for(&"rare"), 9.0);
//! let picked = pool.pick().unwrap();
//! assert!(["common", "rare", "epic"].contains(picked));
//! ```
//!
//! # Reproducible picks
//!
//! Any [`rand_core::RngCore`](rand_xoshiro::rand_core::RngCore) can drive
//! [`Pool::pick_with`]; [`xoshiro::Xoshiro256`] is seeded from a string.
//! ```
//! use weighted_pool::{xoshiro::Xoshiro256, Pool};
//! let pool = Pool::equal(["heads", "tails"]);
//! let mut rng = Xoshiro256::from("coin");
//! let flips: Vec<_> = (0..4).map(|_| *pool.pick_with(&mut rng).unwrap()).collect();
//! assert_eq!(flips.len(), 4);
//! ```
//!
//! # Slots
//!
//! Slots can be addressed directly. Iterating a pool walks over all of them,
//! so every element shows up as often as its weight.
//! ```
//! use weighted_pool::Pool;
//! let mut pool = Pool::new();
//! pool.add(("a", 2)).unwrap();
//! pool.add_many([("b", 0), ("c", 1)]).unwrap();
//! assert_eq!(pool.get(1), Some(&"a"));
//! assert_eq!(pool.get(2), Some(&"c"));
//! assert_eq!(pool.get(3), None);
//! assert_eq!(pool.iter().collect::<Vec<_>>(), [&"a", &"a", &"c"]);
//! ```
//!
//! # Fractional weights
//!
//! Weights with up to four decimal places are scaled to integers. Further
//! digits are truncated.
//! ```
//! use weighted_pool::Pool;
//! let pool = Pool::float([("x", 0.25), ("y", 0.75)]).unwrap();
//! assert_eq!(pool.len(), 10_000);
//! assert_eq!(pool.chance_for(&"y"), 75.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod input;
#[cfg(feature = "json")]
pub mod json;
pub mod pool;
mod ranges;
mod sampler;
pub mod xoshiro;

pub use self::error::Error;
pub use self::input::{PoolElement, PoolElementObject};
pub use self::pool::{Chance, Iter, Pool};
