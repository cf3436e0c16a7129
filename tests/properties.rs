//! Property tests for the slot layout of a pool.
//!
//! 1. Cumulative bounds never decrease and end at the total weight
//! 2. Every slot resolves to exactly one element, intervals tile the slots
//! 3. `get` is defined exactly on `[0, len)`
//! 4. Chances add up to 100 percent

use proptest::prelude::*;
use weighted_pool::{xoshiro::Xoshiro256, Error, Pool};

fn arb_weights() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(prop_oneof![Just(0_u64), 1..20_u64], 0..40)
}

fn pool_of(weights: &[u64]) -> Pool<usize> {
    Pool::from_elements(weights.iter().copied().enumerate()).unwrap()
}

proptest! {
    #[test]
    fn bounds_are_monotonic(weights in arb_weights()) {
        let pool = pool_of(&weights);
        let mut previous = 0;
        for (index, weight) in weights.iter().enumerate() {
            let bounds = pool.bounds(index).unwrap();
            prop_assert_eq!(bounds.start, previous);
            prop_assert_eq!(bounds.end - bounds.start, *weight);
            previous = bounds.end;
        }
        prop_assert_eq!(previous, pool.len());
        prop_assert_eq!(pool.len(), weights.iter().sum::<u64>());
        prop_assert_eq!(pool.element_count(), weights.len());
    }

    #[test]
    fn slots_are_covered_once(weights in arb_weights()) {
        let pool = pool_of(&weights);
        let expected: Vec<usize> = weights
            .iter()
            .enumerate()
            .flat_map(|(i, &w)| std::iter::repeat(i).take(w as usize))
            .collect();
        let located: Vec<usize> = (0..pool.len()).map(|slot| pool.locate(slot).unwrap()).collect();
        prop_assert_eq!(&located, &expected);
        let iterated: Vec<usize> = pool.iter().copied().collect();
        prop_assert_eq!(&iterated, &expected);
        prop_assert_eq!(
            pool.locate(pool.len()),
            Err(Error::OutOfRange { slot: pool.len(), bound: pool.len() })
        );
    }

    #[test]
    fn get_is_defined_on_slots_only(weights in arb_weights(), beyond in 0..1000_u64) {
        let pool = pool_of(&weights);
        for slot in 0..pool.len() {
            prop_assert!(pool.get(slot).is_some());
        }
        prop_assert_eq!(pool.get(pool.len() + beyond), None);
    }

    #[test]
    fn chances_sum_to_one_hundred(weights in arb_weights()) {
        let pool = pool_of(&weights);
        let sum: f64 = (0..pool.element_count()).map(|i| pool.chance_for_at(i)).sum();
        if pool.is_empty() {
            prop_assert_eq!(sum, 0.0);
        } else {
            prop_assert!((sum - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn picks_land_on_weighted_elements(weights in arb_weights(), seed in any::<u64>()) {
        let pool = pool_of(&weights);
        let mut rng = Xoshiro256::from(seed);
        for _ in 0..50 {
            match pool.pick_with(&mut rng) {
                Some(&index) => prop_assert!(weights[index] > 0),
                None => prop_assert!(pool.is_empty()),
            }
        }
    }

    #[test]
    fn incremental_adds_match_batch(weights in arb_weights()) {
        let mut pool = Pool::new();
        for (index, weight) in weights.iter().enumerate() {
            pool.add((index, *weight)).unwrap();
        }
        prop_assert_eq!(pool, pool_of(&weights));
    }
}
