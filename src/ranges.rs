//! Cumulative weight ranges and the binary search resolving a slot to the
//! element owning it.
//!
//! Each element occupies a contiguous, half-open interval of slots. The
//! intervals are laid out in insertion order, so the exclusive upper bound of
//! element `i` is the sum of the weights of elements `0..=i`. A weight of zero
//! produces an empty interval which no slot resolves to.

use core::ops::Range;

use crate::error::Error;

/// An element together with the exclusive upper bound of its slot interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bucket<T> {
    pub(crate) element: T,
    pub(crate) end: u64,
}

/// First slot owned by the bucket at `index`.
fn start<T>(buckets: &[Bucket<T>], index: usize) -> u64 {
    match index.checked_sub(1) {
        Some(previous) => buckets[previous].end,
        None => 0,
    }
}

/// Slot interval owned by the bucket at `index`, if there is one.
pub(crate) fn bounds<T>(buckets: &[Bucket<T>], index: usize) -> Option<Range<u64>> {
    let end = buckets.get(index)?.end;
    Some(start(buckets, index)..end)
}

/// Finds the index of the bucket whose interval contains `slot`.
///
/// `total` is the overall number of slots and must equal the `end` of the
/// last bucket (or zero when there are none).
pub(crate) fn locate<T>(buckets: &[Bucket<T>], total: u64, slot: u64) -> Result<usize, Error> {
    if slot >= total {
        return Err(Error::OutOfRange { slot, bound: total });
    }

    let mut low = 0;
    let mut high = buckets.len();
    while low < high {
        let middle = low + (high - low) / 2;
        let from = start(buckets, middle);
        let to = buckets[middle].end;

        if slot < from {
            high = middle;
        } else if slot >= to {
            low = middle + 1;
        } else {
            return Ok(middle);
        }
    }

    // only reachable if the buckets disagree with `total`
    Err(Error::OutOfRange { slot, bound: total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn build(weights: &[u64]) -> (Vec<Bucket<usize>>, u64) {
        let mut total = 0;
        let buckets = weights
            .iter()
            .enumerate()
            .map(|(element, weight)| {
                total += weight;
                Bucket {
                    element,
                    end: total,
                }
            })
            .collect();
        (buckets, total)
    }

    #[test]
    fn test_locate_every_slot() {
        let (buckets, total) = build(&[3, 1, 4, 1, 5]);
        let expected = [0, 0, 0, 1, 2, 2, 2, 2, 3, 4, 4, 4, 4, 4];
        assert_eq!(total, expected.len() as u64);
        for (slot, index) in expected.iter().enumerate() {
            assert_eq!(locate(&buckets, total, slot as u64).unwrap(), *index);
        }
    }

    #[test]
    fn test_locate_skips_zero_weights() {
        let (buckets, total) = build(&[0, 2, 0, 0, 1, 0]);
        assert_eq!(total, 3);
        assert_eq!(locate(&buckets, total, 0).unwrap(), 1);
        assert_eq!(locate(&buckets, total, 1).unwrap(), 1);
        assert_eq!(locate(&buckets, total, 2).unwrap(), 4);
        assert!(locate(&buckets, total, 3).is_err());
    }

    #[test]
    fn test_locate_single_bucket() {
        let (buckets, total) = build(&[5]);
        for slot in 0..5 {
            assert_eq!(locate(&buckets, total, slot).unwrap(), 0);
        }
    }

    #[test]
    fn test_locate_out_of_range() {
        let (buckets, total) = build(&[2, 2]);
        assert_eq!(
            locate(&buckets, total, 4),
            Err(Error::OutOfRange { slot: 4, bound: 4 })
        );
        assert_eq!(
            locate(&buckets, total, u64::MAX),
            Err(Error::OutOfRange {
                slot: u64::MAX,
                bound: 4
            })
        );
        let (empty, zero) = build(&[]);
        assert_eq!(
            locate(&empty, zero, 0),
            Err(Error::OutOfRange { slot: 0, bound: 0 })
        );
        let (only_zero, zero) = build(&[0, 0]);
        assert!(locate(&only_zero, zero, 0).is_err());
    }

    #[test]
    fn test_locate_inconsistent_total() {
        let (buckets, _) = build(&[1, 1]);
        assert_eq!(
            locate(&buckets, 10, 5),
            Err(Error::OutOfRange { slot: 5, bound: 10 })
        );
    }

    #[test]
    fn test_bounds() {
        let (buckets, _) = build(&[2, 0, 3]);
        assert_eq!(bounds(&buckets, 0), Some(0..2));
        assert_eq!(bounds(&buckets, 1), Some(2..2));
        assert_eq!(bounds(&buckets, 2), Some(2..5));
        assert_eq!(bounds(&buckets, 3), None);
    }
}
