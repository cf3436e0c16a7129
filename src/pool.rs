use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::Range;

use tracing::{debug, trace};

use crate::error::Error;
use crate::input::{scale_weight, PoolElement, DEFAULT_PRECISION};
use crate::ranges::{self, Bucket};

/// A growable collection of weighted elements.
///
/// Every element owns `weight` consecutive slots out of [`len`](Self::len)
/// slots in total, in insertion order. Picking draws one slot uniformly, so an
/// element is picked with probability `weight / len()`. Elements can only be
/// added, never removed, and equal elements are not merged.
///
/// Mutation needs `&mut self`, so a pool shared between threads must be
/// guarded externally; concurrent reads are fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool<T> {
    total: u64,
    buckets: Vec<Bucket<T>>,
}

/// An element and its share of the pool in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chance<E> {
    /// The element, borrowed from the pool.
    pub element: E,
    /// Chance of picking it, between 0 and 100.
    pub percentage: f64,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self {
            total: 0,
            buckets: Vec::new(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(weight: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    weight as f64 / total as f64 * 100.0
}

impl<T> Pool<T> {
    /// Creates a pool without any elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pool from elements in tuple or record form.
    ///
    /// # Errors
    ///
    /// Fails if the weights sum up to more than `u64::MAX`.
    pub fn from_elements<I, E>(elements: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = E>,
        E: Into<PoolElement<T>>,
    {
        let mut pool = Self::new();
        pool.add_many(elements)?;
        Ok(pool)
    }

    /// Creates a pool in which every element has the same chance.
    #[must_use]
    pub fn equal<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let buckets: Vec<Bucket<T>> = elements
            .into_iter()
            .zip(1..)
            .map(|(element, end)| Bucket { element, end })
            .collect();
        let total = buckets.last().map_or(0, |b| b.end);
        trace!(total, "created pool of equal weights");
        Self { total, buckets }
    }

    /// Creates a pool from fractional weights, keeping
    /// [`DEFAULT_PRECISION`] decimal places.
    ///
    /// See [`scale_weight`](crate::input::scale_weight) for how weights are
    /// truncated.
    ///
    /// # Errors
    ///
    /// Fails on negative or non-finite weights and on overflow of the total.
    /// Nothing is returned on failure; the pool under construction is
    /// dropped.
    pub fn float<I, E>(elements: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = E>,
        E: Into<PoolElement<T, f64>>,
    {
        Self::float_with_precision(elements, DEFAULT_PRECISION)
    }

    /// Like [`float`](Self::float) with a custom number of decimal places.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`float`](Self::float), fails if
    /// `decimals` exceeds [`MAX_PRECISION`](crate::input::MAX_PRECISION).
    pub fn float_with_precision<I, E>(elements: I, decimals: u32) -> Result<Self, Error>
    where
        I: IntoIterator<Item = E>,
        E: Into<PoolElement<T, f64>>,
    {
        let mut pool = Self::new();
        for element in elements {
            let (element, amount) = element.into().into_parts();
            let weight = scale_weight(amount, decimals).map_err(|e| {
                debug!(amount, decimals, error = %e, "rejected fractional weight");
                e
            })?;
            pool.push(element, weight)?;
        }
        Ok(pool)
    }

    /// Adds a single element.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::WeightOverflow`] if the total weight would exceed
    /// `u64::MAX`, in which case the pool is left unchanged.
    pub fn add(&mut self, element: impl Into<PoolElement<T>>) -> Result<(), Error> {
        let (element, amount) = element.into().into_parts();
        self.push(element, amount)
    }

    /// Adds elements in order.
    ///
    /// This is not atomic: elements preceding a failing one stay in the
    /// pool, the remaining ones are not added.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`add`](Self::add).
    pub fn add_many<I, E>(&mut self, elements: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = E>,
        E: Into<PoolElement<T>>,
    {
        for element in elements {
            self.add(element)?;
        }
        Ok(())
    }

    pub(crate) fn push(&mut self, element: T, weight: u64) -> Result<(), Error> {
        let end = self.total.checked_add(weight).ok_or_else(|| {
            debug!(weight, total = self.total, "rejected weight, total would overflow");
            Error::WeightOverflow
        })?;
        self.total = end;
        self.buckets.push(Bucket { element, end });
        trace!(weight, total = end, elements = self.buckets.len(), "added element");
        Ok(())
    }

    /// Total weight, i.e. the number of slots.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.total
    }

    /// `true` if there is nothing to pick, which includes pools holding only
    /// zero-weight elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of added elements, regardless of their weights.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.buckets.len()
    }

    /// Element owning `slot`, or `None` if `slot >= len()`.
    #[must_use]
    pub fn get(&self, slot: u64) -> Option<&T> {
        let index = self.locate(slot).ok()?;
        Some(&self.buckets[index].element)
    }

    /// Index of the element owning `slot`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `slot >= len()`.
    pub fn locate(&self, slot: u64) -> Result<usize, Error> {
        ranges::locate(&self.buckets, self.total, slot)
    }

    /// Slots owned by the element at `index`. Empty for zero weights.
    #[must_use]
    pub fn bounds(&self, index: usize) -> Option<Range<u64>> {
        ranges::bounds(&self.buckets, index)
    }

    /// Weight of the element at `index`.
    #[must_use]
    pub fn weight_at(&self, index: usize) -> Option<u64> {
        self.bounds(index).map(|r| r.end - r.start)
    }

    /// Chance in percent of picking the element at `index`; 0 if there is no
    /// such element.
    #[must_use]
    pub fn chance_for_at(&self, index: usize) -> f64 {
        self.weight_at(index)
            .map_or(0.0, |weight| percentage(weight, self.total))
    }

    /// Copy of the elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buckets.iter().map(|b| b.element.clone()).collect()
    }

    /// Iterates over every slot, yielding each element as many times as its
    /// weight.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buckets: &self.buckets,
            total: self.total,
            slot: 0,
            index: 0,
        }
    }
}

impl<T: PartialEq> Pool<T> {
    /// Chance in percent of picking `element`, or 0 if it is not in the pool.
    ///
    /// Only the first equal element is considered. If `element` was added
    /// more than once, its actual chance is [`total_chance_for`](Self::total_chance_for).
    #[must_use]
    pub fn chance_for(&self, element: &T) -> f64 {
        self.buckets
            .iter()
            .position(|b| b.element == *element)
            .map_or(0.0, |index| self.chance_for_at(index))
    }

    /// Chance in percent of picking any element equal to `element`.
    #[must_use]
    pub fn total_chance_for(&self, element: &T) -> f64 {
        let weight = (0..self.buckets.len())
            .filter(|&index| self.buckets[index].element == *element)
            .filter_map(|index| self.weight_at(index))
            .sum();
        percentage(weight, self.total)
    }

    /// Every element with its [`chance_for`](Self::chance_for), in insertion
    /// order.
    #[must_use]
    pub fn pool(&self) -> Vec<Chance<&T>> {
        self.buckets
            .iter()
            .map(|b| Chance {
                element: &b.element,
                percentage: self.chance_for(&b.element),
            })
            .collect()
    }
}

/// Iterator over the slots of a [`Pool`], created by [`Pool::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    buckets: &'a [Bucket<T>],
    total: u64,
    slot: u64,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slot >= self.total {
            return None;
        }
        while self.buckets[self.index].end <= self.slot {
            self.index += 1;
        }
        self.slot += 1;
        Some(&self.buckets[self.index].element)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let Some(slot) = self.slot.checked_add(n as u64) else {
            self.slot = self.total;
            return None;
        };
        match ranges::locate(self.buckets, self.total, slot) {
            Ok(index) => {
                self.index = index;
                self.slot = slot + 1;
                Some(&self.buckets[index].element)
            }
            Err(_) => {
                self.slot = self.total;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.slot;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
