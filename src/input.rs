//! The two equivalent forms a pool element can be supplied in.
//!
//! An element is either an ordered pair of element and amount, or a record
//! with named `element` and `amount` fields. Both convert into
//! [`PoolElement`], so any API taking `impl Into<PoolElement<T>>` accepts
//! either:
//!
//! ```
//! use weighted_pool::{Pool, PoolElementObject};
//! let mut pool = Pool::new();
//! pool.add(("tuple", 3)).unwrap();
//! pool.add(PoolElementObject { element: "object", amount: 1 }).unwrap();
//! assert_eq!(pool.len(), 4);
//! ```

use crate::error::Error;

/// Number of decimal places kept by [`Pool::float`](crate::Pool::float).
pub const DEFAULT_PRECISION: u32 = 4;

/// Largest precision accepted by
/// [`Pool::float_with_precision`](crate::Pool::float_with_precision).
pub const MAX_PRECISION: u32 = 9;

/// A pool element in record form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolElementObject<T, W = u64> {
    /// Element to be added to the pool.
    pub element: T,
    /// How many slots the element occupies.
    pub amount: W,
}

/// A pool element in either of its two accepted forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolElement<T, W = u64> {
    /// Element followed by its amount.
    Tuple(T, W),
    /// Named `element` and `amount` fields.
    Object(PoolElementObject<T, W>),
}

impl<T, W> PoolElement<T, W> {
    /// Splits the element into its value and its amount.
    pub fn into_parts(self) -> (T, W) {
        match self {
            Self::Tuple(element, amount) => (element, amount),
            Self::Object(PoolElementObject { element, amount }) => (element, amount),
        }
    }
}

impl<T, W> From<(T, W)> for PoolElement<T, W> {
    fn from((element, amount): (T, W)) -> Self {
        Self::Tuple(element, amount)
    }
}

impl<T, W> From<PoolElementObject<T, W>> for PoolElement<T, W> {
    fn from(object: PoolElementObject<T, W>) -> Self {
        Self::Object(object)
    }
}

/// Turns a fractional amount into an integer weight by shifting it
/// `decimals` places to the left and truncating toward zero.
///
/// Digits beyond `decimals` are dropped, not rounded: with four decimals both
/// `0.12345` and `0.12349` become `1234`.
///
/// ```
/// use weighted_pool::input::scale_weight;
/// assert_eq!(scale_weight(0.12345, 4).unwrap(), 1234);
/// assert_eq!(scale_weight(0.1239, 4).unwrap(), 1239);
/// ```
///
/// # Errors
///
/// Fails if `decimals` exceeds [`MAX_PRECISION`], if `amount` is negative or
/// not finite, or if the scaled value does not fit into a `u64`.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn scale_weight(amount: f64, decimals: u32) -> Result<u64, Error> {
    if decimals > MAX_PRECISION {
        return Err(Error::Precision(decimals));
    }
    if !amount.is_finite() {
        return Err(Error::NonFiniteWeight);
    }
    if amount < 0.0 {
        return Err(Error::NegativeWeight);
    }
    let scaled = amount * 10_u64.pow(decimals) as f64;
    // u64::MAX rounds up to 2^64 as f64
    if scaled >= u64::MAX as f64 {
        return Err(Error::WeightOverflow);
    }
    Ok(scaled as u64)
}
