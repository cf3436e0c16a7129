//! Pool elements whose shape is only known at runtime.
//!
//! Elements arrive as [`serde_json::Value`]s and are either a two-element
//! array `[element, amount]` or an object `{"element": .., "amount": ..}`.
//! Anything else is rejected with a descriptive [`Error`].
//!
//! ```
//! use serde_json::json;
//! use weighted_pool::{Error, Pool};
//!
//! let pool: Pool<String> =
//!     Pool::from_json(json!([["a", 3], {"element": "b", "amount": 1}])).unwrap();
//! assert_eq!(pool.chance_for(&"a".to_string()), 75.0);
//!
//! let err = Pool::<String>::from_json(json!([["a", 1, 2]])).unwrap_err();
//! assert_eq!(err, Error::TupleLength(3));
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::input::{PoolElement, PoolElementObject, DEFAULT_PRECISION};
use crate::pool::Pool;

/// Splits a pair or record into its raw element and amount.
fn split(value: Value) -> Result<PoolElement<Value, Value>, Error> {
    match value {
        Value::Array(items) => {
            let len = items.len();
            let mut items = items.into_iter();
            match (items.next(), items.next(), items.next()) {
                (Some(element), Some(amount), None) => Ok(PoolElement::Tuple(element, amount)),
                _ => Err(Error::TupleLength(len)),
            }
        }
        Value::Object(mut map) => {
            // amount is checked before element
            let amount = map.remove("amount").ok_or(Error::MissingField("amount"))?;
            let element = map.remove("element").ok_or(Error::MissingField("element"))?;
            Ok(PoolElement::Object(PoolElementObject { element, amount }))
        }
        _ => Err(Error::Shape),
    }
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
fn integer_amount(amount: &Value) -> Result<u64, Error> {
    let Value::Number(number) = amount else {
        return Err(Error::NonIntegerWeight);
    };
    if let Some(amount) = number.as_u64() {
        return Ok(amount);
    }
    if number.is_i64() {
        return Err(Error::NegativeWeight);
    }
    match number.as_f64() {
        Some(amount) if amount.is_finite() && amount.fract() == 0.0 => {
            if amount < 0.0 {
                Err(Error::NegativeWeight)
            } else if amount >= u64::MAX as f64 {
                Err(Error::WeightOverflow)
            } else {
                Ok(amount as u64)
            }
        }
        _ => Err(Error::NonIntegerWeight),
    }
}

fn fractional_amount(amount: &Value) -> Result<f64, Error> {
    amount.as_f64().ok_or(Error::NonFiniteWeight)
}

fn element<T: DeserializeOwned>(element: Value) -> Result<T, Error> {
    serde_json::from_value(element).map_err(|e| Error::InvalidElement(e.to_string()))
}

/// Validates a dynamically shaped element whose amount must be an integer.
///
/// Floats without a fractional part, such as `5.0`, count as integers.
///
/// # Errors
///
/// [`Error::Shape`] if `value` is neither an array nor an object,
/// [`Error::TupleLength`] for arrays not holding exactly two items,
/// [`Error::MissingField`] for objects lacking `amount` or `element`,
/// [`Error::NonIntegerWeight`] or [`Error::NegativeWeight`] for a bad amount
/// and [`Error::InvalidElement`] if the element is not a `T`.
pub fn normalize<T: DeserializeOwned>(value: Value) -> Result<PoolElement<T>, Error> {
    Ok(match split(value)? {
        PoolElement::Tuple(e, amount) => {
            let amount = integer_amount(&amount)?;
            PoolElement::Tuple(element(e)?, amount)
        }
        PoolElement::Object(PoolElementObject { element: e, amount }) => {
            let amount = integer_amount(&amount)?;
            PoolElement::Object(PoolElementObject {
                element: element(e)?,
                amount,
            })
        }
    })
}

/// Like [`normalize`], but accepts any number as amount.
///
/// # Errors
///
/// As [`normalize`], except that a non-numeric amount yields
/// [`Error::NonFiniteWeight`] and fractional amounts are accepted.
pub fn normalize_fractional<T: DeserializeOwned>(
    value: Value,
) -> Result<PoolElement<T, f64>, Error> {
    Ok(match split(value)? {
        PoolElement::Tuple(e, amount) => {
            let amount = fractional_amount(&amount)?;
            PoolElement::Tuple(element(e)?, amount)
        }
        PoolElement::Object(PoolElementObject { element: e, amount }) => {
            let amount = fractional_amount(&amount)?;
            PoolElement::Object(PoolElementObject {
                element: element(e)?,
                amount,
            })
        }
    })
}

fn batch(values: Value) -> Result<Vec<Value>, Error> {
    match values {
        Value::Array(items) => Ok(items),
        _ => Err(Error::Shape),
    }
}

fn logged<T>(result: Result<T, Error>) -> Result<T, Error> {
    result.map_err(|e| {
        debug!(error = %e, "rejected pool element");
        e
    })
}

impl<T: DeserializeOwned> Pool<T> {
    /// Creates a pool from a JSON array of elements.
    ///
    /// # Errors
    ///
    /// [`Error::Shape`] if `values` is not an array, otherwise the first
    /// error of [`normalize`] or [`Pool::add`].
    pub fn from_json(values: Value) -> Result<Self, Error> {
        let mut pool = Self::new();
        pool.add_many_json(batch(values)?)?;
        Ok(pool)
    }

    /// Creates a pool from a JSON array of elements with fractional amounts,
    /// keeping [`DEFAULT_PRECISION`] decimal places.
    ///
    /// # Errors
    ///
    /// [`Error::Shape`] if `values` is not an array, otherwise the first
    /// error of [`normalize_fractional`] or [`Pool::float`].
    pub fn float_json(values: Value) -> Result<Self, Error> {
        let elements = batch(values)?
            .into_iter()
            .map(|value| logged(normalize_fractional(value)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::float_with_precision(elements, DEFAULT_PRECISION)
    }

    /// Validates and adds a single element.
    ///
    /// # Errors
    ///
    /// See [`normalize`] and [`Pool::add`]. The pool is unchanged on error.
    pub fn add_json(&mut self, value: Value) -> Result<(), Error> {
        let element = logged(normalize(value))?;
        self.add(element)
    }

    /// Validates and adds elements in order, stopping at the first invalid
    /// one. Elements before it stay in the pool.
    ///
    /// # Errors
    ///
    /// The first error of [`add_json`](Self::add_json).
    pub fn add_many_json<I: IntoIterator<Item = Value>>(&mut self, values: I) -> Result<(), Error> {
        for value in values {
            self.add_json(value)?;
        }
        Ok(())
    }
}
