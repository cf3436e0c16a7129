use alloc::string::String;

/// Errors returned when building or mutating a [`Pool`](crate::Pool).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is neither an ordered pair nor a record.
    Shape,
    /// An ordered pair does not have exactly two slots.
    TupleLength(usize),
    /// A record lacks one of its two required fields.
    MissingField(&'static str),
    /// The weight must be an integer.
    NonIntegerWeight,
    /// The weight is below zero.
    NegativeWeight,
    /// The weight is NaN, infinite or not a number at all.
    NonFiniteWeight,
    /// The element could not be converted into the pool's element type.
    InvalidElement(String),
    /// Unsupported number of decimal digits for fractional weights.
    Precision(u32),
    /// The total weight would no longer fit into a `u64`.
    WeightOverflow,
    /// A slot lookup outside of `[0, bound)`.
    OutOfRange { slot: u64, bound: u64 },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Shape => write!(f, "only arrays and objects allowed"),
            Self::TupleLength(len) => {
                write!(f, "pool element tuple should have length 2, got {len}")
            }
            Self::MissingField(field) => write!(f, "pool element object missing key: {field}"),
            Self::NonIntegerWeight => write!(f, "amount should be an integer"),
            Self::NegativeWeight => write!(f, "amount should not be negative"),
            Self::NonFiniteWeight => write!(f, "amount should be a finite number"),
            Self::InvalidElement(e) => write!(f, "invalid element: {e}"),
            Self::Precision(decimals) => write!(
                f,
                "precision of {decimals} decimal places exceeds the maximum of {}",
                crate::input::MAX_PRECISION
            ),
            Self::WeightOverflow => write!(f, "total weight overflow"),
            Self::OutOfRange { slot, bound } => {
                write!(f, "slot {slot} should be between 0 and {bound}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_messages() {
        assert_eq!(Error::Shape.to_string(), "only arrays and objects allowed");
        assert_eq!(
            Error::TupleLength(3).to_string(),
            "pool element tuple should have length 2, got 3"
        );
        assert_eq!(
            Error::MissingField("amount").to_string(),
            "pool element object missing key: amount"
        );
        assert_eq!(
            Error::OutOfRange { slot: 7, bound: 5 }.to_string(),
            "slot 7 should be between 0 and 5"
        );
        assert_eq!(
            Error::Precision(12).to_string(),
            "precision of 12 decimal places exceeds the maximum of 9"
        );
    }
}
