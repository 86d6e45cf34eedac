//! Variadic summation with input validation.
//!
//! [`sum`] folds any non-empty sequence of numbers left to right, seeded by
//! the first element, and reports integer overflow instead of wrapping.
//! [`sum_arguments`] and [`sum_values`] do the same for dynamically typed
//! arguments and reject anything that is not a number. The [`sum!`] and
//! [`sum_dyn!`] macros give both a variadic call syntax.
//!
//! ```
//! use sum::{sum, sum_dyn, SumError};
//!
//! assert_eq!(sum!(2, 3, 4), Ok(9));
//! assert_eq!(sum!(20.5, 18.5), Ok(39.0));
//! assert_eq!(sum!(), Err(SumError::EmptyArguments));
//! assert!(matches!(
//!     sum_dyn!(true, false),
//!     Err(SumError::InvalidArgumentType { index: 0, .. })
//! ));
//! assert_eq!(sum!(i32::MAX, 1), Err(SumError::Overflow { index: 1 }));
//! ```

mod dynamic;
mod error;
mod summand;

pub use dynamic::{sum_arguments, sum_values, Argument};
pub use error::SumError;
pub use serde_json::Value;
pub use summand::Summand;

/// Sum `values` left to right.
///
/// Integer sums that don't fit in `T` fail with [`SumError::Overflow`],
/// naming the argument whose addition overflowed. Floats round as IEEE
/// addition does.
pub fn sum<I, T>(values: I) -> Result<T, SumError>
where
    I: IntoIterator<Item = T>,
    T: Summand,
{
    let mut values = values.into_iter();
    let Some(first) = values.next() else {
        tracing::debug!("rejecting empty argument list");
        return Err(SumError::EmptyArguments);
    };

    let mut count = 1usize;
    let total = values.try_fold(first, |acc, value| {
        let index = count;
        count += 1;
        acc.add_exact(value).ok_or_else(|| {
            tracing::debug!(index, "sum overflowed");
            SumError::Overflow { index }
        })
    })?;
    tracing::trace!(count, "summed arguments");

    Ok(total)
}

/// Variadic form of [`sum`].
///
/// `sum!()` is typed as `f64` and always fails with
/// [`SumError::EmptyArguments`].
#[macro_export]
macro_rules! sum {
    () => {
        $crate::sum(::core::iter::empty::<f64>())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::sum([$($value),+])
    };
}

/// Variadic form of [`sum_arguments`]. Each argument is converted with
/// `Argument::from`, so any primitive number (NaN and infinities included),
/// `bool`, string, `()` (a missing value) or [`Value`] can be passed.
#[macro_export]
macro_rules! sum_dyn {
    () => {
        $crate::sum_arguments(&[])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::sum_arguments(&[$($crate::Argument::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_is_returned_unchanged() {
        assert_eq!(sum([-1]), Ok(-1));
        assert_eq!(sum([7u8]), Ok(7));
    }

    #[test]
    fn folds_left_to_right() {
        // Each 1.0 is lost to rounding against 1e16; summed first they'd survive.
        assert_eq!(sum([1e16, 1.0, 1.0]), Ok(1e16));
        assert_eq!(sum([1.0, 1.0, 1e16]), Ok(1e16 + 2.0));
    }

    #[test]
    fn overflow_names_the_argument() {
        assert_eq!(sum!(i32::MAX, 1), Err(SumError::Overflow { index: 1 }));
        assert_eq!(sum([1u8, 2, 255, 0]), Err(SumError::Overflow { index: 2 }));
        assert_eq!(sum!(i64::MIN, -1), Err(SumError::Overflow { index: 1 }));
    }

    #[test]
    fn overflow_is_checked_per_step() {
        // Intermediate overflow fails even when later terms would bring it back.
        assert_eq!(sum!(i8::MAX, 1, -1), Err(SumError::Overflow { index: 1 }));
        assert_eq!(sum!(i8::MAX, -1, 1), Ok(i8::MAX));
    }

    #[test]
    fn empty_iterator() {
        assert_eq!(sum(Vec::<i64>::new()), Err(SumError::EmptyArguments));
    }

    #[test]
    fn macro_trailing_comma() {
        assert_eq!(sum!(1, 2,), Ok(3));
    }
}
