//! Summing dynamically typed arguments.
//!
//! Arguments are [`Argument`]s: either a plain `f64` or any
//! [`serde_json::Value`]. Only numbers are accepted. NaN and the infinities
//! are numbers too and flow through the sum as IEEE arithmetic dictates.
//! Booleans are rejected even though some languages coerce them to 0/1.

use serde_json::{Number, Value};

use crate::{sum, SumError};

/// One dynamically typed argument.
///
/// `Value` cannot hold NaN or ±infinity, so non-finite floats are carried as
/// [`Argument::Number`] rather than collapsing to `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Number(f64),
    Json(Value),
}

macro_rules! number_argument {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Argument {
                fn from(n: $ty) -> Self {
                    Argument::Number(n as f64)
                }
            }
        )*
    };
}

number_argument!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! json_argument {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Argument {
                fn from(v: $ty) -> Self {
                    Argument::Json(Value::from(v))
                }
            }
        )*
    };
}

json_argument!(bool, &str, String, ());

impl From<Value> for Argument {
    fn from(v: Value) -> Self {
        Argument::Json(v)
    }
}

/// Sum dynamically typed arguments as `f64`.
///
/// Every element is checked before any addition, and the first non-number
/// is reported. Integers wider than 2^53 lose precision on the way to
/// `f64`.
pub fn sum_arguments(args: &[Argument]) -> Result<f64, SumError> {
    let numbers = args
        .iter()
        .enumerate()
        .map(|(index, arg)| match arg {
            Argument::Number(n) => Ok(*n),
            Argument::Json(value) => as_number(index, value),
        })
        .collect::<Result<Vec<f64>, _>>()?;

    sum(numbers)
}

/// [`sum_arguments`] over plain JSON values, e.g. the elements of a parsed
/// array.
pub fn sum_values(values: &[Value]) -> Result<f64, SumError> {
    let numbers = values
        .iter()
        .enumerate()
        .map(|(index, value)| as_number(index, value))
        .collect::<Result<Vec<f64>, _>>()?;

    sum(numbers)
}

fn as_number(index: usize, value: &Value) -> Result<f64, SumError> {
    match value {
        Value::Number(n) => Ok(widen(n)),
        other => {
            let found = kind(other);
            tracing::debug!(index, found, "rejecting non-numeric argument");
            Err(SumError::InvalidArgumentType { index, found })
        }
    }
}

// `as_f64` is only `None` for out-of-range numbers under serde_json's
// `arbitrary_precision`; parsing the literal saturates those to ±infinity.
fn widen(n: &Number) -> f64 {
    n.as_f64()
        .or_else(|| n.to_string().parse().ok())
        .unwrap_or(f64::NAN)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
