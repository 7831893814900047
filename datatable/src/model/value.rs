//! Value enum for dynamic cell values

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

/// A dynamic value held in a [`Record`](super::Record) field.
///
/// Values are totally ordered so they can drive a table sort:
///
/// | Rank | Variants | Within the rank |
/// |------|----------|-----------------|
/// | 0 | `Bool` | `false < true` |
/// | 1 | `Int`, `Float` | exact numeric, mixed freely; NaN of either sign above every number |
/// | 2 | `String` | lexical (byte order) |
/// | 3 | `Null` | all equal |
///
/// Equality follows the ordering, so `Value::Int(2) == Value::Float(2.0)`,
/// `0.0 == -0.0` and all NaNs are equal to each other.
///
/// # Example
///
/// ```
/// use datatable::model::Value;
///
/// assert!(Value::from(2) < Value::from(2.5));
/// assert!(Value::from("zeta") < Value::Null);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Bool(_) => 0,
            Value::Int(_) | Value::Float(_) => 1,
            Value::String(_) => 2,
            Value::Null => 3,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => cmp_floats(*a, *b),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn cmp_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer with a float.
///
/// Rounding `a` to `f64` is monotonic, so a strict result there is already
/// exact. On a tie `b` is integral and within `i64`'s magnitude, so the
/// comparison is redone in `i128` where both sides are exact.
fn cmp_int_float(a: i64, b: f64) -> Ordering {
    if b.is_nan() {
        return Ordering::Less;
    }
    match (a as f64).partial_cmp(&b) {
        Some(Ordering::Equal) => (a as i128).cmp(&(b as i128)),
        Some(ordering) => ordering,
        None => Ordering::Less,
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_across_variants() {
        assert!(Value::Int(1) < Value::Float(1.5));
        assert!(Value::Float(-0.5) < Value::Int(0));
        assert_eq!(Value::Int(2), Value::Float(2.0));
        assert!(Value::Float(f64::NAN) > Value::Int(i64::MAX));
        assert_eq!(Value::Float(-0.0), Value::Int(0));
        assert_eq!(Value::Float(-0.0), Value::Float(0.0));
    }

    #[test]
    fn test_large_integers_compare_exactly_with_floats() {
        let two_53 = 1_i64 << 53;
        let a = Value::Int(two_53);
        let b = Value::Float(two_53 as f64);
        let c = Value::Int(two_53 + 1);

        // `two_53 + 1` rounds to `b` as a float, but still sorts above it.
        assert_eq!(a, b);
        assert!(b < c);
        assert!(a < c);
        assert!(Value::Float(9.3e18) > Value::Int(i64::MAX));
        assert!(Value::Float(-9.3e18) < Value::Int(i64::MIN));
        assert_eq!(Value::Float(i64::MIN as f64), Value::Int(i64::MIN));
    }

    #[test]
    fn test_nan_of_either_sign_sorts_above_numbers() {
        let negative_nan = Value::Float(-f64::NAN);
        assert!(negative_nan > Value::Float(f64::INFINITY));
        assert!(negative_nan > Value::Int(i64::MAX));
        assert_eq!(negative_nan, Value::Float(f64::NAN));
        assert!(negative_nan < Value::from(""));
    }

    #[test]
    fn test_rank_order() {
        let mut values = vec![
            Value::Null,
            Value::from("a"),
            Value::from(10),
            Value::from(true),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                Value::from(true),
                Value::from(10),
                Value::from("a"),
                Value::Null,
            ]
        );
    }

    #[test]
    fn test_strings_compare_lexically() {
        assert!(Value::from("B") < Value::from("a"));
        assert!(Value::from("apple") < Value::from("banana"));
        assert!(Value::from("10") < Value::from("9"));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
