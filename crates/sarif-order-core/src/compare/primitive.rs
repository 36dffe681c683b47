//! Comparers for leaf values.

use super::container::{ListComparer, MapComparer};
use super::identity::reference_compares;
use super::Comparer;
use crate::model::{present_index, present_rank, Uri};
use serde_json::Value;
use std::cmp::Ordering;

/// Byte-wise ordinal string order.
///
/// Never locale-aware, so `"ESLint" < "Eslint"` on every machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordinal;

impl Comparer<str> for Ordinal {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        left.as_bytes().cmp(right.as_bytes())
    }
}

impl Comparer<String> for Ordinal {
    fn compare(&self, left: &String, right: &String) -> Ordering {
        Comparer::<str>::compare(self, left, right)
    }
}

/// Natural order of any `Ord` scalar: integers, `false < true`, and enums by
/// declaration ordinal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord> Comparer<T> for Natural {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// IEEE 754 total order for `f64` (`-0.0 < +0.0`, NaN sorts last).
#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

impl Comparer<f64> for Float {
    fn compare(&self, left: &f64, right: &f64) -> Ordering {
        left.total_cmp(right)
    }
}

/// Order for optional SARIF indexes and offsets.
///
/// The `-1` sentinel is the same as absent, and absent sorts first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Index;

impl Comparer<Option<i64>> for Index {
    fn compare(&self, left: &Option<i64>, right: &Option<i64>) -> Ordering {
        present_index(*left).cmp(&present_index(*right))
    }
}

/// Order for an optional `rank`: `-1.0` is absent, the rest by [`Float`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Rank;

impl Comparer<Option<f64>> for Rank {
    fn compare(&self, left: &Option<f64>, right: &Option<f64>) -> Ordering {
        match (present_rank(*left), present_rank(*right)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(l), Some(r)) => Float.compare(&l, &r),
        }
    }
}

/// Literal text order for URIs; no normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriText;

impl Comparer<Uri> for UriText {
    fn compare(&self, left: &Uri, right: &Uri) -> Ordering {
        Ordinal.compare(left.as_str(), right.as_str())
    }
}

/// Order for free-form JSON property values.
///
/// `null < bool < number < string < array < object`. Numbers compare by
/// value, then by their serialized text so that `1` and `1.0` stay distinct.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonValue;

fn json_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_numbers(left: &serde_json::Number, right: &serde_json::Number) -> Ordering {
    let by_value = match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) => l.total_cmp(&r),
        _ => Ordering::Equal,
    };
    by_value.then_with(|| Ordinal.compare(left.to_string().as_str(), right.to_string().as_str()))
}

impl Comparer<Value> for JsonValue {
    fn compare(&self, left: &Value, right: &Value) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        match (left, right) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
            (Value::Number(l), Value::Number(r)) => compare_numbers(l, r),
            (Value::String(l), Value::String(r)) => Ordinal.compare(l, r),
            (Value::Array(l), Value::Array(r)) => ListComparer(JsonValue).compare(l, r),
            (Value::Object(l), Value::Object(r)) => MapComparer(JsonValue).compare(l, r),
            _ => json_rank(left).cmp(&json_rank(right)),
        }
    }
}
