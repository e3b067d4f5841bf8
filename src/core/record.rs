//! Wire records and the coercion rules used by every `from_record`.
//!
//! The upstream API is loosely typed and has renamed fields over time, so
//! reading is lenient: the first alias holding a non-null value wins, and a
//! value of the wrong shape falls back to the field default.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// A JSON object as sent to or received from the API.
pub type Record = Map<String, Value>;

/// First non-null value among `keys`, in priority order.
pub(crate) fn first<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| record.get(*k))
        .find(|v| !v.is_null())
}

/// Numeric value of a JSON number or numeric string.
pub(crate) fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

/// Integer value, truncating fractional numbers toward zero.
pub(crate) fn as_int(value: &Value) -> Option<i64> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Some(i);
        }
    }
    as_decimal(value).and_then(|d| d.trunc().to_i64())
}

pub(crate) fn decimal_or_zero(record: &Record, keys: &[&str]) -> Decimal {
    first(record, keys)
        .and_then(as_decimal)
        .unwrap_or(Decimal::ZERO)
}

pub(crate) fn opt_decimal(record: &Record, keys: &[&str]) -> Option<Decimal> {
    first(record, keys).and_then(as_decimal)
}

pub(crate) fn opt_int(record: &Record, keys: &[&str]) -> Option<i64> {
    first(record, keys).and_then(as_int)
}

/// String value or `""`.
pub(crate) fn text(record: &Record, keys: &[&str]) -> String {
    opt_text(record, keys).unwrap_or_default()
}

pub(crate) fn opt_text(record: &Record, keys: &[&str]) -> Option<String> {
    first(record, keys)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Like [`opt_text`] but treats `""` as absent.
pub(crate) fn non_empty_text(record: &Record, keys: &[&str]) -> Option<String> {
    opt_text(record, keys).filter(|s| !s.is_empty())
}

/// Loose truthiness of a JSON value.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

pub(crate) fn flag(record: &Record, keys: &[&str]) -> bool {
    first(record, keys).is_some_and(truthy)
}

/// Sub-record at `key`, or an empty record when absent or not an object.
pub(crate) fn object(record: &Record, key: &str) -> Record {
    record
        .get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Object entries of the array at `key`; non-object entries are skipped.
pub(crate) fn objects<'a>(record: &'a Record, key: &str) -> impl Iterator<Item = &'a Record> {
    record
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

/// Round half away from zero, the upstream's rounding.
pub fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn to_float(value: Decimal) -> Option<f64> {
    value.to_string().parse::<f64>().ok()
}

/// JSON float for a decimal, rounded to `dp` places.
pub(crate) fn number(value: Decimal, dp: u32) -> Value {
    float(round(value, dp))
}

/// JSON float for a decimal as is.
pub(crate) fn float(value: Decimal) -> Value {
    to_float(value)
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

/// Serialize a model into a record.
pub(crate) fn to_record<T: Serialize>(value: &T) -> Record {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Record::new(),
    }
}

/// `serialize_with` helpers writing decimals as JSON floats.
pub(crate) mod ser {
    use rust_decimal::Decimal;
    use serde::Serializer;

    fn emit<S: Serializer>(value: Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        match super::to_float(value) {
            Some(f) => serializer.serialize_f64(f),
            None => serializer.serialize_unit(),
        }
    }

    /// Rounded to 2 places.
    pub(crate) fn money<S: Serializer>(
        value: &Decimal,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        emit(super::round(*value, 2), serializer)
    }

    pub(crate) fn opt_money<S: Serializer>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => money(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Unrounded.
    pub(crate) fn exact<S: Serializer>(
        value: &Decimal,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        emit(*value, serializer)
    }
}
