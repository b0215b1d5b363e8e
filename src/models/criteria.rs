use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Raw criteria submitted with a match request
///
/// Keys are criterion names as the caller sent them, values are whatever
/// scalar arrived on the wire. Keys are kept sorted so every pass over the
/// criteria sees them in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria {
    values: BTreeMap<String, Value>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from query string parameters
    pub fn from_query(params: HashMap<String, String>) -> Self {
        params
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Criteria
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Coerce a raw requested value into the non-negative integer the
/// criterion functions work with
///
/// Numbers are truncated and made absolute, strings are read up to the
/// first non-digit, booleans become 0/1 and containers count as 1 when
/// non-empty. Out-of-range values saturate.
pub fn coerce_value(value: &Value) -> u32 {
    match value {
        Value::Null => 0,
        Value::Bool(flag) => u32::from(*flag),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                saturate(int.unsigned_abs())
            } else if let Some(uint) = number.as_u64() {
                saturate(uint)
            } else {
                // `as` saturates and maps NaN to 0
                number.as_f64().map_or(0, |float| float.trunc().abs() as u32)
            }
        }
        Value::String(raw) => coerce_str(raw),
        Value::Array(items) => u32::from(!items.is_empty()),
        Value::Object(fields) => u32::from(!fields.is_empty()),
    }
}

fn coerce_str(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let digits = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
        })
}

#[inline]
fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
