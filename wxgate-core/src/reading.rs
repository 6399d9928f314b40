//! Raw and Calculated Readings
//!
//! ## Raw side
//!
//! A gateway upload is a flat list of `key=value` pairs. Values arrive as strings
//! from form posts and as numbers or strings from JSON posts. [`RawPayload`] keeps
//! the pairs in arrival order, because published output follows that order.
//!
//! ```rust
//! use wxgate_core::RawPayload;
//!
//! let payload: RawPayload = serde_json::from_str(
//!     r#"{"tempf": 74.7, "humidity": "31", "dateutc": "2024-05-01 12:00:00"}"#,
//! ).unwrap();
//!
//! let keys: Vec<_> = payload.keys().collect();
//! assert_eq!(keys, ["tempf", "humidity", "dateutc"]);
//! assert_eq!(payload.number("humidity"), Some(31.0));
//! ```
//!
//! ## Calculated side
//!
//! A [`CalculatedDataPoint`] is a value (number, integer, text, or null), an
//! optional unit and free-form attributes. Null means "not computable right now"
//! and is a normal outcome, not an error. Whole-number readings (Beaufort force,
//! UV index, exposure minutes) are integers so they serialize without a `.0`.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::traits::Validatable;

/// One raw value from the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Numeric JSON value
    Number(f64),
    /// Everything else, including numbers sent as text
    Text(String),
}

impl RawValue {
    /// Value as a finite number, parsing text if needed
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_valid().then_some(value)
    }

    /// Value as it should be passed through untouched
    pub fn to_data_value(&self) -> DataValue {
        match self {
            Self::Number(n) if n.is_valid() => DataValue::Number(*n),
            Self::Number(_) => DataValue::Null,
            Self::Text(s) => DataValue::Text(s.clone()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// Gateway payload: keys and raw values in arrival order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPayload {
    entries: Vec<(String, RawValue)>,
}

impl RawPayload {
    /// Empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, value)` pairs. A repeated key replaces the earlier value
    /// but keeps its original position.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<RawValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut payload = Self::new();
        for (key, value) in pairs {
            payload.insert(key, value);
        }
        payload
    }

    /// Insert or replace one entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Raw value for `key`
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Value for `key` as a finite number
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(RawValue::as_f64)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in arrival order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in arrival order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the payload has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for RawPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PayloadVisitor;

        impl<'de> Visitor<'de> for PayloadVisitor {
            type Value = RawPayload;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flat map of sensor keys to numbers or strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut payload = RawPayload::new();
                while let Some((key, value)) = map.next_entry::<String, RawValue>()? {
                    payload.insert(key, value);
                }
                Ok(payload)
            }
        }

        deserializer.deserialize_map(PayloadVisitor)
    }
}

/// A calculated value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    /// Numeric reading
    Number(f64),
    /// Whole-number reading
    Integer(i64),
    /// State or label ("ON", "Comfortable", a timestamp)
    Text(String),
    /// Not computable from this payload
    Null,
}

impl DataValue {
    /// Numeric value, if this is a number or an integer
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Text value, if this is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::Null => f.write_str("None"),
        }
    }
}

/// One calculated reading: value, unit and extra attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatedDataPoint {
    /// The value
    pub value: DataValue,
    /// Unit label, when the value has one
    pub unit: Option<&'static str>,
    /// Extra attributes for consumers that can show them
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl CalculatedDataPoint {
    /// Numeric point with a unit
    pub fn number(value: f64, unit: Option<&'static str>) -> Self {
        Self {
            value: DataValue::Number(value),
            unit,
            attributes: BTreeMap::new(),
        }
    }

    /// Whole-number point with a unit
    pub fn integer(value: i64, unit: Option<&'static str>) -> Self {
        Self {
            value: DataValue::Integer(value),
            unit,
            attributes: BTreeMap::new(),
        }
    }

    /// Text point with no unit
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: DataValue::Text(value.into()),
            unit: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Null point; the unit is kept so consumers still know what it would be
    pub fn null(unit: Option<&'static str>) -> Self {
        Self {
            value: DataValue::Null,
            unit,
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
