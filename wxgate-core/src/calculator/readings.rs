//! Ordered calculation output

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::reading::{CalculatedDataPoint, DataValue};

/// Calculated readings for one payload, in publishing order.
///
/// Serializes as `{key: {value, unit, attributes}}`. For the flat
/// `{key: value}` blob use [`CalculatedReadings::values`] or
/// [`CalculatedReadings::to_json`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatedReadings {
    entries: Vec<(String, CalculatedDataPoint)>,
}

impl CalculatedReadings {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, key: impl Into<String>, point: CalculatedDataPoint) {
        self.entries.push((key.into(), point));
    }

    /// Reading for `key`
    pub fn get(&self, key: &str) -> Option<&CalculatedDataPoint> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    /// Whether a reading exists for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in publishing order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Readings in publishing order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CalculatedDataPoint)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no readings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flat `{key: value}` view
    pub fn values(&self) -> ReadingValues<'_> {
        ReadingValues(self)
    }

    /// Flat `{key: value}` JSON document
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.values())
    }
}

impl Serialize for CalculatedReadings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, point) in &self.entries {
            map.serialize_entry(key, point)?;
        }
        map.end()
    }
}

/// Flat `{key: value}` view of [`CalculatedReadings`], in publishing order
#[derive(Debug, Clone, Copy)]
pub struct ReadingValues<'a>(&'a CalculatedReadings);

impl ReadingValues<'_> {
    /// Value for `key`
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.0.get(key).map(|point| &point.value)
    }
}

impl Serialize for ReadingValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, point) in self.0.iter() {
            map.serialize_entry(key, &point.value)?;
        }
        map.end()
    }
}
