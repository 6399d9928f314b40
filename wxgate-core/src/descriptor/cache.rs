//! Descriptor cache keyed by device and reading key

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{describe, EntityDescriptor};
use crate::config::CalculationConfig;

/// Memoizes [`describe`] per `(device, key)`.
///
/// Entries are only ever added, and a descriptor computed twice is identical,
/// so concurrent misses for the same key are harmless. A poisoned lock is
/// recovered since no entry can be left half-written.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    entries: RwLock<HashMap<(String, String), EntityDescriptor>>,
}

impl DescriptorCache {
    /// Empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor for `key` on `device`, resolved on first use
    pub fn describe(&self, device: &str, key: &str, config: &CalculationConfig) -> EntityDescriptor {
        let cache_key = (device.to_string(), key.to_string());

        if let Some(descriptor) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&cache_key)
        {
            return *descriptor;
        }

        let descriptor = describe(key, config);
        *self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(cache_key)
            .or_insert(descriptor)
    }

    /// Number of cached descriptors
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing is cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
