//! Key Matching Tables
//!
//! Gateway keys have no fixed schema. A few are well known by name (`uv`,
//! `solarradiation`), most belong to a family identified by a substring
//! (`soilbatt1`, `wh65batt` and `co2_batt` are all batteries).
//!
//! A [`KeyTable`] resolves a key in two passes:
//!
//! 1. exact names, checked first, so `winddir` is never mistaken for a wind speed
//! 2. families, checked top to bottom; the first substring found in the key wins
//!
//! Family order therefore matters wherever one key contains two family markers
//! (`leakbatt1` contains both `leak` and `batt`). Tables put the more specific
//! marker first and pin the order in tests.

/// Why a key resolved the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Named entry
    Exact,
    /// Family entry, with the substring that matched
    Family(&'static str),
}

/// Exact-then-family lookup table
#[derive(Debug)]
pub struct KeyTable<T: 'static> {
    exact: &'static [(&'static str, T)],
    families: &'static [(&'static str, T)],
}

impl<T: Copy> KeyTable<T> {
    /// Table from an exact list and an ordered family list
    pub const fn new(
        exact: &'static [(&'static str, T)],
        families: &'static [(&'static str, T)],
    ) -> Self {
        Self { exact, families }
    }

    /// Resolve `key`, or `None` when nothing matches
    pub fn lookup(&self, key: &str) -> Option<(T, MatchKind)> {
        if let Some((_, entry)) = self.exact.iter().find(|(name, _)| *name == key) {
            return Some((*entry, MatchKind::Exact));
        }

        self.families
            .iter()
            .find(|(marker, _)| key.contains(marker))
            .map(|(marker, entry)| (*entry, MatchKind::Family(marker)))
    }

    /// Family markers in evaluation order
    pub fn family_markers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.families.iter().map(|(marker, _)| *marker)
    }
}

/// Channel number of a per-channel temperature key such as `temp3f`
pub fn temperature_channel(key: &str) -> Option<&str> {
    let channel = key.strip_prefix("temp")?.strip_suffix('f')?;
    (!channel.is_empty() && channel.bytes().all(|b| b.is_ascii_digit())).then_some(channel)
}
