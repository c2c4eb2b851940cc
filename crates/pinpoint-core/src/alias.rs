//! Author-declared selector shortcuts.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// Ordered `(alias, selector)` pairs.
///
/// Substitution is a plain text replace, applied once per alias in declaration
/// order. An alias whose name shows up inside an earlier alias's replacement
/// will rewrite that text too, so pick names that cannot collide (a sigil such
/// as `@email` works well).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alias. Empty names are dropped.
    pub fn insert(&mut self, alias: impl Into<String>, selector: impl Into<String>) {
        let alias = alias.into();
        if alias.is_empty() {
            warn!("Ignoring alias with an empty name");
            return;
        }
        self.entries.push((alias, selector.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Rewrite every alias occurring in `selector`.
    pub fn apply(&self, selector: &str) -> String {
        self.entries
            .iter()
            .fold(selector.to_string(), |acc, (alias, replacement)| {
                acc.replace(alias.as_str(), replacement)
            })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = AliasTable::new();
        for (alias, selector) in iter {
            table.insert(alias, selector);
        }
        table
    }
}

impl Serialize for AliasTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (alias, selector) in &self.entries {
            map.serialize_entry(alias, selector)?;
        }
        map.end()
    }
}

struct AliasTableVisitor;

impl<'de> Visitor<'de> for AliasTableVisitor {
    type Value = AliasTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of alias names to selectors")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AliasTable, A::Error> {
        let mut table = AliasTable::new();
        while let Some((alias, selector)) = access.next_entry::<String, String>()? {
            table.insert(alias, selector);
        }
        Ok(table)
    }
}

// Deserialized from a mapping so the document order becomes substitution order.
impl<'de> Deserialize<'de> for AliasTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AliasTableVisitor)
    }
}
