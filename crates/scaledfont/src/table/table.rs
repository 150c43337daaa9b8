//! The immutable style-to-font mapping.

use std::collections::HashMap;

use log::{debug, warn};

use super::report::{DropReason, DroppedEntry, LoadReport};
use crate::resource::{ResourceBundle, ResourceValue};
use crate::style::{FontDescriptor, StyleKey};

/// A mapping from [`StyleKey`] to [`FontDescriptor`].
///
/// Tables are built once and never mutated. A table may be empty; callers
/// that could not load a resource at all hold no table
/// (`Option<StyleTable>::None`), which is a different state.
///
/// Construction is lenient: entries with unknown keys or malformed
/// descriptions are dropped (and logged) instead of failing the whole table.
///
/// # Example
///
/// ```rust
/// use scaledfont::{FontDescriptor, StyleKey, StyleTable};
///
/// let table: StyleTable = [
///     (StyleKey::Body, FontDescriptor::new("Noteworthy-Light", 17.0).unwrap()),
///     (StyleKey::Headline, FontDescriptor::new("Noteworthy-Bold", 17.0).unwrap()),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(table.len(), 2);
/// assert!(table.get(StyleKey::Caption2).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    entries: HashMap<StyleKey, FontDescriptor>,
}

impl StyleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a loosely-typed resource.
    ///
    /// Top-level keys are style names, values are descriptor records. A
    /// top level that is not a dictionary yields an empty table.
    pub fn from_resource(value: &ResourceValue) -> Self {
        Self::from_resource_report(value).0
    }

    /// Builds a table and reports which entries were dropped and why.
    pub fn from_resource_report(value: &ResourceValue) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        let Some(map) = value.as_dictionary() else {
            warn!("style resource is not a dictionary; no styles loaded");
            report.not_a_dictionary = true;
            return (Self::new(), report);
        };

        // Value keeps the resource key each entry came from.
        let mut entries: HashMap<StyleKey, (&str, FontDescriptor)> =
            HashMap::with_capacity(map.len());
        for (name, entry) in map {
            let Some(key) = StyleKey::parse(name) else {
                debug!("ignoring unknown text style '{}'", name);
                report.dropped.push(DroppedEntry {
                    key: name.clone(),
                    reason: DropReason::UnknownKey,
                });
                continue;
            };

            match FontDescriptor::from_resource(entry) {
                Ok(descriptor) => {
                    // The stable name wins over alternate spellings,
                    // otherwise the first spelling in key order is kept.
                    let loser = match entries.get(&key) {
                        None => None,
                        Some((existing, _)) if name != key.as_str() || *existing == key.as_str() => {
                            Some(name.clone())
                        }
                        Some((existing, _)) => Some(existing.to_string()),
                    };
                    if let Some(loser) = loser {
                        warn!("dropping style '{}': duplicate of '{}'", loser, key);
                        report.dropped.push(DroppedEntry {
                            key: loser.clone(),
                            reason: DropReason::Duplicate(key),
                        });
                        if loser == *name {
                            continue;
                        }
                    }
                    entries.insert(key, (name.as_str(), descriptor));
                }
                Err(err) => {
                    warn!("dropping style '{}': {}", name, err);
                    report.dropped.push(DroppedEntry {
                        key: name.clone(),
                        reason: DropReason::Malformed(err),
                    });
                }
            }
        }

        report.accepted = entries.len();
        let entries = entries
            .into_iter()
            .map(|(key, (_, descriptor))| (key, descriptor))
            .collect();
        (Self { entries }, report)
    }

    /// Loads the named resource from a bundle and builds a table from it.
    ///
    /// Returns `None` if the resource cannot be found, read or parsed. Every
    /// style then falls back to the platform default.
    pub fn load(bundle: &ResourceBundle, name: &str) -> Option<Self> {
        match bundle.load(name) {
            Ok(value) => {
                let (table, report) = Self::from_resource_report(&value);
                debug!(
                    "loaded {} style(s) from '{}' ({} dropped)",
                    report.accepted,
                    name,
                    report.dropped.len()
                );
                Some(table)
            }
            Err(err) => {
                warn!("no style table for '{}': {}", name, err);
                None
            }
        }
    }

    /// Returns the descriptor for a key, if one is configured.
    pub fn get(&self, key: StyleKey) -> Option<&FontDescriptor> {
        self.entries.get(&key)
    }

    /// Returns true if the key has a descriptor.
    pub fn contains(&self, key: StyleKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of configured styles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no style is configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over configured styles in [`StyleKey`] order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &FontDescriptor)> {
        StyleKey::ALL
            .into_iter()
            .filter_map(move |key| self.entries.get(&key).map(|d| (key, d)))
    }

    /// Iterates over configured keys in [`StyleKey`] order.
    pub fn keys(&self) -> impl Iterator<Item = StyleKey> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

impl FromIterator<(StyleKey, FontDescriptor)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (StyleKey, FontDescriptor)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
