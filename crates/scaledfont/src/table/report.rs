//! Diagnostics collected while building a style table.

use crate::style::{DescriptorError, StyleKey};

/// Why a resource entry did not make it into the table.
#[derive(Debug, Clone, PartialEq)]
pub enum DropReason {
    /// The key names no [`StyleKey`](crate::StyleKey).
    UnknownKey,
    /// The key is known but its value is not a valid descriptor.
    Malformed(DescriptorError),
    /// Another spelling of the same key was kept instead.
    Duplicate(StyleKey),
}

/// A resource entry that was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedEntry {
    /// The key as written in the resource
    pub key: String,
    pub reason: DropReason,
}

impl std::fmt::Display for DroppedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            DropReason::UnknownKey => write!(f, "'{}': not a known text style", self.key),
            DropReason::Malformed(err) => write!(f, "'{}': {}", self.key, err),
            DropReason::Duplicate(key) => {
                write!(f, "'{}': another entry for '{}' was used", self.key, key)
            }
        }
    }
}

/// What happened to each entry of a resource during table construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Number of entries accepted into the table
    pub accepted: usize,
    /// Entries that were skipped, in resource key order
    pub dropped: Vec<DroppedEntry>,
    /// True if the resource's top level was not a dictionary
    pub not_a_dictionary: bool,
}

impl LoadReport {
    /// Returns true if every entry was accepted.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && !self.not_a_dictionary
    }

    /// Returns the keys dropped because their values were malformed.
    pub fn malformed(&self) -> impl Iterator<Item = &DroppedEntry> {
        self.dropped
            .iter()
            .filter(|d| matches!(d.reason, DropReason::Malformed(_)))
    }

    /// Returns the keys dropped because another spelling of the same style won.
    pub fn duplicates(&self) -> impl Iterator<Item = &DroppedEntry> {
        self.dropped
            .iter()
            .filter(|d| matches!(d.reason, DropReason::Duplicate(_)))
    }

    /// Returns the keys dropped because they name no known style.
    pub fn unknown(&self) -> impl Iterator<Item = &DroppedEntry> {
        self.dropped
            .iter()
            .filter(|d| d.reason == DropReason::UnknownKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_is_clean() {
        assert!(LoadReport::default().is_clean());
    }

    #[test]
    fn test_report_partitions_dropped_entries() {
        let report = LoadReport {
            accepted: 2,
            dropped: vec![
                DroppedEntry {
                    key: "jumbo".into(),
                    reason: DropReason::UnknownKey,
                },
                DroppedEntry {
                    key: "body".into(),
                    reason: DropReason::Malformed(DescriptorError::MissingSize),
                },
            ],
            not_a_dictionary: false,
        };

        assert!(!report.is_clean());
        assert_eq!(report.unknown().count(), 1);
        assert_eq!(report.malformed().next().map(|d| d.key.as_str()), Some("body"));
    }

    #[test]
    fn test_dropped_entry_display() {
        let unknown = DroppedEntry {
            key: "jumbo".into(),
            reason: DropReason::UnknownKey,
        };
        assert!(unknown.to_string().contains("jumbo"));

        let malformed = DroppedEntry {
            key: "body".into(),
            reason: DropReason::Malformed(DescriptorError::NonPositiveSize(0.0)),
        };
        let msg = malformed.to_string();
        assert!(msg.contains("body"));
        assert!(msg.contains("positive"));

        let duplicate = DroppedEntry {
            key: "title1".into(),
            reason: DropReason::Duplicate(StyleKey::Title),
        };
        let msg = duplicate.to_string();
        assert!(msg.contains("title1"));
        assert!(msg.contains("'title'"));
    }
}
