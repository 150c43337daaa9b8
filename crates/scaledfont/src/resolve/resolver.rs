//! Style resolution with platform-default fallback.
//!
//! Resolution is a two-step pure pipeline: an optional host-style mapping
//! ([`map_external_style`]), then the large title policy and a table lookup.
//! Every failure path ends in "use the platform default"; nothing here
//! returns an error or performs I/O.

use super::policy::LargeTitlePolicy;
use super::text_style::{map_external_style, TextStyle};
use crate::style::{FontDescriptor, StyleKey};
use crate::table::StyleTable;

/// Why resolution fell back to the platform default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No style table was loaded.
    NoTable,
    /// The table has no entry for this key (after aliasing).
    Unmapped(StyleKey),
    /// The host style has no corresponding [`StyleKey`].
    UnknownStyle,
}

/// The outcome of resolving a style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// Use this custom font.
    Custom(&'a FontDescriptor),
    /// Use the platform default font.
    Default(FallbackReason),
}

impl<'a> Resolution<'a> {
    /// Returns the custom descriptor, or `None` for the platform default.
    pub fn descriptor(self) -> Option<&'a FontDescriptor> {
        match self {
            Resolution::Custom(descriptor) => Some(descriptor),
            Resolution::Default(_) => None,
        }
    }

    /// Returns true if the platform default should be used.
    pub fn is_default(&self) -> bool {
        matches!(self, Resolution::Default(_))
    }
}

/// Resolves style keys against an optional [`StyleTable`].
///
/// # Example
///
/// ```rust
/// use scaledfont::{FontDescriptor, Resolver, StyleKey, StyleTable};
///
/// let table: StyleTable = [(StyleKey::Body, FontDescriptor::new("Noteworthy-Light", 17.0).unwrap())]
///     .into_iter()
///     .collect();
///
/// let resolver = Resolver::new();
/// assert_eq!(
///     resolver.resolve(StyleKey::Body, Some(&table)).map(|d| d.font_name()),
///     Some("Noteworthy-Light")
/// );
/// assert!(resolver.resolve(StyleKey::Caption2, Some(&table)).is_none());
/// assert!(resolver.resolve(StyleKey::Body, None).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    policy: LargeTitlePolicy,
}

impl Resolver {
    /// Creates a resolver using the build target's [`LargeTitlePolicy::PLATFORM`].
    pub const fn new() -> Self {
        Self::with_policy(LargeTitlePolicy::PLATFORM)
    }

    /// Creates a resolver with an explicit large title policy.
    pub const fn with_policy(policy: LargeTitlePolicy) -> Self {
        Self { policy }
    }

    /// The large title policy in effect.
    pub fn policy(&self) -> LargeTitlePolicy {
        self.policy
    }

    /// Resolves a key, returning `None` when the platform default applies.
    pub fn resolve<'t>(
        &self,
        key: StyleKey,
        table: Option<&'t StyleTable>,
    ) -> Option<&'t FontDescriptor> {
        self.resolve_detailed(key, table).descriptor()
    }

    /// Resolves a host text style, returning `None` when the platform
    /// default applies.
    pub fn resolve_style<'t>(
        &self,
        style: &TextStyle,
        table: Option<&'t StyleTable>,
    ) -> Option<&'t FontDescriptor> {
        self.resolve_style_detailed(style, table).descriptor()
    }

    /// Resolves a key and reports why it fell back, if it did.
    pub fn resolve_detailed<'t>(
        &self,
        key: StyleKey,
        table: Option<&'t StyleTable>,
    ) -> Resolution<'t> {
        let Some(table) = table else {
            return Resolution::Default(FallbackReason::NoTable);
        };

        let key = self.policy.apply(key);
        match table.get(key) {
            Some(descriptor) => Resolution::Custom(descriptor),
            None => Resolution::Default(FallbackReason::Unmapped(key)),
        }
    }

    /// Resolves a host text style and reports why it fell back, if it did.
    pub fn resolve_style_detailed<'t>(
        &self,
        style: &TextStyle,
        table: Option<&'t StyleTable>,
    ) -> Resolution<'t> {
        let Some(table) = table else {
            return Resolution::Default(FallbackReason::NoTable);
        };
        match map_external_style(style) {
            Some(key) => self.resolve_detailed(key, Some(table)),
            None => Resolution::Default(FallbackReason::UnknownStyle),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a key with the platform resolver.
///
/// Returns `None` when the platform default font should be used.
pub fn resolve(key: StyleKey, table: Option<&StyleTable>) -> Option<&FontDescriptor> {
    Resolver::new().resolve(key, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noteworthy() -> StyleTable {
        [
            (
                StyleKey::Body,
                FontDescriptor::new("Noteworthy-Light", 17.0).unwrap(),
            ),
            (
                StyleKey::Headline,
                FontDescriptor::new("Noteworthy-Bold", 17.0).unwrap(),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn resolve_present_entry() {
        let table = noteworthy();
        let body = resolve(StyleKey::Body, Some(&table)).unwrap();
        assert_eq!(body.font_name(), "Noteworthy-Light");
        assert_eq!(body.font_size(), 17.0);
    }

    #[test]
    fn resolve_missing_entry_falls_back() {
        let table = noteworthy();
        assert!(resolve(StyleKey::Caption2, Some(&table)).is_none());
        assert_eq!(
            Resolver::new().resolve_detailed(StyleKey::Caption2, Some(&table)),
            Resolution::Default(FallbackReason::Unmapped(StyleKey::Caption2))
        );
    }

    #[test]
    fn resolve_without_table_falls_back_for_every_key() {
        let resolver = Resolver::new();
        for key in StyleKey::ALL {
            assert_eq!(
                resolver.resolve_detailed(key, None),
                Resolution::Default(FallbackReason::NoTable)
            );
        }
    }

    #[test]
    fn resolve_empty_table_is_unmapped_not_no_table() {
        let table = StyleTable::new();
        assert_eq!(
            Resolver::new().resolve_detailed(StyleKey::Body, Some(&table)),
            Resolution::Default(FallbackReason::Unmapped(StyleKey::Body))
        );
    }

    #[test]
    fn resolve_large_title_alias() {
        let table: StyleTable = [(
            StyleKey::Title,
            FontDescriptor::new("Noteworthy-Light", 28.0).unwrap(),
        )]
        .into_iter()
        .collect();

        let aliasing = Resolver::with_policy(LargeTitlePolicy::AliasToTitle);
        assert_eq!(
            aliasing.resolve(StyleKey::LargeTitle, Some(&table)),
            aliasing.resolve(StyleKey::Title, Some(&table))
        );
        assert!(aliasing
            .resolve(StyleKey::LargeTitle, Some(&table))
            .is_some());

        let distinct = Resolver::with_policy(LargeTitlePolicy::Distinct);
        assert!(distinct
            .resolve(StyleKey::LargeTitle, Some(&table))
            .is_none());
    }

    #[test]
    fn resolve_alias_ignores_large_title_entry() {
        let table: StyleTable = [
            (StyleKey::LargeTitle, FontDescriptor::new("A", 34.0).unwrap()),
            (StyleKey::Title, FontDescriptor::new("A", 28.0).unwrap()),
        ]
        .into_iter()
        .collect();

        let aliasing = Resolver::with_policy(LargeTitlePolicy::AliasToTitle);
        assert_eq!(
            aliasing
                .resolve(StyleKey::LargeTitle, Some(&table))
                .map(|d| d.font_size()),
            Some(28.0)
        );
    }

    #[test]
    fn resolve_style_maps_known_and_unknown() {
        let table = noteworthy();
        let resolver = Resolver::new();

        assert_eq!(
            resolver
                .resolve_style(&TextStyle::Headline, Some(&table))
                .map(|d| d.font_name()),
            Some("Noteworthy-Bold")
        );
        assert_eq!(
            resolver.resolve_style_detailed(&TextStyle::Other("hero".into()), Some(&table)),
            Resolution::Default(FallbackReason::UnknownStyle)
        );
        assert_eq!(
            resolver.resolve_style_detailed(&TextStyle::ExtraLargeTitle, None),
            Resolution::Default(FallbackReason::NoTable)
        );
    }
}
