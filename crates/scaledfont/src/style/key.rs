//! The closed set of abstract text-style keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An abstract text style a font can be configured for.
///
/// The set is closed: resources may only configure these keys. Each key has a
/// stable camelCase name (see [`StyleKey::as_str`]) which is how it appears as
/// a top-level key in a style resource.
///
/// # Example
///
/// ```rust
/// use scaledfont::StyleKey;
///
/// assert_eq!(StyleKey::LargeTitle.as_str(), "largeTitle");
/// assert_eq!(StyleKey::parse("large-title"), Some(StyleKey::LargeTitle));
/// assert_eq!(StyleKey::parse("caption1"), Some(StyleKey::Caption));
/// assert_eq!(StyleKey::parse("jumbo"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKey {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption,
    Caption2,
}

impl StyleKey {
    /// Every key, in declaration order (largest style first).
    pub const ALL: [StyleKey; 11] = [
        StyleKey::LargeTitle,
        StyleKey::Title,
        StyleKey::Title2,
        StyleKey::Title3,
        StyleKey::Headline,
        StyleKey::Subheadline,
        StyleKey::Body,
        StyleKey::Callout,
        StyleKey::Footnote,
        StyleKey::Caption,
        StyleKey::Caption2,
    ];

    /// Returns the stable name used for this key in style resources.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKey::LargeTitle => "largeTitle",
            StyleKey::Title => "title",
            StyleKey::Title2 => "title2",
            StyleKey::Title3 => "title3",
            StyleKey::Headline => "headline",
            StyleKey::Subheadline => "subheadline",
            StyleKey::Body => "body",
            StyleKey::Callout => "callout",
            StyleKey::Footnote => "footnote",
            StyleKey::Caption => "caption",
            StyleKey::Caption2 => "caption2",
        }
    }

    /// Looks up a key by name.
    ///
    /// Besides the stable name, kebab-case and snake_case spellings are
    /// accepted (`large-title`, `large_title`), as are the UIKit names
    /// `title1` and `caption1`. Matching is ASCII case-insensitive.
    /// Returns `None` for anything else.
    pub fn parse(name: &str) -> Option<StyleKey> {
        let folded: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let key = match folded.as_str() {
            "largetitle" => StyleKey::LargeTitle,
            "title" | "title1" => StyleKey::Title,
            "title2" => StyleKey::Title2,
            "title3" => StyleKey::Title3,
            "headline" => StyleKey::Headline,
            "subheadline" => StyleKey::Subheadline,
            "body" => StyleKey::Body,
            "callout" => StyleKey::Callout,
            "footnote" => StyleKey::Footnote,
            "caption" | "caption1" => StyleKey::Caption,
            "caption2" => StyleKey::Caption2,
            _ => return None,
        };
        Some(key)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`StyleKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyleKey {
    pub name: String,
}

impl fmt::Display for UnknownStyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown text style key '{}'", self.name)
    }
}

impl std::error::Error for UnknownStyleKey {}

impl FromStr for StyleKey {
    type Err = UnknownStyleKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleKey::parse(s).ok_or_else(|| UnknownStyleKey {
            name: s.to_string(),
        })
    }
}
