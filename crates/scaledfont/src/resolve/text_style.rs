//! Host text styles and their mapping onto style keys.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::style::StyleKey;

/// A text style as named by the host UI framework.
///
/// This is a superset of [`StyleKey`]: hosts grow new styles over time, and
/// tags this crate has never heard of are kept as [`TextStyle::Other`]
/// rather than rejected.
///
/// # Example
///
/// ```rust
/// use scaledfont::{map_external_style, StyleKey, TextStyle};
///
/// let style: TextStyle = "headline".parse().unwrap();
/// assert_eq!(map_external_style(&style), Some(StyleKey::Headline));
///
/// let future: TextStyle = "hero".parse().unwrap();
/// assert_eq!(future, TextStyle::Other("hero".into()));
/// assert_eq!(map_external_style(&future), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TextStyle {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Headline,
    Subheadline,
    #[default]
    Body,
    Callout,
    Footnote,
    Caption,
    Caption2,
    /// Larger than `LargeTitle`; has no style key.
    ExtraLargeTitle,
    /// Has no style key.
    ExtraLargeTitle2,
    /// A style tag this crate does not recognize.
    Other(String),
}

impl TextStyle {
    /// Returns the host's name for this style.
    pub fn name(&self) -> &str {
        match self {
            TextStyle::LargeTitle => "largeTitle",
            TextStyle::Title => "title",
            TextStyle::Title2 => "title2",
            TextStyle::Title3 => "title3",
            TextStyle::Headline => "headline",
            TextStyle::Subheadline => "subheadline",
            TextStyle::Body => "body",
            TextStyle::Callout => "callout",
            TextStyle::Footnote => "footnote",
            TextStyle::Caption => "caption",
            TextStyle::Caption2 => "caption2",
            TextStyle::ExtraLargeTitle => "extraLargeTitle",
            TextStyle::ExtraLargeTitle2 => "extraLargeTitle2",
            TextStyle::Other(tag) => tag,
        }
    }
}

impl From<StyleKey> for TextStyle {
    fn from(key: StyleKey) -> Self {
        match key {
            StyleKey::LargeTitle => TextStyle::LargeTitle,
            StyleKey::Title => TextStyle::Title,
            StyleKey::Title2 => TextStyle::Title2,
            StyleKey::Title3 => TextStyle::Title3,
            StyleKey::Headline => TextStyle::Headline,
            StyleKey::Subheadline => TextStyle::Subheadline,
            StyleKey::Body => TextStyle::Body,
            StyleKey::Callout => TextStyle::Callout,
            StyleKey::Footnote => TextStyle::Footnote,
            StyleKey::Caption => TextStyle::Caption,
            StyleKey::Caption2 => TextStyle::Caption2,
        }
    }
}

impl FromStr for TextStyle {
    type Err = Infallible;

    /// Never fails: unrecognized tags become [`TextStyle::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(key) = StyleKey::parse(s) {
            return Ok(TextStyle::from(key));
        }
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Ok(match folded.as_str() {
            "extralargetitle" => TextStyle::ExtraLargeTitle,
            "extralargetitle2" => TextStyle::ExtraLargeTitle2,
            _ => TextStyle::Other(s.to_string()),
        })
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Translates a host text style into a [`StyleKey`].
///
/// Total over every input: styles with no counterpart (newer host styles,
/// unrecognized tags) yield `None`, which resolution treats exactly like a
/// missing table entry.
pub fn map_external_style(style: &TextStyle) -> Option<StyleKey> {
    match style {
        TextStyle::LargeTitle => Some(StyleKey::LargeTitle),
        TextStyle::Title => Some(StyleKey::Title),
        TextStyle::Title2 => Some(StyleKey::Title2),
        TextStyle::Title3 => Some(StyleKey::Title3),
        TextStyle::Headline => Some(StyleKey::Headline),
        TextStyle::Subheadline => Some(StyleKey::Subheadline),
        TextStyle::Body => Some(StyleKey::Body),
        TextStyle::Callout => Some(StyleKey::Callout),
        TextStyle::Footnote => Some(StyleKey::Footnote),
        TextStyle::Caption => Some(StyleKey::Caption),
        TextStyle::Caption2 => Some(StyleKey::Caption2),
        TextStyle::ExtraLargeTitle | TextStyle::ExtraLargeTitle2 | TextStyle::Other(_) => None,
    }
}
