//! The font a host should use for a piece of text.

use super::text_style::TextStyle;
use crate::style::FontDescriptor;

/// Either a custom font or the platform's font for a text style.
///
/// Both variants carry the requested [`TextStyle`] so the host can scale
/// the font with the user's preferred text size.
#[derive(Debug, Clone, PartialEq)]
pub enum FontChoice {
    /// A custom font, scaled relative to `relative_to`.
    Custom {
        descriptor: FontDescriptor,
        relative_to: TextStyle,
    },
    /// The platform default font for this text style.
    System(TextStyle),
}

impl FontChoice {
    /// Returns the custom descriptor, if any.
    pub fn descriptor(&self) -> Option<&FontDescriptor> {
        match self {
            FontChoice::Custom { descriptor, .. } => Some(descriptor),
            FontChoice::System(_) => None,
        }
    }

    /// The text style the font was chosen for.
    pub fn text_style(&self) -> &TextStyle {
        match self {
            FontChoice::Custom { relative_to, .. } => relative_to,
            FontChoice::System(style) => style,
        }
    }

    /// Returns true if this is the platform default.
    pub fn is_system(&self) -> bool {
        matches!(self, FontChoice::System(_))
    }
}
