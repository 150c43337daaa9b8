//! A font family configured per text style.

use log::debug;

use super::choice::FontChoice;
use super::resolver::{Resolution, Resolver};
use super::text_style::TextStyle;
use crate::resource::ResourceBundle;
use crate::style::{FontDescriptor, StyleKey};
use crate::table::StyleTable;

/// A custom font family, with one descriptor per configured text style.
///
/// The style table is loaded once, when the `ScaledFont` is created, from
/// the bundle resource named after the font. If that resource is missing or
/// unreadable the `ScaledFont` still works: every style resolves to the
/// platform default.
///
/// # Example
///
/// ```rust
/// use scaledfont::{FontChoice, ResourceBundle, ResourceFormat, ScaledFont, TextStyle};
///
/// let mut bundle = ResourceBundle::new();
/// bundle.add_inline(
///     "Noteworthy",
///     ResourceFormat::Yaml,
///     "body:\n  fontName: Noteworthy-Light\n  fontSize: 17\n",
/// );
///
/// let font = ScaledFont::new("Noteworthy", &bundle);
/// assert_eq!(
///     font.font(&TextStyle::Body).descriptor().map(|d| d.font_name()),
///     Some("Noteworthy-Light")
/// );
/// assert_eq!(font.font(&TextStyle::Caption), FontChoice::System(TextStyle::Caption));
/// ```
#[derive(Debug, Clone)]
pub struct ScaledFont {
    font_name: String,
    table: Option<StyleTable>,
    resolver: Resolver,
}

impl ScaledFont {
    /// Creates a scaled font from the resource called `font_name` in `bundle`.
    pub fn new(font_name: impl Into<String>, bundle: &ResourceBundle) -> Self {
        let font_name = font_name.into();
        let table = StyleTable::load(bundle, &font_name);
        Self {
            font_name,
            table,
            resolver: Resolver::new(),
        }
    }

    /// Creates a scaled font from an already-built table (or none).
    pub fn from_table(font_name: impl Into<String>, table: Option<StyleTable>) -> Self {
        Self {
            font_name: font_name.into(),
            table,
            resolver: Resolver::new(),
        }
    }

    /// A scaled font with no table: every style uses the platform default.
    pub fn system() -> Self {
        Self::from_table("System", None)
    }

    /// Replaces the resolver, e.g. to force a large title policy.
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The name this font was created with.
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// The loaded style table, or `None` if loading failed.
    pub fn style_table(&self) -> Option<&StyleTable> {
        self.table.as_ref()
    }

    /// Returns the custom descriptor for a key, if any.
    pub fn descriptor(&self, key: StyleKey) -> Option<&FontDescriptor> {
        self.resolver.resolve(key, self.table.as_ref())
    }

    /// Chooses the font for a host text style.
    pub fn font(&self, style: &TextStyle) -> FontChoice {
        match self
            .resolver
            .resolve_style_detailed(style, self.table.as_ref())
        {
            Resolution::Custom(descriptor) => FontChoice::Custom {
                descriptor: descriptor.clone(),
                relative_to: style.clone(),
            },
            Resolution::Default(reason) => {
                debug!(
                    "{}: using system font for '{}' ({:?})",
                    self.font_name, style, reason
                );
                FontChoice::System(style.clone())
            }
        }
    }
}

impl Default for ScaledFont {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::LargeTitlePolicy;
    use crate::resource::ResourceFormat;

    const NOTWORTHY_JSON: &str = r#"{
        "title": { "fontName": "Noteworthy-Light", "fontSize": 28 },
        "body": { "fontName": "Noteworthy-Light", "fontSize": 17 }
    }"#;

    fn bundle() -> ResourceBundle {
        let mut bundle = ResourceBundle::new();
        bundle.add_inline("Notworthy", ResourceFormat::Json, NOTWORTHY_JSON);
        bundle
    }

    #[test]
    fn test_new_loads_table() {
        let font = ScaledFont::new("Notworthy", &bundle());
        assert_eq!(font.font_name(), "Notworthy");
        assert_eq!(font.style_table().map(StyleTable::len), Some(2));
        assert_eq!(
            font.descriptor(StyleKey::Title).map(|d| d.font_size()),
            Some(28.0)
        );
    }

    #[test]
    fn test_missing_style_uses_system_font() {
        let font = ScaledFont::new("Notworthy", &bundle());
        assert_eq!(
            font.font(&TextStyle::Headline),
            FontChoice::System(TextStyle::Headline)
        );
    }

    #[test]
    fn test_missing_resource_has_no_table() {
        let font = ScaledFont::new("Missing", &bundle());
        assert!(font.style_table().is_none());
        assert!(font.font(&TextStyle::Body).is_system());
    }

    #[test]
    fn test_custom_font_is_relative_to_style() {
        let font = ScaledFont::new("Notworthy", &bundle());
        match font.font(&TextStyle::Body) {
            FontChoice::Custom {
                descriptor,
                relative_to,
            } => {
                assert_eq!(descriptor.font_name(), "Noteworthy-Light");
                assert_eq!(relative_to, TextStyle::Body);
            }
            other => panic!("Expected custom font, got {:?}", other),
        }
    }

    #[test]
    fn test_large_title_follows_resolver_policy() {
        let aliasing = ScaledFont::new("Notworthy", &bundle())
            .with_resolver(Resolver::with_policy(LargeTitlePolicy::AliasToTitle));
        assert_eq!(
            aliasing
                .font(&TextStyle::LargeTitle)
                .descriptor()
                .map(|d| d.font_size()),
            Some(28.0)
        );

        let distinct = ScaledFont::new("Notworthy", &bundle())
            .with_resolver(Resolver::with_policy(LargeTitlePolicy::Distinct));
        assert!(distinct.font(&TextStyle::LargeTitle).is_system());
    }

    #[test]
    fn test_system_default() {
        let font = ScaledFont::default();
        assert!(font.style_table().is_none());
        for key in StyleKey::ALL {
            assert!(font.descriptor(key).is_none());
        }
    }
}
