//! # Scaledfont - Custom fonts for abstract text styles
//!
//! `scaledfont` maps abstract text styles ("title", "headline", "body", ...)
//! to concrete font descriptors (a font name and a point size) read from a
//! style resource, and falls back to the platform default font whenever no
//! mapping applies.
//!
//! ## Quick Start
//!
//! ```rust
//! use scaledfont::{ResourceBundle, ResourceFormat, ScaledFont, StyleKey, TextStyle};
//!
//! let mut bundle = ResourceBundle::new();
//! bundle.add_inline("Noteworthy", ResourceFormat::Json, r#"{
//!     "body":     { "fontName": "Noteworthy-Light", "fontSize": 17 },
//!     "headline": { "fontName": "Noteworthy-Bold",  "fontSize": 17 }
//! }"#);
//!
//! let font = ScaledFont::new("Noteworthy", &bundle);
//!
//! let body = font.descriptor(StyleKey::Body).unwrap();
//! assert_eq!(body.font_name(), "Noteworthy-Light");
//!
//! // No caption2 entry: the host should use its own font for that style.
//! assert!(font.font(&TextStyle::Caption2).is_system());
//! ```
//!
//! ## Style Resources
//!
//! A style resource is a dictionary whose keys are style names and whose
//! values are records with a `fontName` and a `fontSize`:
//!
//! ```yaml
//! title:
//!   fontName: Noteworthy-Light
//!   fontSize: 28
//! headline:
//!   fontName: Noteworthy-Bold
//!   fontSize: 17
//! ```
//!
//! Resources may be property lists (`.plist`, with the default `plist`
//! feature), JSON or YAML. They are found through a [`ResourceBundle`],
//! which can be filled from directories at runtime or embedded at compile
//! time with `embed_style_resources!` (`macros` feature).
//!
//! Loading is lenient. Unknown style names and malformed entries are
//! skipped and logged through the [`log`] facade; the remaining entries are
//! still used. A resource that cannot be found or parsed at all leaves the
//! font without a table, and every style falls back to the platform
//! default.
//!
//! ## Resolution
//!
//! [`Resolver::resolve`] is a pure function of a [`StyleKey`] and an
//! optional [`StyleTable`]. Host styles that have no key
//! ([`map_external_style`] returns `None`) fall back the same way as a
//! missing entry. On tvOS, or with the `large-title-alias` feature,
//! `largeTitle` is looked up as `title` (see [`LargeTitlePolicy`]).

pub mod resolve;
pub mod resource;
pub mod style;
pub mod table;

pub use resolve::{
    map_external_style, resolve, FallbackReason, FontChoice, LargeTitlePolicy, Resolution,
    Resolver, ScaledFont, TextStyle,
};
pub use resource::{
    walk_resource_dir, ResolvedResource, ResourceBundle, ResourceError, ResourceFile,
    ResourceFormat, ResourceValue, RESOURCE_EXTENSIONS,
};
pub use style::{DescriptorError, FontDescriptor, StyleKey, UnknownStyleKey};
pub use table::{DropReason, DroppedEntry, LoadReport, StyleTable};

#[cfg(feature = "macros")]
pub use scaledfont_macros::embed_style_resources;
