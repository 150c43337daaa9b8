//! Turning requested text styles into fonts.
//!
//! This module provides:
//!
//! - [`Resolver`] and [`resolve`]: Pure lookup with platform-default fallback
//! - [`TextStyle`] and [`map_external_style`]: Host styles and their keys
//! - [`LargeTitlePolicy`]: Build-time aliasing of the large title style
//! - [`ScaledFont`]: A font family that owns its style table
//! - [`FontChoice`]: The custom-or-system answer handed to the host

mod choice;
mod policy;
mod resolver;
mod scaled_font;
mod text_style;

pub use choice::FontChoice;
pub use policy::LargeTitlePolicy;
pub use resolver::{resolve, FallbackReason, Resolution, Resolver};
pub use scaled_font::ScaledFont;
pub use text_style::{map_external_style, TextStyle};
