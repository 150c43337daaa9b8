//! Style keys and the font descriptors they map to.
//!
//! This module provides the core value types:
//!
//! - [`StyleKey`]: The closed set of abstract text styles
//! - [`FontDescriptor`]: A validated font name and point size
//! - [`DescriptorError`]: Why a resource entry is not a valid descriptor

mod descriptor;
mod error;
mod key;

pub use descriptor::FontDescriptor;
pub use error::DescriptorError;
pub use key::{StyleKey, UnknownStyleKey};
