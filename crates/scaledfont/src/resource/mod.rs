//! Locating and reading style resources.
//!
//! This module provides:
//!
//! - [`ResourceBundle`]: named resources from inline bytes, directories, or embedded content
//! - [`ResourceFormat`]: plist, JSON and YAML parsing
//! - [`ResourceValue`]: the format-independent value tree every resource is read into
//! - [`ResourceError`]: errors from locating, reading or parsing resources

mod bundle;
mod error;
mod format;
mod value;

pub use bundle::{walk_resource_dir, ResolvedResource, ResourceBundle, ResourceFile};
pub use error::ResourceError;
pub use format::{ResourceFormat, RESOURCE_EXTENSIONS};
pub use value::ResourceValue;
