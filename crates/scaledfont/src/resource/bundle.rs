//! Named style resources from inline bytes, directories, or embedded content.
//!
//! A [`ResourceBundle`] answers the question "where does the style resource
//! called `Noteworthy` live, and what does it contain?". It is the locator
//! passed to [`StyleTable::load`](crate::StyleTable::load).
//!
//! # Resolution
//!
//! 1. **Inline resources** (added via [`ResourceBundle::add_inline`]) shadow
//!    file resources of the same name
//! 2. **File resources** are searched in directory registration order
//! 3. Names can be given with or without extension: both `"Noteworthy"` and
//!    `"Noteworthy.plist"` resolve
//!
//! Within one directory, a higher-priority extension (see
//! [`RESOURCE_EXTENSIONS`]) wins over a lower one. The same base name in two
//! different directories is a configuration error
//! ([`ResourceError::Collision`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use scaledfont::{ResourceBundle, ResourceFormat};
//!
//! let mut bundle = ResourceBundle::new();
//! bundle.add_dir("/app/Resources/Fonts")?;
//! bundle.add_inline("Override", ResourceFormat::Json, r#"{"body": {...}}"#);
//!
//! let value = bundle.load("Noteworthy")?;
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;

use super::error::ResourceError;
use super::format::{extension_priority, strip_extension, ResourceFormat};
use super::value::ResourceValue;

/// A resource file discovered during directory walking.
///
/// Only the location is recorded; content is read when the resource is
/// loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    /// Resolution name without extension (e.g., "Noteworthy" or "themes/Dark")
    pub name: String,
    /// Resolution name with extension (e.g., "Noteworthy.plist")
    pub name_with_ext: String,
    /// Absolute path to the resource file
    pub absolute_path: PathBuf,
    /// The resource directory root this file belongs to
    pub source_dir: PathBuf,
}

impl ResourceFile {
    /// Creates a new resource file descriptor.
    pub fn new(
        name: impl Into<String>,
        name_with_ext: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
        source_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            name_with_ext: name_with_ext.into(),
            absolute_path: absolute_path.into(),
            source_dir: source_dir.into(),
        }
    }

    /// Returns the extension priority (lower is higher priority).
    pub fn extension_priority(&self) -> usize {
        extension_priority(&self.name_with_ext)
    }

    /// Returns the format implied by the file's extension.
    pub fn format(&self) -> Option<ResourceFormat> {
        ResourceFormat::from_file_name(&self.name_with_ext)
    }
}

/// How a resource's content is stored or accessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedResource {
    /// Content held in memory (inline or compile-time embedded).
    Inline {
        format: ResourceFormat,
        bytes: Vec<u8>,
    },

    /// Content read from disk when loaded.
    File { format: ResourceFormat, path: PathBuf },
}

impl ResolvedResource {
    /// The format the resource is parsed as.
    pub fn format(&self) -> ResourceFormat {
        match self {
            ResolvedResource::Inline { format, .. } | ResolvedResource::File { format, .. } => {
                *format
            }
        }
    }
}

/// Registry of named style resources.
///
/// # Example
///
/// ```rust
/// use scaledfont::{ResourceBundle, ResourceFormat};
///
/// let mut bundle = ResourceBundle::new();
/// bundle.add_inline(
///     "Avenir",
///     ResourceFormat::Json,
///     r#"{"body": {"fontName": "Avenir-Book", "fontSize": 17}}"#,
/// );
///
/// let value = bundle.load("Avenir").unwrap();
/// assert!(value.field(&["body"]).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceBundle {
    /// Map from resource name to resolved resource.
    ///
    /// File resources are stored under both the extensionless name and the
    /// name with extension.
    resources: HashMap<String, ResolvedResource>,

    /// Source directory of each file resource, keyed by extensionless name.
    ///
    /// Value is (path, source_dir), used for collision reporting.
    sources: HashMap<String, (PathBuf, PathBuf)>,
}

impl ResourceBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bundle from every resource found under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Read`] if the directory cannot be walked.
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let mut bundle = Self::new();
        bundle.add_dir(root)?;
        Ok(bundle)
    }

    /// Adds an in-memory resource.
    ///
    /// Inline resources shadow any file resource with the same name.
    pub fn add_inline(
        &mut self,
        name: impl Into<String>,
        format: ResourceFormat,
        bytes: impl Into<Vec<u8>>,
    ) {
        self.resources.insert(
            name.into(),
            ResolvedResource::Inline {
                format,
                bytes: bytes.into(),
            },
        );
    }

    /// Adds resources discovered from a directory scan.
    ///
    /// Each file is registered under its name with and without extension.
    /// Files with unrecognized extensions are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Collision`] if resources from different
    /// directories resolve to the same name.
    pub fn add_from_files(&mut self, files: Vec<ResourceFile>) -> Result<(), ResourceError> {
        let mut sorted_files = files;
        sorted_files.sort_by_key(|f| f.extension_priority());

        for file in sorted_files {
            let Some(format) = file.format() else {
                continue;
            };

            if let Some((existing_path, existing_dir)) = self.sources.get(&file.name) {
                if existing_dir != &file.source_dir {
                    return Err(ResourceError::Collision {
                        name: file.name.clone(),
                        existing_path: existing_path.clone(),
                        existing_dir: existing_dir.clone(),
                        conflicting_path: file.absolute_path.clone(),
                        conflicting_dir: file.source_dir.clone(),
                    });
                }
                // Same directory, lower-priority extension
                self.resources.insert(
                    file.name_with_ext.clone(),
                    ResolvedResource::File {
                        format,
                        path: file.absolute_path.clone(),
                    },
                );
                continue;
            }

            let resolved = ResolvedResource::File {
                format,
                path: file.absolute_path.clone(),
            };

            // Inline resources keep precedence over files added later
            if !matches!(
                self.resources.get(&file.name),
                Some(ResolvedResource::Inline { .. })
            ) {
                self.resources.insert(file.name.clone(), resolved.clone());
            }
            self.sources.insert(
                file.name.clone(),
                (file.absolute_path.clone(), file.source_dir.clone()),
            );
            self.resources.insert(file.name_with_ext.clone(), resolved);
        }

        Ok(())
    }

    /// Walks `root` and adds every resource found.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Read`] if the directory cannot be walked, or
    /// [`ResourceError::Collision`] as for [`add_from_files`](Self::add_from_files).
    pub fn add_dir(&mut self, root: impl AsRef<Path>) -> Result<(), ResourceError> {
        let root = root.as_ref();
        let files = walk_resource_dir(root).map_err(|e| ResourceError::Read {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(
            "found {} style resource file(s) under {}",
            files.len(),
            root.display()
        );
        self.add_from_files(files)
    }

    /// Looks up a resource by name, with or without extension.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    pub fn get(&self, name: &str) -> Result<&ResolvedResource, ResourceError> {
        self.resources
            .get(name)
            .ok_or_else(|| ResourceError::NotFound {
                name: name.to_string(),
            })
    }

    /// Returns true if a resource with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// Reads and parses a resource into a [`ResourceValue`].
    ///
    /// File resources are read from disk on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource is not found, cannot be read, or is
    /// not valid in its format.
    pub fn load(&self, name: &str) -> Result<ResourceValue, ResourceError> {
        match self.get(name)? {
            ResolvedResource::Inline { format, bytes } => format.parse(bytes, name),
            ResolvedResource::File { format, path } => {
                let bytes = std::fs::read(path).map_err(|e| ResourceError::Read {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                format.parse(&bytes, &path.to_string_lossy())
            }
        }
    }

    /// Returns the number of registered names.
    ///
    /// File resources count twice (with and without extension).
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if no resources are registered.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Returns an iterator over all registered names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(|s| s.as_str())
    }

    /// Removes all resources.
    pub fn clear(&mut self) {
        self.resources.clear();
        self.sources.clear();
    }
}

/// Walks a resource directory recursively and collects resource files.
///
/// Files without a recognized extension are ignored. The result is not
/// sorted.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or traversed.
pub fn walk_resource_dir(root: impl AsRef<Path>) -> Result<Vec<ResourceFile>, std::io::Error> {
    let root_canonical = root.as_ref().canonicalize()?;
    let mut files = Vec::new();

    walk_dir_recursive(&root_canonical, &root_canonical, &mut files)?;

    Ok(files)
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<ResourceFile>,
) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(current)? {
        let path = entry?.path();

        if path.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if path.is_file() {
            if let Some(resource_file) = try_parse_resource_file(&path, root) {
                files.push(resource_file);
            }
        }
    }

    Ok(())
}

/// Returns `None` if the file doesn't have a recognized resource extension.
fn try_parse_resource_file(path: &Path, root: &Path) -> Option<ResourceFile> {
    let relative = path.strip_prefix(root).ok()?;
    let name_with_ext = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");
    let name = strip_extension(&name_with_ext)?.to_string();

    Some(ResourceFile::new(name, name_with_ext, path, root))
}
