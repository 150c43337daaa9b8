//! Proc macros for compile-time embedding of scaledfont style resources.
//!
//! [`embed_style_resources!`] walks a directory at compile time and embeds
//! every style resource it finds, so a binary can ship its font
//! configuration without external files.
//!
//! # Example
//!
//! ```rust,ignore
//! use scaledfont::{embed_style_resources, ScaledFont};
//!
//! let bundle = embed_style_resources!("resources/fonts");
//! let font = ScaledFont::new("Noteworthy", &bundle);
//! ```

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::{format_ident, quote};
use std::path::{Path, PathBuf};
use syn::{parse_macro_input, LitStr};

/// Resource file extensions in priority order, with their format variant.
const RESOURCE_EXTENSIONS: &[(&str, &str)] = &[
    (".plist", "Plist"),
    (".json", "Json"),
    (".yaml", "Yaml"),
    (".yml", "Yaml"),
];

/// Embeds all style resources from a directory at compile time.
///
/// The directory is resolved relative to the invoking crate's manifest
/// directory. The macro expands to a `scaledfont::ResourceBundle` with each
/// resource added inline.
///
/// # Extensions
///
/// Recognized extensions (in priority order):
/// - `.plist` (needs the `plist` feature of `scaledfont`)
/// - `.json`
/// - `.yaml`
/// - `.yml`
///
/// # Name Resolution
///
/// Files are named by their relative path from the root, without extension:
/// - `fonts/Noteworthy.plist` → `"Noteworthy"`
/// - `fonts/themes/Dark.yaml` → `"themes/Dark"`
///
/// Every file is also reachable by its name with extension
/// (`"Noteworthy.plist"`). When several files share a base name, the
/// extensionless name refers to the highest-priority one.
///
/// # Compile-Time Errors
///
/// - Directory doesn't exist
/// - Directory is not readable
#[proc_macro]
pub fn embed_style_resources(input: TokenStream) -> TokenStream {
    let path_lit = parse_macro_input!(input as LitStr);
    let dir_path = resolve_path(&path_lit.value());

    let files = match collect_files(&dir_path) {
        Ok(files) => files,
        Err(e) => {
            return syn::Error::new(path_lit.span(), e)
                .to_compile_error()
                .into();
        }
    };

    let entries: Vec<_> = files
        .iter()
        .map(|file| {
            let name_with_ext = &file.name_with_ext;
            let format = format_ident!("{}", file.format);
            let bytes = Literal::byte_string(&file.content);
            let base_name = file.name.as_ref().map(|name| {
                quote! {
                    bundle.add_inline(#name, ::scaledfont::ResourceFormat::#format, bytes.to_vec());
                }
            });
            quote! {
                {
                    let bytes: &'static [u8] = #bytes;
                    #base_name
                    bundle.add_inline(
                        #name_with_ext,
                        ::scaledfont::ResourceFormat::#format,
                        bytes.to_vec(),
                    );
                }
            }
        })
        .collect();

    let expanded = quote! {
        {
            let mut bundle = ::scaledfont::ResourceBundle::new();
            #(#entries)*
            bundle
        }
    };

    expanded.into()
}

/// An embedded resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EmbeddedFile {
    name_with_ext: String,
    /// Extensionless name, set only on the highest-priority file for it
    name: Option<String>,
    format: &'static str,
    content: Vec<u8>,
}

/// Resolves a path relative to the crate's manifest directory.
fn resolve_path(path: &str) -> PathBuf {
    // CARGO_MANIFEST_DIR points at the crate being compiled, not this one.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .expect("CARGO_MANIFEST_DIR should be set during compilation");

    Path::new(&manifest_dir).join(path)
}

/// Collects resource files in priority order.
///
/// Only the highest-priority file per base name gets the extensionless name.
fn collect_files(dir: &Path) -> Result<Vec<EmbeddedFile>, String> {
    if !dir.exists() {
        return Err(format!("Directory not found: {}", dir.display()));
    }

    if !dir.is_dir() {
        return Err(format!("Path is not a directory: {}", dir.display()));
    }

    let mut files = Vec::new();
    collect_files_recursive(dir, dir, &mut files)?;

    // Sort by extension priority, then by name for deterministic output
    files.sort_by(|a, b| {
        let pri_a = extension_priority(&a.0);
        let pri_b = extension_priority(&b.0);
        pri_a.cmp(&pri_b).then_with(|| a.0.cmp(&b.0))
    });

    let mut seen_names = std::collections::HashSet::new();
    let mut result = Vec::new();

    for (name_with_ext, content) in files {
        let Some((base_name, format)) = split_extension(&name_with_ext) else {
            continue;
        };
        let name = seen_names
            .insert(base_name.to_string())
            .then(|| base_name.to_string());
        result.push(EmbeddedFile {
            name,
            format,
            content,
            name_with_ext,
        });
    }

    Ok(result)
}

fn collect_files_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<(String, Vec<u8>)>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(current)
        .map_err(|e| format!("Failed to read {}: {}", current.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() {
            collect_files_recursive(&path, root, files)?;
        } else if path.is_file() {
            if let Some(name) = try_parse_file(&path, root) {
                let content = std::fs::read(&path)
                    .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
                files.push((name, content));
            }
        }
    }

    Ok(())
}

/// Returns the name with extension relative to `root`, if the extension is recognized.
fn try_parse_file(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let name_with_ext = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");

    split_extension(&name_with_ext)?;
    Some(name_with_ext)
}

/// Returns the extension priority (lower = higher priority).
fn extension_priority(name: &str) -> usize {
    let lower = name.to_ascii_lowercase();
    RESOURCE_EXTENSIONS
        .iter()
        .position(|(ext, _)| lower.ends_with(ext))
        .unwrap_or(usize::MAX)
}

/// Splits a name into its base name and format variant.
fn split_extension(name: &str) -> Option<(&str, &'static str)> {
    let lower = name.to_ascii_lowercase();
    let (ext, format) = RESOURCE_EXTENSIONS
        .iter()
        .find(|(ext, _)| lower.ends_with(ext))?;
    Some((name.get(..name.len() - ext.len())?, format))
}
