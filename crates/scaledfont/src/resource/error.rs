use std::path::PathBuf;

use super::format::ResourceFormat;

/// Error type for resource bundle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// Two resource directories contain files that resolve to the same name.
    Collision {
        /// The resource name that has conflicting sources
        name: String,
        /// Path to the existing resource
        existing_path: PathBuf,
        /// Directory containing the existing resource
        existing_dir: PathBuf,
        /// Path to the conflicting resource
        conflicting_path: PathBuf,
        /// Directory containing the conflicting resource
        conflicting_dir: PathBuf,
    },

    /// No resource with this name is registered.
    NotFound {
        /// The name that was requested
        name: String,
    },

    /// Failed to read a resource file or directory from disk.
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// The resource was read but is not valid in its format.
    Parse {
        /// The resource name or path
        name: String,
        /// Format the content was parsed as
        format: ResourceFormat,
        /// Error message from the parser
        message: String,
    },
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceError::Collision {
                name,
                existing_path,
                existing_dir,
                conflicting_path,
                conflicting_dir,
            } => {
                write!(
                    f,
                    "Style resource collision detected for \"{}\":\n  \
                     - {} (from {})\n  \
                     - {} (from {})",
                    name,
                    existing_path.display(),
                    existing_dir.display(),
                    conflicting_path.display(),
                    conflicting_dir.display()
                )
            }
            ResourceError::NotFound { name } => {
                write!(f, "Style resource not found: \"{}\"", name)
            }
            ResourceError::Read { path, message } => {
                write!(
                    f,
                    "Failed to read style resource \"{}\": {}",
                    path.display(),
                    message
                )
            }
            ResourceError::Parse {
                name,
                format,
                message,
            } => {
                write!(
                    f,
                    "Failed to parse style resource \"{}\" as {}: {}",
                    name, format, message
                )
            }
        }
    }
}

impl std::error::Error for ResourceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_collision() {
        let err = ResourceError::Collision {
            name: "Noteworthy".to_string(),
            existing_path: PathBuf::from("/a/Noteworthy.plist"),
            existing_dir: PathBuf::from("/a"),
            conflicting_path: PathBuf::from("/b/Noteworthy.json"),
            conflicting_dir: PathBuf::from("/b"),
        };

        let display = err.to_string();
        assert!(display.contains("Noteworthy"));
        assert!(display.contains("/a/Noteworthy.plist"));
        assert!(display.contains("/b/Noteworthy.json"));
    }

    #[test]
    fn test_error_display_not_found() {
        let err = ResourceError::NotFound {
            name: "Missing".to_string(),
        };
        assert!(err.to_string().contains("Missing"));
    }

    #[test]
    fn test_error_display_read() {
        let err = ResourceError::Read {
            path: PathBuf::from("/fonts/Avenir.json"),
            message: "permission denied".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("/fonts/Avenir.json"));
        assert!(display.contains("permission denied"));
    }
}
