//! Descriptor validation errors.

/// Why a font descriptor could not be built from a resource entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorError {
    /// The entry's value is not a key-value record
    NotARecord,
    /// The record has no font name field
    MissingName,
    /// The font name is empty or whitespace
    EmptyName,
    /// The record has no font size field
    MissingSize,
    /// The font size field is not a number
    SizeNotNumeric,
    /// The font size is zero, negative or not finite
    NonPositiveSize(f64),
}

impl std::fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DescriptorError::NotARecord => write!(f, "font description is not a record"),
            DescriptorError::MissingName => write!(f, "font description has no 'fontName'"),
            DescriptorError::EmptyName => write!(f, "font description has an empty 'fontName'"),
            DescriptorError::MissingSize => write!(f, "font description has no 'fontSize'"),
            DescriptorError::SizeNotNumeric => {
                write!(f, "font description 'fontSize' is not a number")
            }
            DescriptorError::NonPositiveSize(size) => {
                write!(f, "font size {} must be a positive number", size)
            }
        }
    }
}

impl std::error::Error for DescriptorError {}
