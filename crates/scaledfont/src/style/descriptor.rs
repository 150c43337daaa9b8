//! Concrete font descriptions.

use serde::{Deserialize, Serialize};

use super::error::DescriptorError;
use crate::resource::ResourceValue;

const NAME_FIELDS: &[&str] = &["fontName", "font_name"];
const SIZE_FIELDS: &[&str] = &["fontSize", "font_size"];

/// A font family name and point size.
///
/// A descriptor is always valid: the name is non-empty and the size is a
/// finite number greater than zero. Scaling the size for the user's
/// preferred text size is left to the host UI framework.
///
/// # Example
///
/// ```rust
/// use scaledfont::FontDescriptor;
///
/// let body = FontDescriptor::new("Noteworthy-Light", 17.0).unwrap();
/// assert_eq!(body.font_name(), "Noteworthy-Light");
/// assert_eq!(body.font_size(), 17.0);
///
/// assert!(FontDescriptor::new("Noteworthy-Light", 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDescriptor")]
pub struct FontDescriptor {
    font_name: String,
    font_size: f64,
}

impl FontDescriptor {
    /// Creates a descriptor, validating name and size.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::EmptyName`] for a blank name and
    /// [`DescriptorError::NonPositiveSize`] for a size that is not a finite
    /// positive number.
    pub fn new(font_name: impl Into<String>, font_size: f64) -> Result<Self, DescriptorError> {
        let font_name = font_name.into();
        if font_name.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(DescriptorError::NonPositiveSize(font_size));
        }
        Ok(Self {
            font_name,
            font_size,
        })
    }

    /// Parses a descriptor from a loosely-typed resource record.
    ///
    /// The record needs a string `fontName` and a numeric `fontSize`
    /// (`font_name`/`font_size` are accepted too). Other fields are ignored.
    pub fn from_resource(value: &ResourceValue) -> Result<Self, DescriptorError> {
        if value.as_dictionary().is_none() {
            return Err(DescriptorError::NotARecord);
        }

        let name = value
            .field(NAME_FIELDS)
            .ok_or(DescriptorError::MissingName)?
            .as_str()
            .ok_or(DescriptorError::MissingName)?;
        let size = value
            .field(SIZE_FIELDS)
            .ok_or(DescriptorError::MissingSize)?
            .as_f64()
            .ok_or(DescriptorError::SizeNotNumeric)?;

        Self::new(name, size)
    }

    /// The PostScript or family name of the font.
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// The point size at the default content size.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescriptor {
    font_name: String,
    font_size: f64,
}

impl TryFrom<RawDescriptor> for FontDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        FontDescriptor::new(raw.font_name, raw.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: serde_json::Value) -> ResourceValue {
        ResourceValue::from(json)
    }

    #[test]
    fn test_new_valid() {
        let d = FontDescriptor::new("Noteworthy-Bold", 17.0).unwrap();
        assert_eq!(d.font_name(), "Noteworthy-Bold");
        assert_eq!(d.font_size(), 17.0);
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert_eq!(
            FontDescriptor::new("", 17.0),
            Err(DescriptorError::EmptyName)
        );
        assert_eq!(
            FontDescriptor::new("   ", 17.0),
            Err(DescriptorError::EmptyName)
        );
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert!(matches!(
            FontDescriptor::new("A", 0.0),
            Err(DescriptorError::NonPositiveSize(_))
        ));
        assert!(matches!(
            FontDescriptor::new("A", -1.0),
            Err(DescriptorError::NonPositiveSize(_))
        ));
        assert!(FontDescriptor::new("A", f64::NAN).is_err());
        assert!(FontDescriptor::new("A", f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_resource_integer_and_real_sizes() {
        let int = record(serde_json::json!({ "fontName": "A", "fontSize": 17 }));
        let real = record(serde_json::json!({ "fontName": "A", "fontSize": 17.5 }));

        assert_eq!(FontDescriptor::from_resource(&int).unwrap().font_size(), 17.0);
        assert_eq!(FontDescriptor::from_resource(&real).unwrap().font_size(), 17.5);
    }

    #[test]
    fn test_from_resource_snake_case_fields() {
        let value = record(serde_json::json!({ "font_name": "Avenir", "font_size": 12 }));
        let d = FontDescriptor::from_resource(&value).unwrap();
        assert_eq!(d.font_name(), "Avenir");
    }

    #[test]
    fn test_from_resource_ignores_extra_fields() {
        let value = record(serde_json::json!({
            "fontName": "Avenir",
            "fontSize": 12,
            "weight": "heavy"
        }));
        assert!(FontDescriptor::from_resource(&value).is_ok());
    }

    #[test]
    fn test_from_resource_errors() {
        let cases = [
            (serde_json::json!("Avenir"), DescriptorError::NotARecord),
            (serde_json::json!({ "fontSize": 12 }), DescriptorError::MissingName),
            (
                serde_json::json!({ "fontName": 7, "fontSize": 12 }),
                DescriptorError::MissingName,
            ),
            (serde_json::json!({ "fontName": "" , "fontSize": 12 }), DescriptorError::EmptyName),
            (serde_json::json!({ "fontName": "A" }), DescriptorError::MissingSize),
            (
                serde_json::json!({ "fontName": "A", "fontSize": "12" }),
                DescriptorError::SizeNotNumeric,
            ),
            (
                serde_json::json!({ "fontName": "A", "fontSize": -17 }),
                DescriptorError::NonPositiveSize(-17.0),
            ),
        ];

        for (json, expected) in cases {
            assert_eq!(FontDescriptor::from_resource(&record(json)), Err(expected));
        }
    }

    #[test]
    fn test_serde_round_trip_and_validation() {
        let d = FontDescriptor::new("Noteworthy-Light", 34.0).unwrap();
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fontName": "Noteworthy-Light", "fontSize": 34.0 })
        );

        let bad: Result<FontDescriptor, _> =
            serde_json::from_value(serde_json::json!({ "fontName": "A", "fontSize": 0 }));
        assert!(bad.is_err());
    }
}
