//! On-disk formats for style resources.

use super::error::ResourceError;
use super::value::ResourceValue;

/// Recognized resource file extensions in priority order.
///
/// When a directory holds several files with the same base name, the one
/// whose extension appears first here wins.
#[cfg(feature = "plist")]
pub const RESOURCE_EXTENSIONS: &[&str] = &[".plist", ".json", ".yaml", ".yml"];

/// Recognized resource file extensions in priority order.
#[cfg(not(feature = "plist"))]
pub const RESOURCE_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml"];

/// A serialization format a style resource may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceFormat {
    /// Property list, XML or binary encoding.
    #[cfg(feature = "plist")]
    Plist,
    Json,
    Yaml,
}

impl ResourceFormat {
    /// Picks the format for a file name by its extension.
    ///
    /// Returns `None` if the extension is not one of [`RESOURCE_EXTENSIONS`].
    pub fn from_file_name(name: &str) -> Option<ResourceFormat> {
        let lower = name.to_ascii_lowercase();
        #[cfg(feature = "plist")]
        {
            if lower.ends_with(".plist") {
                return Some(ResourceFormat::Plist);
            }
        }
        if lower.ends_with(".json") {
            Some(ResourceFormat::Json)
        } else if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Some(ResourceFormat::Yaml)
        } else {
            None
        }
    }

    /// Parses raw resource bytes into a [`ResourceValue`].
    ///
    /// `origin` names the resource in the error message.
    pub fn parse(self, bytes: &[u8], origin: &str) -> Result<ResourceValue, ResourceError> {
        let parse_error = |message: String| ResourceError::Parse {
            name: origin.to_string(),
            format: self,
            message,
        };

        match self {
            #[cfg(feature = "plist")]
            ResourceFormat::Plist => plist::Value::from_reader(std::io::Cursor::new(bytes))
                .map(ResourceValue::from)
                .map_err(|e| parse_error(e.to_string())),
            ResourceFormat::Json => serde_json::from_slice::<serde_json::Value>(bytes)
                .map(ResourceValue::from)
                .map_err(|e| parse_error(e.to_string())),
            ResourceFormat::Yaml => serde_yaml::from_slice::<serde_yaml::Value>(bytes)
                .map(ResourceValue::from)
                .map_err(|e| parse_error(e.to_string())),
        }
    }
}

impl std::fmt::Display for ResourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            #[cfg(feature = "plist")]
            ResourceFormat::Plist => "plist",
            ResourceFormat::Json => "json",
            ResourceFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

/// Returns the extension priority of a file name (lower is higher priority).
///
/// Returns `usize::MAX` if the extension is not recognized.
pub fn extension_priority(name: &str) -> usize {
    let lower = name.to_ascii_lowercase();
    RESOURCE_EXTENSIONS
        .iter()
        .position(|ext| lower.ends_with(ext))
        .unwrap_or(usize::MAX)
}

/// Strips a recognized extension from a file name.
pub fn strip_extension(name: &str) -> Option<&str> {
    let lower = name.to_ascii_lowercase();
    let ext = RESOURCE_EXTENSIONS.iter().find(|ext| lower.ends_with(*ext))?;
    name.get(..name.len() - ext.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(
            ResourceFormat::from_file_name("Noteworthy.json"),
            Some(ResourceFormat::Json)
        );
        assert_eq!(
            ResourceFormat::from_file_name("themes/dark.YML"),
            Some(ResourceFormat::Yaml)
        );
        assert_eq!(ResourceFormat::from_file_name("Noteworthy.txt"), None);
    }

    #[cfg(feature = "plist")]
    #[test]
    fn test_plist_has_highest_priority() {
        assert_eq!(
            ResourceFormat::from_file_name("Noteworthy.plist"),
            Some(ResourceFormat::Plist)
        );
        assert_eq!(extension_priority("a.plist"), 0);
        assert!(extension_priority("a.plist") < extension_priority("a.json"));
    }

    #[test]
    fn test_extension_priority_order() {
        assert!(extension_priority("a.json") < extension_priority("a.yaml"));
        assert!(extension_priority("a.yaml") < extension_priority("a.yml"));
        assert_eq!(extension_priority("a.toml"), usize::MAX);
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("fonts/Noteworthy.json"), Some("fonts/Noteworthy"));
        assert_eq!(strip_extension("Theme.YAML"), Some("Theme"));
        assert_eq!(strip_extension("README.md"), None);
    }

    #[test]
    fn test_parse_json() {
        let value = ResourceFormat::Json
            .parse(br#"{"body": {"fontName": "Avenir", "fontSize": 17}}"#, "Avenir")
            .unwrap();
        assert!(value.field(&["body"]).is_some());
    }

    #[test]
    fn test_parse_yaml() {
        let value = ResourceFormat::Yaml
            .parse(b"body:\n  fontName: Avenir\n  fontSize: 17.5\n", "Avenir")
            .unwrap();
        let body = value.field(&["body"]).unwrap();
        assert_eq!(body.field(&["fontSize"]).and_then(ResourceValue::as_f64), Some(17.5));
    }

    #[test]
    fn test_parse_error_names_resource() {
        let err = ResourceFormat::Json.parse(b"{not json", "Broken").unwrap_err();
        match &err {
            ResourceError::Parse { name, format, .. } => {
                assert_eq!(name, "Broken");
                assert_eq!(*format, ResourceFormat::Json);
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
        assert!(err.to_string().contains("Broken"));
    }

    #[cfg(feature = "plist")]
    #[test]
    fn test_parse_xml_plist() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>body</key>
    <dict>
        <key>fontName</key>
        <string>Noteworthy-Light</string>
        <key>fontSize</key>
        <integer>17</integer>
    </dict>
</dict>
</plist>"#;
        let value = ResourceFormat::Plist.parse(xml, "Noteworthy").unwrap();
        let body = value.field(&["body"]).unwrap();
        assert_eq!(
            body.field(&["fontName"]).and_then(ResourceValue::as_str),
            Some("Noteworthy-Light")
        );
        assert_eq!(body.field(&["fontSize"]).and_then(ResourceValue::as_f64), Some(17.0));
    }
}
