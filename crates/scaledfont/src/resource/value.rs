//! Loosely-typed values read from style resources.
//!
//! Every supported format is converted into [`ResourceValue`] before any
//! style information is extracted, so table construction never depends on
//! which format a resource was written in.

use std::collections::BTreeMap;

/// A value from a key-value resource, independent of its on-disk format.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Array(Vec<ResourceValue>),
    Dictionary(BTreeMap<String, ResourceValue>),
}

impl ResourceValue {
    /// Returns the entries if this value is a dictionary.
    pub fn as_dictionary(&self) -> Option<&BTreeMap<String, ResourceValue>> {
        match self {
            ResourceValue::Dictionary(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the string if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResourceValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a float if it is numeric.
    ///
    /// Integers are widened; strings are not parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ResourceValue::Integer(i) => Some(*i as f64),
            ResourceValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Looks up the first present field among `names` in a dictionary.
    pub fn field(&self, names: &[&str]) -> Option<&ResourceValue> {
        let map = self.as_dictionary()?;
        names.iter().find_map(|name| map.get(*name))
    }
}

impl From<serde_json::Value> for ResourceValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ResourceValue::Null,
            Value::Bool(b) => ResourceValue::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ResourceValue::Integer(i),
                None => n.as_f64().map_or(ResourceValue::Null, ResourceValue::Real),
            },
            Value::String(s) => ResourceValue::String(s),
            Value::Array(items) => {
                ResourceValue::Array(items.into_iter().map(ResourceValue::from).collect())
            }
            Value::Object(map) => ResourceValue::Dictionary(
                map.into_iter()
                    .map(|(k, v)| (k, ResourceValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_yaml::Value> for ResourceValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => ResourceValue::Null,
            Value::Bool(b) => ResourceValue::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ResourceValue::Integer(i),
                None => n.as_f64().map_or(ResourceValue::Null, ResourceValue::Real),
            },
            Value::String(s) => ResourceValue::String(s),
            Value::Sequence(items) => {
                ResourceValue::Array(items.into_iter().map(ResourceValue::from).collect())
            }
            Value::Mapping(map) => ResourceValue::Dictionary(
                map.into_iter()
                    .filter_map(|(k, v)| yaml_key(k).map(|k| (k, ResourceValue::from(v))))
                    .collect(),
            ),
            Value::Tagged(tagged) => ResourceValue::from(tagged.value),
        }
    }
}

/// Stringifies a scalar YAML mapping key. Compound keys are skipped.
fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(feature = "plist")]
impl From<plist::Value> for ResourceValue {
    fn from(value: plist::Value) -> Self {
        use plist::Value;

        match value {
            Value::Boolean(b) => ResourceValue::Boolean(b),
            Value::Integer(i) => i
                .as_signed()
                .map(ResourceValue::Integer)
                .unwrap_or(ResourceValue::Null),
            Value::Real(r) => ResourceValue::Real(r),
            Value::String(s) => ResourceValue::String(s),
            Value::Array(items) => {
                ResourceValue::Array(items.into_iter().map(ResourceValue::from).collect())
            }
            Value::Dictionary(dict) => ResourceValue::Dictionary(
                dict.into_iter()
                    .map(|(k, v)| (k, ResourceValue::from(v)))
                    .collect(),
            ),
            Value::Date(date) => ResourceValue::String(format!("{:?}", date)),
            _ => ResourceValue::Null,
        }
    }
}
