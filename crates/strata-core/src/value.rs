// SPDX-License-Identifier: Apache-2.0
//! Property values attached to nodes and edges.
//!
//! The engine treats property values as opaque data: it never validates them
//! against a schema, and the only value it ever inspects is the one stored
//! under the configured identifier key (see [`crate::NodeRef`]).
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Property map for nodes and edges.
///
/// `BTreeMap` keeps iteration order deterministic, which the snapshot digest
/// relies on.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// A single property value.
///
/// Commands carry these; the engine stores them verbatim and shallow-merges
/// them on modify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// UTF-8 string value.
    String(String),
    /// 64-bit signed integer value.
    Integer(i64),
    /// 64-bit float value.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// Ordered list of values.
    Array(Vec<PropertyValue>),
    /// Nested string-keyed map of values.
    Map(BTreeMap<String, PropertyValue>),
    /// Explicit null.
    Null,
}

impl PropertyValue {
    /// Returns `true` when the value is [`PropertyValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Returns the string slice when this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer when this is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float when this is a float value.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean when this is a boolean value.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the element slice when this is an array value.
    #[must_use]
    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested map when this is a map value.
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "{s:?}"),
            PropertyValue::Integer(i) => write!(f, "{i}"),
            PropertyValue::Float(x) => write!(f, "{x}"),
            PropertyValue::Boolean(b) => write!(f, "{b}"),
            PropertyValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            PropertyValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                write!(f, "}}")
            }
            PropertyValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_owned())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i64::from(i))
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(items: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(items)
    }
}

impl From<BTreeMap<String, PropertyValue>> for PropertyValue {
    fn from(map: BTreeMap<String, PropertyValue>) -> Self {
        PropertyValue::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        let s: PropertyValue = "hello".into();
        assert_eq!(s.as_str(), Some("hello"));
        assert_eq!(s.as_integer(), None);

        let i: PropertyValue = 42i64.into();
        assert_eq!(i.as_integer(), Some(42));

        let f: PropertyValue = 2.5f64.into();
        assert_eq!(f.as_float(), Some(2.5));

        let b: PropertyValue = true.into();
        assert_eq!(b.as_boolean(), Some(true));

        assert!(PropertyValue::Null.is_null());
        assert!(!b.is_null());
    }

    #[test]
    fn nested_values_round_trip_through_accessors() {
        let arr = PropertyValue::Array(vec![1i64.into(), 2i64.into()]);
        assert_eq!(arr.as_array().map(<[PropertyValue]>::len), Some(2));

        let mut inner = BTreeMap::new();
        inner.insert("key".to_owned(), PropertyValue::from("value"));
        let map = PropertyValue::Map(inner);
        assert!(map.as_map().is_some_and(|m| m.contains_key("key")));
    }

    #[test]
    fn display_is_compact() {
        let mut map = BTreeMap::new();
        map.insert("since".to_owned(), PropertyValue::from(2015i64));
        let value = PropertyValue::Map(map);
        assert_eq!(value.to_string(), "{since: 2015}");
        assert_eq!(
            PropertyValue::Array(vec![true.into(), PropertyValue::Null]).to_string(),
            "[true, null]"
        );
    }
}
