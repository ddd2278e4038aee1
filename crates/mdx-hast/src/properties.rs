/*
 * properties.rs
 * Copyright (c) 2026 Posit, PBC
 */

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// Element properties, keyed by hast property name (`className`, `dataFoo`, ...).
///
/// LinkedHashMap preserves insertion order, which downstream code generation
/// relies on when it emits attributes.
pub type Properties = LinkedHashMap<String, PropertyValue>;

/// The value of a single element property.
///
/// `Null` and `Bool(false)` both mean "attribute not present"; the merge step
/// drops them rather than rendering them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<String>),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// JavaScript-style truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
    ///
    /// Lists are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Null => false,
            PropertyValue::Bool(b) => *b,
            PropertyValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropertyValue::String(s) => !s.is_empty(),
            PropertyValue::List(_) => true,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(items: Vec<String>) -> Self {
        PropertyValue::List(items)
    }
}

impl From<Vec<&str>> for PropertyValue {
    fn from(items: Vec<&str>) -> Self {
        PropertyValue::List(items.into_iter().map(str::to_string).collect())
    }
}
