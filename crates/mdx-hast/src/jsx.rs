/*
 * jsx.rs
 * Copyright (c) 2026 Posit, PBC
 *
 * JSX attribute model carried by synthesized expression nodes.
 */

use crate::node::Node;
use serde::{Deserialize, Serialize};

/// A JSX element built from a tree element plus parsed meta attributes.
///
/// Children are the original tree children, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxElement {
    pub name: String,
    pub attributes: Vec<JsxAttribute>,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// One entry in a JSX opening tag.
///
/// Attribute lists are ordered and may contain duplicate names; the
/// rendering framework resolves duplicates (last one wins), not us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JsxAttribute {
    /// `name`, `name="value"` or `name={expression}`
    Attribute {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<JsxAttributeValue>,
    },
    /// `{...argument}`
    Spread { argument: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum JsxAttributeValue {
    /// A string literal, already decoded.
    Literal(String),
    /// An embedded expression rendered as `{...}`.
    Expression(JsxExpression),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum JsxExpression {
    /// Opaque expression source text, emitted verbatim.
    Source(String),
    /// An object literal with string values, in insertion order.
    Object(Vec<(String, String)>),
}

impl JsxAttribute {
    /// A bare (boolean) attribute: `name`
    pub fn bare(name: impl Into<String>) -> Self {
        JsxAttribute::Attribute {
            name: name.into(),
            value: None,
        }
    }

    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        JsxAttribute::Attribute {
            name: name.into(),
            value: Some(JsxAttributeValue::Literal(value.into())),
        }
    }

    pub fn expression(name: impl Into<String>, source: impl Into<String>) -> Self {
        JsxAttribute::Attribute {
            name: name.into(),
            value: Some(JsxAttributeValue::Expression(JsxExpression::Source(
                source.into(),
            ))),
        }
    }

    pub fn object(name: impl Into<String>, entries: Vec<(String, String)>) -> Self {
        JsxAttribute::Attribute {
            name: name.into(),
            value: Some(JsxAttributeValue::Expression(JsxExpression::Object(entries))),
        }
    }

    pub fn spread(argument: impl Into<String>) -> Self {
        JsxAttribute::Spread {
            argument: argument.into(),
        }
    }

    /// Attribute name, or `None` for spreads.
    pub fn name(&self) -> Option<&str> {
        match self {
            JsxAttribute::Attribute { name, .. } => Some(name),
            JsxAttribute::Spread { .. } => None,
        }
    }

    pub fn value(&self) -> Option<&JsxAttributeValue> {
        match self {
            JsxAttribute::Attribute { value, .. } => value.as_ref(),
            JsxAttribute::Spread { .. } => None,
        }
    }
}

impl JsxElement {
    pub fn new(name: impl Into<String>, attributes: Vec<JsxAttribute>, children: Vec<Node>) -> Self {
        JsxElement {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// All attributes with the given name, in order.
    pub fn attributes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a JsxAttribute> {
        self.attributes
            .iter()
            .filter(move |attribute| attribute.name() == Some(name))
    }
}
