/*
 * node.rs
 * Copyright (c) 2026 Posit, PBC
 */

use crate::jsx::JsxElement;
use crate::position::Position;
use crate::properties::{Properties, PropertyValue};
use serde::{Deserialize, Serialize};

/// The root of an element tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "root")]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Element(Element),
    Text(Text),
    Comment(Comment),
    Doctype(Doctype),
    Raw(Raw),

    /// A node that code generation treats as an embedded expression rather
    /// than as a nested element. Produced by the code props transform.
    MdxFlowExpression(MdxFlowExpression),
}

/// Out-of-band data attached to an element by earlier pipeline stages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementData {
    /// Code fence meta string (the text after the language tag).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    /// Any other keys, carried through untouched.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ElementData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Doctype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raw {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Synthesized expression node.
///
/// `value` is kept empty; the expression is carried structurally in
/// `element` so code generation does not need to re-parse it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdxFlowExpression {
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<JsxElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ElementData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Root {
            children,
            position: None,
        }
    }
}

impl Node {
    pub fn element(tag_name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element::new(tag_name, children))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
            position: None,
        })
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<&Position> {
        match self {
            Node::Element(n) => n.position.as_ref(),
            Node::Text(n) => n.position.as_ref(),
            Node::Comment(n) => n.position.as_ref(),
            Node::Doctype(n) => n.position.as_ref(),
            Node::Raw(n) => n.position.as_ref(),
            Node::MdxFlowExpression(n) => n.position.as_ref(),
        }
    }

    /// Children of parent nodes. Only elements are parents; synthesized
    /// expression nodes are opaque to traversal.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Element(element) => Some(&element.children),
            _ => None,
        }
    }
}

impl Element {
    pub fn new(tag_name: impl Into<String>, children: Vec<Node>) -> Self {
        Element {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children,
            data: None,
            position: None,
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.data.get_or_insert_with(ElementData::default).meta = Some(meta.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// The code fence meta string, if one was attached.
    pub fn meta(&self) -> Option<&str> {
        self.data.as_ref().and_then(|data| data.meta.as_deref())
    }

    pub fn is(&self, tag_name: &str) -> bool {
        self.tag_name == tag_name
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
