/*
 * writer.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! JSX rendering of element trees.
//!
//! This is a preview of what code generation would emit for a tree: plain
//! elements become JSX elements with their properties normalized the same
//! way the transform normalizes them, and synthesized nodes become
//! `{<tag ...>...</tag>}` expressions.

use crate::attributes::normalize_properties;
use crate::error::Result;
use crate::options::AttributeNameCase;
use mdx_hast::{JsxAttribute, JsxAttributeValue, JsxExpression, Node, Root};
use mdx_property_info::{HtmlPropertyTable, PropertyLookup};

/// Render `root` as JSX with React attribute names.
pub fn write_jsx(root: &Root) -> Result<String> {
    JsxWriter::default().write(root)
}

#[derive(Debug, Clone)]
pub struct JsxWriter<L = HtmlPropertyTable> {
    attribute_name_case: AttributeNameCase,
    lookup: L,
}

impl JsxWriter {
    pub fn new(attribute_name_case: AttributeNameCase) -> Self {
        JsxWriter {
            attribute_name_case,
            lookup: HtmlPropertyTable::new(),
        }
    }
}

impl Default for JsxWriter {
    fn default() -> Self {
        Self::new(AttributeNameCase::default())
    }
}

impl<L: PropertyLookup> JsxWriter<L> {
    pub fn with_lookup<M: PropertyLookup>(self, lookup: M) -> JsxWriter<M> {
        JsxWriter {
            attribute_name_case: self.attribute_name_case,
            lookup,
        }
    }

    /// Render each top-level node on its own line. Whitespace-only text
    /// between top-level nodes is dropped.
    pub fn write(&self, root: &Root) -> Result<String> {
        let mut blocks = Vec::new();
        for node in &root.children {
            if matches!(node, Node::Text(text) if text.value.trim().is_empty()) {
                continue;
            }
            let mut out = String::new();
            self.write_node(node, &mut out)?;
            if !out.is_empty() {
                blocks.push(out);
            }
        }
        Ok(blocks.join("\n"))
    }

    fn write_node(&self, node: &Node, out: &mut String) -> Result<()> {
        match node {
            Node::Element(element) => {
                let attributes =
                    normalize_properties(element, &self.lookup, self.attribute_name_case)?;
                self.write_element(&element.tag_name, &attributes, &element.children, out)?;
            }
            Node::Text(text) => {
                out.push('{');
                out.push_str(&json_string(&text.value));
                out.push('}');
            }
            Node::Raw(raw) => out.push_str(&raw.value),
            Node::Comment(_) | Node::Doctype(_) => {}
            Node::MdxFlowExpression(expression) => {
                out.push('{');
                match &expression.element {
                    Some(element) => self.write_element(
                        &element.name,
                        &element.attributes,
                        &element.children,
                        out,
                    )?,
                    None => out.push_str(&expression.value),
                }
                out.push('}');
            }
        }
        Ok(())
    }

    fn write_element(
        &self,
        name: &str,
        attributes: &[JsxAttribute],
        children: &[Node],
        out: &mut String,
    ) -> Result<()> {
        out.push('<');
        out.push_str(name);
        for attribute in attributes {
            out.push(' ');
            write_attribute(attribute, out);
        }

        if children.is_empty() {
            out.push_str(" />");
            return Ok(());
        }

        out.push('>');
        for child in children {
            self.write_node(child, out)?;
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        Ok(())
    }
}

fn write_attribute(attribute: &JsxAttribute, out: &mut String) {
    match attribute {
        JsxAttribute::Spread { argument } => {
            out.push_str("{...");
            out.push_str(argument);
            out.push('}');
        }
        JsxAttribute::Attribute { name, value } => {
            out.push_str(name);
            match value {
                None => {}
                Some(JsxAttributeValue::Literal(text)) => {
                    // JSX strings have no escapes, so escaped text goes in braces.
                    let quoted = json_string(text);
                    if quoted.len() == text.len() + 2 {
                        out.push('=');
                        out.push_str(&quoted);
                    } else {
                        out.push_str("={");
                        out.push_str(&quoted);
                        out.push('}');
                    }
                }
                Some(JsxAttributeValue::Expression(expression)) => {
                    out.push_str("={");
                    write_expression(expression, out);
                    out.push('}');
                }
            }
        }
    }
}

fn write_expression(expression: &JsxExpression, out: &mut String) {
    match expression {
        JsxExpression::Source(source) => out.push_str(source),
        JsxExpression::Object(entries) => {
            out.push('{');
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                if is_identifier(key) {
                    out.push_str(key);
                } else {
                    out.push_str(&json_string(key));
                }
                out.push_str(": ");
                out.push_str(&json_string(value));
            }
            out.push('}');
        }
    }
}

fn json_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
