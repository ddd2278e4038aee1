/*
 * attributes.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Normalizing element properties into JSX attributes, and merging them
//! with attributes parsed from the code meta.

use crate::error::{CodePropsError, Result};
use crate::options::AttributeNameCase;
use crate::style::parse_style;
use mdx_hast::{Element, JsxAttribute, PropertyValue};
use mdx_property_info::{PropertyInfo, PropertyLookup};

/// Resolve the JSX attribute name for a property.
///
/// With [`AttributeNameCase::React`] the React prop name is used when the
/// HTML schema has one (`className`, `htmlFor`); otherwise, and always with
/// [`AttributeNameCase::Html`], the HTML attribute name (`class`, `data-x`).
pub fn normalize_name<L>(name: &str, lookup: &L, case: AttributeNameCase) -> String
where
    L: PropertyLookup + ?Sized,
{
    attribute_name(&lookup.find(name), case)
}

fn attribute_name(info: &PropertyInfo, case: AttributeNameCase) -> String {
    match (case, &info.react_alias) {
        (AttributeNameCase::React, Some(alias)) => alias.clone(),
        _ => info.attribute.clone(),
    }
}

/// How a property value is rendered, once it is known to be present.
#[derive(Debug, Clone, PartialEq)]
enum Encoded {
    /// `true`: a bare attribute.
    Present,
    Text(String),
}

/// Encode a property value, or `None` when the value means "not present":
/// `null`, `false`, `NaN`, or a falsy value on a boolean property.
fn encode_value(value: &PropertyValue, info: &PropertyInfo) -> Option<Encoded> {
    match value {
        PropertyValue::Null | PropertyValue::Bool(false) => None,
        PropertyValue::Number(n) if n.is_nan() => None,
        value if info.boolean && !value.is_truthy() => None,
        PropertyValue::Bool(true) => Some(Encoded::Present),
        PropertyValue::Number(n) => Some(Encoded::Text(number_to_string(*n))),
        PropertyValue::String(s) => Some(Encoded::Text(s.clone())),
        PropertyValue::List(items) => Some(Encoded::Text(join_list(items, info.comma_separated))),
    }
}

fn join_list(items: &[String], comma_separated: bool) -> String {
    let separator = if comma_separated { ", " } else { " " };
    items.join(separator).trim().to_string()
}

/// A number as JS `String(n)` writes it. Magnitudes from 1e21 up and
/// below 1e-6 use exponent form, as in `1e+21` and `1.5e-7`.
fn number_to_string(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    format!("{}", n)
}

/// Normalize an element's existing properties into JSX attributes.
///
/// Attributes come out in property-map order. A `style` string is parsed
/// into an object expression.
pub fn normalize_properties<L>(
    element: &Element,
    lookup: &L,
    case: AttributeNameCase,
) -> Result<Vec<JsxAttribute>>
where
    L: PropertyLookup + ?Sized,
{
    let mut attributes = Vec::with_capacity(element.properties.len());

    for (property, value) in element.properties.iter() {
        let info = lookup.find(property);
        let Some(encoded) = encode_value(value, &info) else {
            continue;
        };
        let name = attribute_name(&info, case);

        let attribute = if name == "style" {
            let style = match encoded {
                Encoded::Present => "true".to_string(),
                Encoded::Text(text) => text,
            };
            match parse_style(&style) {
                Ok(entries) => JsxAttribute::object(name, entries),
                Err(source) => {
                    return Err(CodePropsError::StyleSyntax {
                        source,
                        style,
                        tag_name: element.tag_name.clone(),
                        position: element.position,
                    });
                }
            }
        } else {
            match encoded {
                Encoded::Present => JsxAttribute::bare(name),
                Encoded::Text(text) => JsxAttribute::literal(name, text),
            }
        };

        attributes.push(attribute);
    }

    Ok(attributes)
}

/// Combine normalized element attributes with meta attributes.
///
/// Element attributes come first and meta attributes after, each in their
/// own order. Duplicate names are kept; the renderer applies the last one.
pub fn merge_attributes(existing: Vec<JsxAttribute>, meta: Vec<JsxAttribute>) -> Vec<JsxAttribute> {
    let mut merged = existing;
    merged.extend(meta);
    merged
}
