/*
 * meta.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Parser for code fence meta strings.
//!
//! A meta string is read as the attribute list of a JSX opening tag. It is
//! wrapped as `<c {meta} />` and handed to `oxc_parser`:
//!
//! ```text
//! title="Example" showLineNumbers highlight={[1, 3]} {...props}
//! ```
//!
//! Expression bodies must be valid JavaScript, but they are not evaluated.
//! Their source text is carried through as-is.

use crate::error::MetaSyntaxError;
use mdx_hast::JsxAttribute;
use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Expression, JSXAttributeItem, JSXAttributeValue, JSXOpeningElement, Program, Statement,
};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};

const PREFIX: &str = "<c ";
const SUFFIX: &str = " />";

const UNEXPECTED_TOKEN: &str = "Unexpected token";
const EMPTY_EXPRESSION: &str = "JSX attributes must only be assigned a non-empty expression";

/// Parse `meta` as the attributes of a `<tag_name ... />` opening tag.
///
/// Attributes come back in source order. Duplicate names are kept. Error
/// offsets are byte offsets into `meta`.
pub fn parse_meta(meta: &str, tag_name: &str) -> Result<Vec<JsxAttribute>, MetaSyntaxError> {
    let source = format!("{PREFIX}{meta}{SUFFIX}");
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, &source, SourceType::jsx()).parse();

    if let Some(error) = parsed.errors.first() {
        let offset = error
            .labels
            .as_ref()
            .and_then(|labels| labels.first())
            .map_or(source.len(), |label| label.offset());
        return Err(MetaSyntaxError::new(
            error.message.to_string(),
            meta_offset(meta, offset),
        ));
    }

    let opening = opening_element(&parsed.program, meta)?;
    let attributes = opening
        .attributes
        .iter()
        .map(|item| convert_attribute(item, &source, meta))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(tag_name, meta, count = attributes.len(), "parsed code meta");
    Ok(attributes)
}

/// Map an offset in the wrapped source back into `meta`.
fn meta_offset(meta: &str, offset: usize) -> usize {
    offset.saturating_sub(PREFIX.len()).min(meta.len())
}

/// The wrapper must parse back as exactly one childless `<c ... />`.
/// Meta text such as `/>;x;<c` closes the tag early and is rejected.
fn opening_element<'p, 'a>(
    program: &'p Program<'a>,
    meta: &str,
) -> Result<&'p JSXOpeningElement<'a>, MetaSyntaxError> {
    let element = match program.body.first() {
        Some(Statement::ExpressionStatement(statement)) => match &statement.expression {
            Expression::JSXElement(element) => Some(element),
            _ => None,
        },
        _ => None,
    };

    match element {
        Some(element)
            if program.body.len() == 1
                && element.closing_element.is_none()
                && element.children.is_empty() =>
        {
            Ok(&*element.opening_element)
        }
        Some(element) => Err(MetaSyntaxError::new(
            UNEXPECTED_TOKEN,
            meta_offset(meta, element.opening_element.span.end as usize),
        )),
        None => Err(MetaSyntaxError::new(UNEXPECTED_TOKEN, 0)),
    }
}

fn convert_attribute(
    item: &JSXAttributeItem<'_>,
    source: &str,
    meta: &str,
) -> Result<JsxAttribute, MetaSyntaxError> {
    let attribute = match item {
        JSXAttributeItem::SpreadAttribute(spread) => {
            return Ok(JsxAttribute::spread(spread.argument.span().source_text(source)));
        }
        JSXAttributeItem::Attribute(attribute) => attribute,
    };

    let name = attribute.name.span().source_text(source);
    let value = match &attribute.value {
        None => return Ok(JsxAttribute::bare(name)),
        Some(value) => value,
    };

    match value {
        JSXAttributeValue::StringLiteral(literal) => {
            let raw = between_delimiters(literal.span.source_text(source));
            Ok(JsxAttribute::literal(name, decode_entities(raw)))
        }
        JSXAttributeValue::ExpressionContainer(container) => {
            if container.expression.as_expression().is_none() {
                return Err(MetaSyntaxError::new(
                    EMPTY_EXPRESSION,
                    meta_offset(meta, container.span.start as usize),
                ));
            }
            let body = between_delimiters(container.span.source_text(source));
            Ok(JsxAttribute::expression(name, body.trim()))
        }
        JSXAttributeValue::Element(element) => Ok(JsxAttribute::expression(
            name,
            element.span.source_text(source),
        )),
        JSXAttributeValue::Fragment(fragment) => Ok(JsxAttribute::expression(
            name,
            fragment.span.source_text(source),
        )),
    }
}

/// Strip the quotes or braces around a value.
fn between_delimiters(text: &str) -> &str {
    text.get(1..text.len().saturating_sub(1)).unwrap_or_default()
}

/// Decode HTML character references in JSX attribute text.
///
/// Unknown or malformed references are kept as written.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match decode_reference(rest) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode a reference at the start of `text` (which begins with `&`).
/// Returns the character and the number of bytes consumed.
fn decode_reference(text: &str) -> Option<(char, usize)> {
    // References are at most 10 characters between `&` and `;`.
    let semi = text.char_indices().take(12).find(|(_, c)| *c == ';')?.0;
    let body = &text[1..semi];

    let decoded = if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        char::from_u32(code)?
    } else {
        named_entity(body)?
    };

    Some((decoded, semi + 1))
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "hellip" => '…',
        "mdash" => '—',
        "ndash" => '–',
        "laquo" => '«',
        "raquo" => '»',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "middot" => '·',
        "bull" => '•',
        "times" => '×',
        "larr" => '←',
        "rarr" => '→',
        _ => return None,
    };
    Some(c)
}
