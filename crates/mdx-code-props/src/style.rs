//! Inline `style` declaration parsing.
//!
//! Splits a CSS declaration list into `(property, value)` pairs with
//! property names cased for a JS style object. Only declarations are
//! understood; parsing stops quietly at the first text that does not
//! start a property name.

use crate::error::StyleSyntaxError;

/// Parse an inline style into camel-cased `(key, value)` pairs.
///
/// Declarations with empty values are skipped. A repeated key keeps its
/// first position and takes the last value.
///
/// ```
/// use mdx_code_props::style::parse_style;
///
/// let entries = parse_style("background-color: tomato; --gap: 2px").unwrap();
/// assert_eq!(
///     entries,
///     vec![
///         ("backgroundColor".to_string(), "tomato".to_string()),
///         ("--gap".to_string(), "2px".to_string()),
///     ]
/// );
/// ```
pub fn parse_style(style: &str) -> Result<Vec<(String, String)>, StyleSyntaxError> {
    let mut entries: Vec<(String, String)> = Vec::new();
    for (property, value) in StyleParser::new(style).declarations()? {
        if value.is_empty() {
            continue;
        }
        let key = style_key(&property);
        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }
    Ok(entries)
}

/// `background-color` -> `backgroundColor`, `-ms-transform` -> `msTransform`,
/// `-webkit-transition` -> `WebkitTransition`. Custom properties are kept.
pub fn style_key(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let property = match property.strip_prefix("-ms-") {
        Some(rest) => format!("ms-{}", rest),
        None => property.to_string(),
    };

    let mut key = String::with_capacity(property.len());
    let mut chars = property.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '-' && next.is_ascii_lowercase() => {
                key.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => key.push(c),
        }
    }
    key
}

struct StyleParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> StyleParser<'a> {
    fn new(src: &'a str) -> Self {
        StyleParser { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn declarations(mut self) -> Result<Vec<(String, String)>, StyleSyntaxError> {
        let mut declarations = Vec::new();
        self.comments()?;
        while let Some(declaration) = self.declaration()? {
            declarations.push(declaration);
            self.comments()?;
        }
        Ok(declarations)
    }

    fn whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn comments(&mut self) -> Result<(), StyleSyntaxError> {
        self.whitespace();
        while self.comment()? {}
        Ok(())
    }

    fn comment(&mut self) -> Result<bool, StyleSyntaxError> {
        if !self.rest().starts_with("/*") {
            return Ok(false);
        }
        match self.src[self.pos + 2..].find("*/") {
            Some(end) => {
                self.pos += 2 + end + 2;
                self.whitespace();
                Ok(true)
            }
            None => Err(StyleSyntaxError::new("End of comment missing", self.pos)),
        }
    }

    fn declaration(&mut self) -> Result<Option<(String, String)>, StyleSyntaxError> {
        let Some(property) = self.property() else {
            return Ok(None);
        };
        self.comment()?;

        if !self.rest().starts_with(':') {
            return Err(StyleSyntaxError::new("property missing ':'", self.pos));
        }
        self.pos += 1;
        self.whitespace();

        let value = self.value();

        let rest = self.rest();
        let skipped = rest.len()
            - rest
                .trim_start_matches(|c: char| c == ';' || c.is_whitespace())
                .len();
        self.pos += skipped;

        Ok(Some((
            strip_comments(property).trim().to_string(),
            strip_comments(value).trim().to_string(),
        )))
    }

    /// `*?[-#/*\\\w]+` with an optional `[hack]` suffix, then whitespace.
    fn property(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let bytes = self.src.as_bytes();
        let mut i = start;
        if bytes.get(i) == Some(&b'*') {
            i += 1;
        }
        let name_start = i;
        while bytes.get(i).is_some_and(|b| is_property_byte(*b)) {
            i += 1;
        }
        if i == name_start {
            return None;
        }
        if bytes.get(i) == Some(&b'[') {
            let mut j = i + 1;
            while bytes.get(j).is_some_and(|b| is_hack_byte(*b)) {
                j += 1;
            }
            if j > i + 1 && bytes.get(j) == Some(&b']') {
                i = j + 1;
            }
        }
        self.pos = i;
        let property = &self.src[start..i];
        self.whitespace();
        Some(property)
    }

    /// Everything up to a top-level `;` or `}`. Quoted strings and
    /// parenthesised groups may contain either.
    fn value(&mut self) -> &'a str {
        let start = self.pos;
        loop {
            let rest = self.rest();
            let Some(c) = rest.chars().next() else { break };
            let consumed = match c {
                '\'' | '"' => quoted_len(rest, c).unwrap_or(1),
                '(' => rest.find(')').map_or(1, |end| end + 1),
                '}' | ';' => break,
                other => other.len_utf8(),
            };
            self.pos += consumed;
        }
        &self.src[start..self.pos]
    }
}

fn is_property_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'#' | b'/' | b'*' | b'\\')
}

fn is_hack_byte(b: u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_lowercase() || matches!(b, b'_' | b'-')
}

/// Length of a quoted string at the start of `text`, if it closes before a line break.
fn quoted_len(text: &str, quote: char) -> Option<usize> {
    let mut chars = text.char_indices().skip(1).peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            c if c == quote => return Some(i + c.len_utf8()),
            '\\' if chars.peek().is_some_and(|(_, next)| *next == quote) => {
                chars.next();
            }
            '\n' | '\r' | '\u{2028}' | '\u{2029}' => return None,
            _ => {}
        }
    }
    None
}

fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        match rest[start + 2..].find("*/") {
            Some(end) => {
                out.push_str(&rest[..start]);
                rest = &rest[start + 2 + end + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
