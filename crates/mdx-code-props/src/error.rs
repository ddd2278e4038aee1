/*
 * error.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Error types for the code props transform.
//!
//! Structural mismatches (no meta, wrong parent) are not errors and never
//! reach this module. Everything here aborts the transform.

use mdx_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder, SourceSnippet, SourceSpan};
use mdx_hast::Position;
use thiserror::Error;

/// Result type alias for code props operations.
pub type Result<T> = std::result::Result<T, CodePropsError>;

/// Invalid transform configuration, raised before any tree is visited.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Expected tagName to be 'code' or 'pre', got: {0}")]
    InvalidTagName(String),

    #[error("Expected attributeNameCase to be 'html' or 'react', got: {0}")]
    InvalidAttributeNameCase(String),
}

/// The meta string is not valid JSX attribute syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at byte {offset})")]
pub struct MetaSyntaxError {
    pub message: String,
    /// Byte offset into the meta string.
    pub offset: usize,
}

impl MetaSyntaxError {
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        MetaSyntaxError {
            message: message.into(),
            offset,
        }
    }
}

/// A `style` property could not be parsed as CSS declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at byte {offset})")]
pub struct StyleSyntaxError {
    pub message: String,
    /// Byte offset into the style string.
    pub offset: usize,
}

impl StyleSyntaxError {
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        StyleSyntaxError {
            message: message.into(),
            offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodePropsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not parse code meta `{meta}`: {source}")]
    MetaSyntax {
        source: MetaSyntaxError,
        meta: String,
        /// Position of the code element carrying the meta.
        position: Option<Position>,
    },

    #[error("Could not parse `style` attribute on `{tag_name}`: {source}")]
    StyleSyntax {
        source: StyleSyntaxError,
        style: String,
        tag_name: String,
        position: Option<Position>,
    },
}

impl CodePropsError {
    /// Convert this error to a DiagnosticMessage with the appropriate M-* code.
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        match self {
            CodePropsError::Config(ConfigError::InvalidTagName(value)) => {
                DiagnosticMessageBuilder::error("Invalid tagName Option")
                    .with_code("M-1-1")
                    .problem(self.to_string())
                    .add_detail(format!("Got: `{}`", value))
                    .add_hint("Use `code` to attach props to the code element, or `pre` for its parent?")
                    .build()
            }

            CodePropsError::Config(ConfigError::InvalidAttributeNameCase(value)) => {
                DiagnosticMessageBuilder::error("Invalid attributeNameCase Option")
                    .with_code("M-1-2")
                    .problem(self.to_string())
                    .add_detail(format!("Got: `{}`", value))
                    .build()
            }

            CodePropsError::MetaSyntax {
                source,
                meta,
                position,
            } => {
                let mut builder = DiagnosticMessageBuilder::error("Invalid Code Meta")
                    .with_code("M-2-1")
                    .problem(source.message.clone())
                    .with_location(SourceSpan::point(source.offset))
                    .add_detail(format!("In code meta `{}`", meta));

                if let Some(position) = position {
                    builder = builder.add_info(format!(
                        "Code block at {}",
                        position.to_range_string()
                    ));
                }

                builder
                    .add_hint("Quote string values and wrap expressions in braces, as in `title=\"a\" lines={[1, 2]}`?")
                    .build()
            }

            CodePropsError::StyleSyntax {
                source,
                tag_name,
                position,
                ..
            } => {
                let mut builder = DiagnosticMessageBuilder::error("Invalid Style Attribute")
                    .with_code("M-2-2")
                    .problem(format!(
                        "Could not parse `style` attribute on `{}`: {}",
                        tag_name, source.message
                    ))
                    .with_location(SourceSpan::point(source.offset));

                if let Some(position) = position {
                    builder = builder.add_info(format!(
                        "Element at {}",
                        position.to_range_string()
                    ));
                }

                builder.build()
            }
        }
    }

    /// The text the diagnostic's location points into, if any.
    pub fn source_snippet(&self) -> Option<SourceSnippet> {
        match self {
            CodePropsError::Config(_) => None,
            CodePropsError::MetaSyntax { meta, .. } => {
                Some(SourceSnippet::new("code meta", meta.as_str()))
            }
            CodePropsError::StyleSyntax { style, .. } => {
                Some(SourceSnippet::new("style", style.as_str()))
            }
        }
    }

    /// Render the diagnostic as text, with the offending snippet when there is one.
    pub fn render(&self) -> String {
        self.to_diagnostic().to_text(self.source_snippet().as_ref())
    }
}
