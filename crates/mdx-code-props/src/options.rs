/*
 * options.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Transform configuration.

use crate::error::ConfigError;
use mdx_hast::{Ancestor, Element, NodePath};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which element receives the meta attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagName {
    /// The `code` element itself.
    Code,
    /// The `pre` element wrapping the `code` element.
    #[default]
    Pre,
}

/// How property names are rendered as JSX attribute names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeNameCase {
    /// HTML attribute names (`class`, `for`).
    Html,
    /// React prop names (`className`, `htmlFor`).
    #[default]
    React,
}

impl TagName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagName::Code => "code",
            TagName::Pre => "pre",
        }
    }

    /// Path of the element that should be replaced for the `code` element at
    /// `path`, or `None` when the tree does not have the required shape.
    pub(crate) fn select_target(
        self,
        ancestors: &[Ancestor<'_>],
        path: &[usize],
    ) -> Option<NodePath> {
        match self {
            TagName::Code => Some(path.to_vec()),
            TagName::Pre => {
                let parent: &Element = ancestors.last()?.as_element()?;
                if !parent.is("pre") || parent.children.len() != 1 {
                    return None;
                }
                let (_, parent_path) = path.split_last()?;
                Some(parent_path.to_vec())
            }
        }
    }
}

impl AttributeNameCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeNameCase::Html => "html",
            AttributeNameCase::React => "react",
        }
    }
}

impl FromStr for TagName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(TagName::Code),
            "pre" => Ok(TagName::Pre),
            other => Err(ConfigError::InvalidTagName(other.to_string())),
        }
    }
}

impl FromStr for AttributeNameCase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(AttributeNameCase::Html),
            "react" => Ok(AttributeNameCase::React),
            other => Err(ConfigError::InvalidAttributeNameCase(other.to_string())),
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AttributeNameCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing options, as they appear in config files.
///
/// Values are kept as raw strings so that an unknown value is reported
/// with the transform's own message instead of a deserializer error.
///
/// ```
/// use mdx_code_props::CodePropsOptions;
///
/// let options: CodePropsOptions = serde_json::from_str(r#"{"tagName": "code"}"#).unwrap();
/// assert_eq!(options.tag_name.as_deref(), Some("code"));
/// assert!(options.attribute_name_case.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodePropsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name_case: Option<String>,
}

impl CodePropsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    pub fn with_attribute_name_case(mut self, case: impl Into<String>) -> Self {
        self.attribute_name_case = Some(case.into());
        self
    }

    /// Layer `overrides` on top of these options; set fields in `overrides` win.
    pub fn merge(self, overrides: CodePropsOptions) -> Self {
        CodePropsOptions {
            tag_name: overrides.tag_name.or(self.tag_name),
            attribute_name_case: overrides.attribute_name_case.or(self.attribute_name_case),
        }
    }

    /// Validate and resolve to typed settings, applying defaults.
    pub fn resolve(&self) -> Result<(TagName, AttributeNameCase), ConfigError> {
        let tag_name = match &self.tag_name {
            Some(value) => value.parse()?,
            None => TagName::default(),
        };
        let case = match &self.attribute_name_case {
            Some(value) => value.parse()?,
            None => AttributeNameCase::default(),
        };
        Ok((tag_name, case))
    }
}
