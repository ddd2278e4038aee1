/*
 * transform.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! The code props tree transform.

use crate::attributes::{merge_attributes, normalize_properties};
use crate::error::{CodePropsError, ConfigError, Result};
use crate::meta::parse_meta;
use crate::options::{AttributeNameCase, CodePropsOptions, TagName};
use crate::synthesize::synthesize;
use mdx_hast::{Element, JsxAttribute, Node, NodePath, Root, VisitAction, visit_parents};
use mdx_property_info::{HtmlPropertyTable, PropertyLookup};

/// A configured transform.
///
/// Configuration is validated once, when the transform is created; applying
/// it to a tree only fails on malformed meta or style text.
///
/// ```
/// use mdx_code_props::{CodeProps, CodePropsOptions, write_jsx};
/// use mdx_hast::{Element, Node, Root};
///
/// let code = Element::new("code", vec![Node::text("x")]).with_meta("title=\"a.js\"");
/// let mut root = Root::new(vec![Node::element("pre", vec![code.into()])]);
///
/// let transform = CodeProps::new(&CodePropsOptions::default()).unwrap();
/// assert_eq!(transform.transform(&mut root).unwrap(), 1);
/// assert_eq!(
///     write_jsx(&root).unwrap(),
///     r#"{<pre title="a.js"><code>{"x"}</code></pre>}"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeProps<L = HtmlPropertyTable> {
    tag_name: TagName,
    attribute_name_case: AttributeNameCase,
    lookup: L,
}

/// A replacement decided during traversal, applied afterwards.
struct Planned {
    path: NodePath,
    attributes: Vec<JsxAttribute>,
}

impl CodeProps {
    /// Validate `options` and build the transform.
    pub fn new(options: &CodePropsOptions) -> std::result::Result<Self, ConfigError> {
        let (tag_name, attribute_name_case) = options.resolve()?;
        Ok(Self::with_target(tag_name, attribute_name_case))
    }

    pub fn with_target(tag_name: TagName, attribute_name_case: AttributeNameCase) -> Self {
        CodeProps {
            tag_name,
            attribute_name_case,
            lookup: HtmlPropertyTable::new(),
        }
    }
}

impl Default for CodeProps {
    fn default() -> Self {
        Self::with_target(TagName::default(), AttributeNameCase::default())
    }
}

impl<L: PropertyLookup> CodeProps<L> {
    /// Use a different property table for name casing and value encoding.
    pub fn with_lookup<M: PropertyLookup>(self, lookup: M) -> CodeProps<M> {
        CodeProps {
            tag_name: self.tag_name,
            attribute_name_case: self.attribute_name_case,
            lookup,
        }
    }

    pub fn tag_name(&self) -> TagName {
        self.tag_name
    }

    pub fn attribute_name_case(&self) -> AttributeNameCase {
        self.attribute_name_case
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Replace every eligible code block in `root` with a synthesized
    /// expression node. Returns the number of nodes replaced.
    ///
    /// All meta and style text is parsed before the tree is touched, so on
    /// error `root` is left unchanged.
    pub fn transform(&self, root: &mut Root) -> Result<usize> {
        let planned = self.plan(root)?;
        let count = planned.len();

        for Planned { path, attributes } in planned {
            let Some(Node::Element(slot)) = root.node_at_mut(&path) else {
                continue;
            };
            let target = std::mem::replace(slot, Element::new(String::new(), Vec::new()));
            tracing::debug!(
                tag_name = %target.tag_name,
                attributes = attributes.len(),
                "synthesized code props node"
            );
            root.replace_at(&path, Node::MdxFlowExpression(synthesize(target, attributes)));
        }

        tracing::debug!(count, tag_name = %self.tag_name, "code props transform done");
        Ok(count)
    }

    /// Find targets and build their attribute lists without mutating.
    fn plan(&self, root: &Root) -> Result<Vec<Planned>> {
        let mut planned = Vec::new();
        let mut failure: Option<CodePropsError> = None;

        visit_parents(root, |node, ancestors, path| {
            if failure.is_some() {
                return VisitAction::Skip;
            }
            let Node::Element(code) = node else {
                return VisitAction::Continue;
            };
            if !code.is("code") {
                return VisitAction::Continue;
            }
            let Some(meta) = code.meta().filter(|meta| !meta.is_empty()) else {
                return VisitAction::Continue;
            };
            let Some(target_path) = self.tag_name.select_target(ancestors, path) else {
                return VisitAction::Continue;
            };
            let target = match self.tag_name {
                TagName::Code => Some(code),
                TagName::Pre => ancestors.last().and_then(|a| a.as_element()),
            };
            let Some(target) = target else {
                return VisitAction::Continue;
            };

            match self.build_attributes(target, code, meta) {
                Ok(attributes) => planned.push(Planned {
                    path: target_path,
                    attributes,
                }),
                Err(err) => failure = Some(err),
            }
            VisitAction::Skip
        });

        match failure {
            Some(err) => Err(err),
            None => Ok(planned),
        }
    }

    fn build_attributes(&self, target: &Element, code: &Element, meta: &str) -> Result<Vec<JsxAttribute>> {
        let meta_attributes =
            parse_meta(meta, &target.tag_name).map_err(|source| CodePropsError::MetaSyntax {
                source,
                meta: meta.to_string(),
                position: code.position,
            })?;
        let existing = normalize_properties(target, &self.lookup, self.attribute_name_case)?;
        Ok(merge_attributes(existing, meta_attributes))
    }
}
