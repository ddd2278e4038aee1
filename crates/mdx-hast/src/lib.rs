/*
 * lib.rs
 * Copyright (c) 2026 Posit, PBC
 *
 * Element tree type definitions for MDX code props.
 *
 * This crate provides pure data type definitions for the hast element
 * tree that flows through the MDX rehype stage, plus the JSX attribute
 * model that synthesized nodes carry. It has minimal dependencies
 * (serde, hashlink) and serializes to the same JSON shape as hast.
 */

pub mod jsx;
pub mod node;
pub mod position;
pub mod properties;
pub mod visit;

// Re-export commonly used types at the crate root
pub use jsx::{JsxAttribute, JsxAttributeValue, JsxElement, JsxExpression};
pub use node::{
    Comment, Doctype, Element, ElementData, MdxFlowExpression, Node, Raw, Root, Text,
};
pub use position::{Point, Position};
pub use properties::{Properties, PropertyValue};
pub use visit::{Ancestor, NodePath, VisitAction, visit_parents};
