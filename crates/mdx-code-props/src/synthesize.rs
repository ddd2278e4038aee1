//! Building the replacement node for a matched element.

use mdx_hast::{Element, JsxAttribute, JsxElement, MdxFlowExpression};

/// Turn `target` into an expression node carrying a JSX element with the
/// given attributes.
///
/// The element's children, data and position move over unchanged.
pub fn synthesize(target: Element, attributes: Vec<JsxAttribute>) -> MdxFlowExpression {
    let Element {
        tag_name,
        children,
        data,
        position,
        ..
    } = target;

    MdxFlowExpression {
        value: String::new(),
        element: Some(JsxElement::new(tag_name, attributes, children)),
        data,
        position,
    }
}
