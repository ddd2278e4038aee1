//! Property tests over generated trees and meta strings.

use mdx_code_props::{AttributeNameCase, CodeProps, TagName, parse_meta};
use mdx_hast::{Element, Node, Root};
use proptest::prelude::*;

fn tag_name() -> impl Strategy<Value = TagName> {
    prop_oneof![Just(TagName::Code), Just(TagName::Pre)]
}

/// Trees mixing `pre`, `code`, `div` and text, with no meta anywhere.
fn tree_without_meta() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-z ]{0,5}".prop_map(Node::text),
        Just(Node::element("code", vec![])),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        (
            prop::sample::select(vec!["pre", "code", "div"]),
            prop::collection::vec(inner, 0..3),
            any::<bool>(),
        )
            .prop_map(|(tag, children, empty_meta)| {
                let element = Element::new(tag, children);
                let element = if empty_meta { element.with_meta("") } else { element };
                Node::Element(element)
            })
    })
}

/// Meta strings built from valid attributes, paired with their count.
fn meta_string() -> impl Strategy<Value = (String, usize)> {
    let attribute = prop_oneof![
        "[a-z][a-zA-Z0-9-]{0,6}",
        ("[a-z][a-z0-9]{0,6}", "[a-z0-9 ]{0,6}").prop_map(|(n, v)| format!("{}=\"{}\"", n, v)),
        ("[a-z][a-z0-9]{0,6}", "[1-9][0-9]{0,2}").prop_map(|(n, v)| format!("{}={{{}}}", n, v)),
        // Spread arguments start with `x` so none is a reserved word.
        "x[a-z]{0,5}".prop_map(|a| format!("{{...{}}}", a)),
    ];
    prop::collection::vec(attribute, 1..6).prop_map(|items| {
        let count = items.len();
        (items.join(" "), count)
    })
}

fn lone_code(meta: &str) -> Root {
    Root::new(vec![Element::new("code", vec![Node::text("x")]).with_meta(meta).into()])
}

proptest! {
    #[test]
    fn trees_without_meta_are_unchanged(
        children in prop::collection::vec(tree_without_meta(), 0..4),
        tag_name in tag_name(),
    ) {
        let tree = Root::new(children);
        let mut transformed = tree.clone();
        let count = CodeProps::with_target(tag_name, AttributeNameCase::React)
            .transform(&mut transformed)
            .unwrap();
        prop_assert_eq!(count, 0);
        prop_assert_eq!(transformed, tree);
    }

    #[test]
    fn meta_attributes_follow_source_order((meta, count) in meta_string()) {
        let parsed = parse_meta(&meta, "code").unwrap();
        prop_assert_eq!(parsed.len(), count);
    }

    #[test]
    fn element_without_properties_gets_exactly_the_meta_attributes((meta, _) in meta_string()) {
        let mut tree = lone_code(&meta);
        CodeProps::with_target(TagName::Code, AttributeNameCase::React)
            .transform(&mut tree)
            .unwrap();

        let Node::MdxFlowExpression(expression) = &tree.children[0] else {
            panic!("expected a synthesized node");
        };
        let element = expression.element.as_ref().unwrap();
        prop_assert_eq!(&element.attributes, &parse_meta(&meta, "code").unwrap());
        prop_assert_eq!(&element.children, &vec![Node::text("x")]);
    }

    #[test]
    fn transform_runs_once_per_block(
        (meta, _) in meta_string(),
        blocks in 1usize..5,
        tag_name in tag_name(),
    ) {
        let code = Element::new("code", vec![Node::text("x")]).with_meta(meta.as_str());
        let children = (0..blocks)
            .map(|_| Node::element("pre", vec![code.clone().into()]))
            .collect();
        let mut tree = Root::new(children);

        let transform = CodeProps::with_target(tag_name, AttributeNameCase::React);
        prop_assert_eq!(transform.transform(&mut tree).unwrap(), blocks);

        let again = tree.clone();
        prop_assert_eq!(transform.transform(&mut tree).unwrap(), 0);
        prop_assert_eq!(tree, again);
    }
}
