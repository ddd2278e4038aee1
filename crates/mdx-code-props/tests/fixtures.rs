//! End-to-end scenarios: hast JSON in, JSX preview out.

use mdx_code_props::{
    AttributeNameCase, CodeProps, CodePropsError, CodePropsOptions, JsxWriter, TagName, write_jsx,
};
use mdx_hast::{Node, Root};
use serde_json::json;

/// A fenced code block as the markdown stage produces it.
fn code_block(meta: Option<&str>) -> serde_json::Value {
    let mut code = json!({
        "type": "element",
        "tagName": "code",
        "properties": {"className": ["language-js"]},
        "children": [{"type": "text", "value": "console.log('Hello World!')\n"}],
        "position": {
            "start": {"line": 1, "column": 1, "offset": 0},
            "end": {"line": 3, "column": 4, "offset": 40}
        }
    });
    if let Some(meta) = meta {
        code["data"] = json!({"meta": meta});
    }
    json!({
        "type": "element",
        "tagName": "pre",
        "properties": {},
        "children": [code]
    })
}

fn root(children: Vec<serde_json::Value>) -> Root {
    serde_json::from_value(json!({"type": "root", "children": children})).unwrap()
}

fn run(mut tree: Root, tag_name: TagName) -> String {
    CodeProps::with_target(tag_name, AttributeNameCase::React)
        .transform(&mut tree)
        .unwrap();
    write_jsx(&tree).unwrap()
}

#[test]
fn jsx_expression_on_pre() {
    let tree = root(vec![code_block(Some("onClick={props.onClick}"))]);
    insta::assert_snapshot!(run(tree, TagName::Pre), @r#"{<pre onClick={props.onClick}><code className="language-js">{"console.log('Hello World!')\n"}</code></pre>}"#);
}

#[test]
fn jsx_expression_on_code() {
    let tree = root(vec![code_block(Some("onClick={props.onClick}"))]);
    insta::assert_snapshot!(run(tree, TagName::Code), @r#"<pre>{<code className="language-js" onClick={props.onClick}>{"console.log('Hello World!')\n"}</code>}</pre>"#);
}

#[test]
fn jsx_spread() {
    let tree = root(vec![code_block(Some("{...props}"))]);
    insta::assert_snapshot!(run(tree.clone(), TagName::Pre), @r#"{<pre {...props}><code className="language-js">{"console.log('Hello World!')\n"}</code></pre>}"#);
    insta::assert_snapshot!(run(tree, TagName::Code), @r#"<pre>{<code className="language-js" {...props}>{"console.log('Hello World!')\n"}</code>}</pre>"#);
}

#[test]
fn highlight_range_keeps_code_child() {
    let mut tree = root(vec![code_block(Some("highlight={1-3}"))]);
    CodeProps::default().transform(&mut tree).unwrap();

    let Node::MdxFlowExpression(expression) = &tree.children[0] else {
        panic!("expected a synthesized node");
    };
    let element = expression.element.as_ref().unwrap();
    assert_eq!(element.name, "pre");
    assert_eq!(element.attributes.len(), 1);
    let code = element.children[0].as_element().unwrap();
    assert!(code.is("code"));
    assert_eq!(code.meta(), Some("highlight={1-3}"));
}

#[test]
fn missing_or_empty_meta_is_untouched() {
    for meta in [None, Some("")] {
        for tag_name in [TagName::Pre, TagName::Code] {
            let tree = root(vec![code_block(meta)]);
            let mut transformed = tree.clone();
            let count = CodeProps::with_target(tag_name, AttributeNameCase::React)
                .transform(&mut transformed)
                .unwrap();
            assert_eq!(count, 0);
            assert_eq!(transformed, tree);
        }
    }
}

#[test]
fn code_without_parent() {
    let code = json!({
        "type": "element",
        "tagName": "code",
        "properties": {},
        "data": {"meta": "inline"},
        "children": [{"type": "text", "value": "x"}]
    });

    let tree = root(vec![code.clone()]);
    let mut pre_mode = tree.clone();
    assert_eq!(CodeProps::default().transform(&mut pre_mode).unwrap(), 0);
    assert_eq!(pre_mode, tree);

    insta::assert_snapshot!(run(root(vec![code]), TagName::Code), @r#"{<code inline>{"x"}</code>}"#);
}

#[test]
fn code_with_non_pre_parent() {
    let mut block = code_block(Some("title=\"a\""));
    block["tagName"] = json!("div");
    let tree = root(vec![block]);

    let mut pre_mode = tree.clone();
    assert_eq!(CodeProps::default().transform(&mut pre_mode).unwrap(), 0);
    assert_eq!(pre_mode, tree);

    insta::assert_snapshot!(run(tree, TagName::Code), @r#"<div>{<code className="language-js" title="a">{"console.log('Hello World!')\n"}</code>}</div>"#);
}

#[test]
fn pre_with_two_children_is_not_promoted() {
    let mut block = code_block(Some("title=\"a\""));
    block["children"]
        .as_array_mut()
        .unwrap()
        .push(json!({"type": "text", "value": "\n"}));
    let tree = root(vec![block]);

    let mut pre_mode = tree.clone();
    assert_eq!(CodeProps::default().transform(&mut pre_mode).unwrap(), 0);
    assert_eq!(pre_mode, tree);

    insta::assert_snapshot!(run(tree, TagName::Code), @r#"<pre>{<code className="language-js" title="a">{"console.log('Hello World!')\n"}</code>}{"\n"}</pre>"#);
}

#[test]
fn siblings_keep_their_order() {
    let tree = root(vec![
        json!({"type": "element", "tagName": "h1", "properties": {}, "children": [{"type": "text", "value": "Title"}]}),
        json!({"type": "text", "value": "\n"}),
        code_block(Some("a")),
        json!({"type": "text", "value": "\n"}),
        code_block(None),
        json!({"type": "text", "value": "\n"}),
        code_block(Some("b")),
    ]);
    let mut transformed = tree.clone();
    assert_eq!(CodeProps::default().transform(&mut transformed).unwrap(), 2);
    assert_eq!(transformed.children.len(), tree.children.len());

    insta::assert_snapshot!(write_jsx(&transformed).unwrap(), @r#"
    <h1>{"Title"}</h1>
    {<pre a><code className="language-js">{"console.log('Hello World!')\n"}</code></pre>}
    <pre><code className="language-js">{"console.log('Hello World!')\n"}</code></pre>
    {<pre b><code className="language-js">{"console.log('Hello World!')\n"}</code></pre>}
    "#);
}

#[test]
fn style_property_becomes_object() {
    let mut block = code_block(Some("title=\"x\""));
    block["properties"] = json!({"style": "background-color:tomato;"});
    let tree = root(vec![block]);

    insta::assert_snapshot!(run(tree, TagName::Pre), @r#"{<pre style={{backgroundColor: "tomato"}} title="x"><code className="language-js">{"console.log('Hello World!')\n"}</code></pre>}"#);
}

#[test]
fn property_values_are_normalized() {
    // json! maps are sorted, so properties arrive in key order.
    let code = json!({
        "type": "element",
        "tagName": "code",
        "properties": {
            "className": ["language-js", "line-numbers"],
            "hidden": true,
            "disabled": false,
            "tabIndex": 42,
            "accept": ["a", "b"],
            "dataLine": "3"
        },
        "data": {"meta": "title=\"x\""},
        "children": []
    });
    let tree = root(vec![code]);

    let mut react = tree.clone();
    CodeProps::with_target(TagName::Code, AttributeNameCase::React)
        .transform(&mut react)
        .unwrap();
    insta::assert_snapshot!(write_jsx(&react).unwrap(), @r#"{<code accept="a, b" className="language-js line-numbers" data-line="3" hidden tabIndex="42" title="x" />}"#);

    let mut html = tree;
    CodeProps::with_target(TagName::Code, AttributeNameCase::Html)
        .transform(&mut html)
        .unwrap();
    let jsx = JsxWriter::new(AttributeNameCase::Html).write(&html).unwrap();
    insta::assert_snapshot!(jsx, @r#"{<code accept="a, b" class="language-js line-numbers" data-line="3" hidden tabindex="42" title="x" />}"#);
}

#[test]
fn duplicate_names_are_kept() {
    let mut block = code_block(Some("className=\"override\""));
    block["children"][0]["properties"] = json!({"className": ["language-js"]});
    let tree = root(vec![block]);
    insta::assert_snapshot!(run(tree, TagName::Code), @r#"<pre>{<code className="language-js" className="override">{"console.log('Hello World!')\n"}</code>}</pre>"#);
}

#[test]
fn invalid_tag_name_fails_at_setup() {
    let err = CodeProps::new(&CodePropsOptions::new().with_tag_name("div")).unwrap_err();
    assert_eq!(err.to_string(), "Expected tagName to be 'code' or 'pre', got: div");
}

#[test]
fn malformed_meta_fails_the_document() {
    let mut tree = root(vec![code_block(Some("title=\"unclosed"))]);
    let err = CodeProps::default().transform(&mut tree).unwrap_err();

    let CodePropsError::MetaSyntax { source, meta, position } = &err else {
        panic!("expected a meta syntax error, got {err:?}");
    };
    assert!(source.offset <= meta.len());
    assert_eq!(meta, "title=\"unclosed");
    assert_eq!(position.map(|p| p.start.line), Some(1));

    let rendered = err.render();
    assert!(rendered.contains("[M-2-1] Invalid Code Meta"));
    assert!(rendered.contains(&source.message));
    assert!(rendered.contains("Code block at 1:1-3:4"));
}

#[test]
fn malformed_style_fails_the_document() {
    let mut block = code_block(Some("a"));
    block["properties"] = json!({"style": "color"});
    let mut tree = root(vec![block]);

    let err = CodeProps::default().transform(&mut tree).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Could not parse `style` attribute on `pre`: property missing ':' (at byte 5)"
    );
    assert_eq!(err.to_diagnostic().code.as_deref(), Some("M-2-2"));
}

#[test]
fn synthesized_node_serializes_as_flow_expression() {
    let mut tree = root(vec![code_block(Some("a"))]);
    CodeProps::default().transform(&mut tree).unwrap();

    let json = serde_json::to_value(&tree).unwrap();
    let node = &json["children"][0];
    assert_eq!(node["type"], "mdxFlowExpression");
    assert_eq!(node["value"], "");
    assert_eq!(node["element"]["name"], "pre");
    assert_eq!(node["element"]["attributes"][0]["name"], "a");
    assert_eq!(node["element"]["children"][0]["tagName"], "code");

    let back: Root = serde_json::from_value(json).unwrap();
    assert_eq!(back, tree);
}
