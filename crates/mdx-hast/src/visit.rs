//! Depth-first traversal with ancestor tracking.
//!
//! [`visit_parents`] walks a tree in preorder and hands the visitor every
//! node together with its ancestor chain (root first, direct parent last)
//! and the index path from the root. Paths stay valid across in-place
//! replacements, since replacing a node never shifts its siblings.

use crate::node::{Element, Node, Root};

/// A node that contains the node being visited.
#[derive(Debug, Clone, Copy)]
pub enum Ancestor<'a> {
    Root(&'a Root),
    Element(&'a Element),
}

impl<'a> Ancestor<'a> {
    pub fn as_element(&self) -> Option<&'a Element> {
        match self {
            Ancestor::Root(_) => None,
            Ancestor::Element(element) => Some(element),
        }
    }

    pub fn children(&self) -> &'a [Node] {
        match self {
            Ancestor::Root(root) => &root.children,
            Ancestor::Element(element) => &element.children,
        }
    }
}

/// Index path from the root: `[2, 0]` is the first child of the root's third child.
pub type NodePath = Vec<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    /// Descend into this node's children.
    Continue,
    /// Do not descend into this node's children.
    Skip,
}

/// Visit every node below `root` in preorder.
pub fn visit_parents<'a, F>(root: &'a Root, mut visitor: F)
where
    F: FnMut(&'a Node, &[Ancestor<'a>], &[usize]) -> VisitAction,
{
    let mut ancestors = vec![Ancestor::Root(root)];
    let mut path = Vec::new();
    walk(&root.children, &mut ancestors, &mut path, &mut visitor);
}

fn walk<'a, F>(
    children: &'a [Node],
    ancestors: &mut Vec<Ancestor<'a>>,
    path: &mut Vec<usize>,
    visitor: &mut F,
) where
    F: FnMut(&'a Node, &[Ancestor<'a>], &[usize]) -> VisitAction,
{
    for (index, node) in children.iter().enumerate() {
        path.push(index);
        let action = visitor(node, ancestors, path);
        if action == VisitAction::Continue {
            if let Node::Element(element) = node {
                ancestors.push(Ancestor::Element(element));
                walk(&element.children, ancestors, path, visitor);
                ancestors.pop();
            }
        }
        path.pop();
    }
}

impl Root {
    /// Resolve an index path to a node.
    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.children.get(*first)?;
        for index in rest {
            node = node.children()?.get(*index)?;
        }
        Some(node)
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.children.get_mut(*first)?;
        for index in rest {
            node = node.as_element_mut()?.children.get_mut(*index)?;
        }
        Some(node)
    }

    /// Replace the node at `path`, returning the node that was there.
    ///
    /// Siblings keep their positions; only the slot at `path` changes.
    pub fn replace_at(&mut self, path: &[usize], replacement: Node) -> Option<Node> {
        let slot = self.node_at_mut(path)?;
        Some(std::mem::replace(slot, replacement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_tree() -> Root {
        Root::new(vec![
            Node::element(
                "pre",
                vec![Node::element("code", vec![Node::text("a")])],
            ),
            Node::text("between"),
            Node::element(
                "div",
                vec![Node::element("p", vec![]), Node::element("code", vec![])],
            ),
        ])
    }

    #[test]
    fn test_preorder_with_paths() {
        let root = sample_tree();
        let mut seen = Vec::new();
        visit_parents(&root, |node, ancestors, path| {
            let label = match node {
                Node::Element(e) => e.tag_name.clone(),
                Node::Text(t) => format!("#{}", t.value),
                _ => "?".to_string(),
            };
            seen.push((label, ancestors.len(), path.to_vec()));
            VisitAction::Continue
        });

        assert_eq!(
            seen,
            vec![
                ("pre".to_string(), 1, vec![0]),
                ("code".to_string(), 2, vec![0, 0]),
                ("#a".to_string(), 3, vec![0, 0, 0]),
                ("#between".to_string(), 1, vec![1]),
                ("div".to_string(), 1, vec![2]),
                ("p".to_string(), 2, vec![2, 0]),
                ("code".to_string(), 2, vec![2, 1]),
            ]
        );
    }

    #[test]
    fn test_skip_does_not_descend() {
        let root = sample_tree();
        let mut count = 0;
        visit_parents(&root, |node, _, _| {
            count += 1;
            match node {
                Node::Element(e) if e.is("pre") => VisitAction::Skip,
                _ => VisitAction::Continue,
            }
        });
        assert_eq!(count, 5);
    }

    #[test]
    fn test_direct_parent_is_last_ancestor() {
        let root = sample_tree();
        visit_parents(&root, |node, ancestors, _| {
            if let Node::Element(e) = node {
                if e.is("code") {
                    let parent = ancestors.last().and_then(|a| a.as_element()).unwrap();
                    assert!(parent.is("pre") || parent.is("div"));
                }
            }
            VisitAction::Continue
        });
    }

    #[test]
    fn test_replace_at_keeps_siblings() {
        let mut root = sample_tree();
        let old = root.replace_at(&[2, 0], Node::text("replaced")).unwrap();
        assert!(matches!(old, Node::Element(ref e) if e.is("p")));

        let div = root.children[2].as_element().unwrap();
        assert_eq!(div.children.len(), 2);
        assert!(matches!(div.children[0], Node::Text(ref t) if t.value == "replaced"));
        assert!(matches!(div.children[1], Node::Element(ref e) if e.is("code")));
    }

    #[test]
    fn test_invalid_paths() {
        let mut root = sample_tree();
        assert!(root.node_at(&[]).is_none());
        assert!(root.node_at(&[9]).is_none());
        assert!(root.node_at(&[1, 0]).is_none());
        assert!(root.replace_at(&[0, 5], Node::text("x")).is_none());
    }

    fn arbitrary_tree() -> impl Strategy<Value = Node> {
        let leaf = "[a-z]{0,3}".prop_map(Node::text);
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(|children| Node::element("div", children))
        })
    }

    proptest! {
        #[test]
        fn every_visited_path_resolves_to_the_visited_node(children in prop::collection::vec(arbitrary_tree(), 0..4)) {
            let root = Root::new(children);
            let mut pairs = Vec::new();
            visit_parents(&root, |node, _, path| {
                pairs.push((node.clone(), path.to_vec()));
                VisitAction::Continue
            });
            for (node, path) in pairs {
                prop_assert_eq!(root.node_at(&path), Some(&node));
            }
        }
    }
}
