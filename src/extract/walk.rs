use crate::extract::range::line_range;
use crate::extract::scope::is_method_local;
use crate::extract::{Category, Declaration, RequestedKinds};
use crate::tree::{NodeId, SyntaxTree};

/// Lazy pre-order walk yielding accepted declarations in source order.
///
/// Uses an explicit stack, so deeply nested sources cannot overflow the
/// thread's call stack.
pub struct Declarations<'a> {
    tree: &'a SyntaxTree,
    requested: &'a RequestedKinds,
    stack: Vec<NodeId>,
}

impl<'a> Declarations<'a> {
    pub fn new(tree: &'a SyntaxTree, requested: &'a RequestedKinds) -> Self {
        Self {
            tree,
            requested,
            stack: tree.root().into_iter().collect(),
        }
    }

    fn accept(&self, id: NodeId) -> Option<Declaration> {
        let kind = self.tree.node(id).kind;
        let category = Category::of(kind)?;
        if !self.requested.accepts(category) {
            return None;
        }
        if category == Category::Field && is_method_local(self.tree, id) {
            tracing::trace!(
                kind = kind.name(),
                line = self.tree.node(id).start_line,
                "skipping method-local variable"
            );
            return None;
        }

        let (start_line, end_line) = line_range(self.tree, id);
        Some(Declaration {
            category,
            start_line,
            end_line,
        })
    }
}

impl Iterator for Declarations<'_> {
    type Item = Declaration;

    fn next(&mut self) -> Option<Declaration> {
        while let Some(id) = self.stack.pop() {
            let node = self.tree.node(id);
            // Sibling goes under the child so the whole subtree is visited first.
            if let Some(sibling) = node.next_sibling {
                self.stack.push(sibling);
            }
            if let Some(child) = node.first_child {
                self.stack.push(child);
            }

            if let Some(declaration) = self.accept(id) {
                return Some(declaration);
            }
        }
        None
    }
}

/// Collect every accepted declaration of `tree`.
pub fn extract(tree: &SyntaxTree, requested: &RequestedKinds) -> Vec<Declaration> {
    Declarations::new(tree, requested).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    fn kinds(names: &[&str]) -> RequestedKinds {
        names.iter().copied().collect()
    }

    fn rendered(tree: &SyntaxTree, requested: &RequestedKinds) -> Vec<String> {
        extract(tree, requested)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// class (1) { method (2..5) { variable (3) } }
    fn class_with_method_local() -> SyntaxTree {
        let mut tree = SyntaxTree::new();
        let class = tree.push_top_level(NodeKind::ClassDef, 1);
        let method = tree.push_child(class, NodeKind::MethodDef, 2);
        tree.push_child(method, NodeKind::VariableDef, 3);
        tree.push_child(method, NodeKind::Other("}"), 5);
        tree
    }

    #[test]
    fn method_local_variable_is_skipped() {
        let tree = class_with_method_local();
        assert_eq!(
            rendered(&tree, &kinds(&["class", "function", "field"])),
            vec!["class - [1-5]", "function - [2-5]"]
        );
    }

    #[test]
    fn only_method_local_fields_yield_nothing() {
        let tree = class_with_method_local();
        assert!(extract(&tree, &kinds(&["field"])).is_empty());
    }

    #[test]
    fn lone_block_comment() {
        let mut tree = SyntaxTree::new();
        tree.push_top_level(NodeKind::BlockCommentBegin, 7);
        assert_eq!(rendered(&tree, &kinds(&["comment"])), vec!["comment - [7-7]"]);
    }

    #[test]
    fn class_level_field() {
        let mut tree = SyntaxTree::new();
        let class = tree.push_top_level(NodeKind::ClassDef, 1);
        tree.push_child(class, NodeKind::VariableDef, 2);
        assert_eq!(rendered(&tree, &kinds(&["field"])), vec!["field - [2-2]"]);
    }

    #[test]
    fn constructor_local_is_reported() {
        let mut tree = SyntaxTree::new();
        let class = tree.push_top_level(NodeKind::ClassDef, 1);
        let ctor = tree.push_child(class, NodeKind::CtorDef, 2);
        let body = tree.push_child(ctor, NodeKind::Other("constructor_body"), 2);
        tree.push_child(body, NodeKind::VariableDef, 3);
        tree.push_child(body, NodeKind::Other("}"), 4);

        assert_eq!(
            rendered(&tree, &kinds(&["function", "field"])),
            vec!["function - [2-4]", "field - [3-3]"]
        );
    }

    #[test]
    fn walks_every_top_level_node() {
        let mut tree = SyntaxTree::new();
        tree.push_top_level(NodeKind::SingleLineComment, 1);
        tree.push_top_level(NodeKind::Other("package_declaration"), 2);
        let class = tree.push_top_level(NodeKind::ClassDef, 4);
        tree.push_child(class, NodeKind::SingleLineComment, 5);
        tree.push_child(class, NodeKind::Other("}"), 6);
        tree.push_top_level(NodeKind::SingleLineComment, 8);

        assert_eq!(
            rendered(&tree, &kinds(&["class", "comment"])),
            vec![
                "comment - [1-1]",
                "class - [4-6]",
                "comment - [5-5]",
                "comment - [8-8]",
            ]
        );
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree = SyntaxTree::new();
        assert!(extract(&tree, &RequestedKinds::all()).is_empty());
    }

    #[test]
    fn unknown_names_yield_nothing() {
        let tree = class_with_method_local();
        assert!(extract(&tree, &kinds(&["property", "namespace"])).is_empty());
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let mut tree = SyntaxTree::new();
        let mut parent = tree.push_top_level(NodeKind::ClassDef, 1);
        for line in 2..200_000 {
            parent = tree.push_child(parent, NodeKind::Other("block"), line);
        }
        tree.push_child(parent, NodeKind::SingleLineComment, 200_000);

        let found = extract(&tree, &kinds(&["class", "comment"]));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].end_line, 200_000);
    }
}
