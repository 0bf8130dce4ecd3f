use crate::java::parser::ParsedSource;
use crate::tree::{NodeId, NodeKind, SyntaxTree};

/// Convert a tree-sitter CST into a [`SyntaxTree`].
///
/// Every node is kept, anonymous tokens included, so closing braces and
/// semicolons end up as the last leaves of the declarations they close. A
/// block comment gets one synthetic [`NodeKind::BlockCommentEnd`] child on
/// the line of its `*/`.
///
/// Variables are regrouped so that each declared name is its own
/// [`NodeKind::VariableDef`]:
/// - the first declarator of a declaration starts on the declaration's line,
///   and the terminating `;` hangs under the last declarator;
/// - the loop variable of an enhanced `for` gets a synthetic node holding its
///   modifiers, type and name.
pub fn lower(parsed: &ParsedSource<'_>) -> SyntaxTree {
    let root = parsed.root_node();
    let mut lowering = Lowering {
        tree: SyntaxTree::with_capacity(root.descendant_count()),
        parents: Vec::new(),
        loop_variable: None,
    };
    let mut cursor = root.walk();

    loop {
        let id = lowering.push(cursor.node(), cursor.field_name());

        if cursor.goto_first_child() {
            lowering.parents.push(id);
            continue;
        }

        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return lowering.tree;
            }
            lowering.parents.pop();
        }
    }
}

struct Lowering {
    tree: SyntaxTree,
    parents: Vec<NodeId>,
    /// Open loop variable as `(enhanced_for_statement, VariableDef)`.
    loop_variable: Option<(NodeId, NodeId)>,
}

impl Lowering {
    fn push(&mut self, node: tree_sitter::Node<'_>, field: Option<&str>) -> NodeId {
        let kind = NodeKind::from_java(node.kind());
        let mut start_line = node.start_position().row + 1;

        let id = match self.parents.last().copied() {
            Some(parent) => {
                if kind == NodeKind::VariableDef && self.opens_declaration(parent) {
                    start_line = self.tree.node(parent).start_line;
                }
                let parent = self.attach_point(parent, node, field);
                self.tree.push_child(parent, kind, start_line)
            }
            None => self.tree.push_top_level(kind, start_line),
        };

        if kind == NodeKind::BlockCommentBegin {
            self.tree
                .push_child(id, NodeKind::BlockCommentEnd, node.end_position().row + 1);
        }

        id
    }

    /// True when `parent` is a declaration statement with no variable yet.
    fn opens_declaration(&self, parent: NodeId) -> bool {
        is_variable_declaration(self.tree.node(parent).kind)
            && !self
                .tree
                .children(parent)
                .any(|child| self.tree.node(child).kind == NodeKind::VariableDef)
    }

    fn attach_point(
        &mut self,
        parent: NodeId,
        node: tree_sitter::Node<'_>,
        field: Option<&str>,
    ) -> NodeId {
        let parent_kind = self.tree.node(parent).kind;

        if is_variable_declaration(parent_kind) && node.kind() == ";" {
            return self
                .tree
                .node(parent)
                .last_child
                .filter(|&last| self.tree.node(last).kind == NodeKind::VariableDef)
                .unwrap_or(parent);
        }

        if parent_kind != NodeKind::Other("enhanced_for_statement") {
            return parent;
        }
        match self.loop_variable {
            Some((owner, _)) if owner == parent && node.kind() == ":" => {
                self.loop_variable = None;
                parent
            }
            Some((owner, variable)) if owner == parent => variable,
            _ if node.kind() == "modifiers" || field == Some("type") => {
                let line = node.start_position().row + 1;
                let variable = self.tree.push_child(parent, NodeKind::VariableDef, line);
                self.loop_variable = Some((parent, variable));
                variable
            }
            _ => parent,
        }
    }
}

fn is_variable_declaration(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Other(
            "field_declaration" | "local_variable_declaration" | "constant_declaration"
        )
    )
}
