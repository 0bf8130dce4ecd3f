use crate::tree::{NodeId, SyntaxTree};

/// Inclusive line span of a node.
///
/// The end line is read from the deepest last descendant, reached by
/// following last-child links. When a node's last child is not its
/// lexically last token the result under-reports; callers accept that.
pub fn line_range(tree: &SyntaxTree, id: NodeId) -> (usize, usize) {
    let start_line = tree.node(id).start_line;

    let mut last = id;
    while let Some(child) = tree.node(last).last_child {
        last = child;
    }

    (start_line, tree.node(last).start_line)
}
