use crate::tree::{NodeId, NodeKind, SyntaxTree};

/// Whether a variable definition sits somewhere inside a method.
///
/// Only method ancestors count. Variables declared in constructor bodies are
/// still reported as fields.
pub fn is_method_local(tree: &SyntaxTree, id: NodeId) -> bool {
    tree.ancestors(id)
        .any(|ancestor| tree.node(ancestor).kind == NodeKind::MethodDef)
}
