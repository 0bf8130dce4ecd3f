//! Arena-backed syntax tree consumed by the declaration extractor.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]. The
//! only way to add a node is to append it after everything already in its
//! sibling list, so a tree built in source order is acyclic, finite and
//! visited in source order by a pre-order walk.

pub mod kind;

pub use kind::NodeKind;

/// Index of a node inside the [`SyntaxTree`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// A single node with its navigation links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// 1-based line where the node's first token begins.
    pub start_line: usize,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl SyntaxNode {
    fn new(kind: NodeKind, start_line: usize, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            start_line,
            parent,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }

    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }
}

/// Owning arena for a parsed file.
///
/// Top-level nodes form a sibling chain that starts at [`SyntaxTree::root`].
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    root: Option<NodeId>,
    last_top_level: Option<NodeId>,
}

impl SyntaxTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First top-level node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different tree and is out of range.
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.0]
    }

    /// Append a node after the last top-level node.
    pub fn push_top_level(&mut self, kind: NodeKind, start_line: usize) -> NodeId {
        let id = self.alloc(SyntaxNode::new(kind, start_line, None));
        match self.last_top_level {
            Some(prev) => self.nodes[prev.0].next_sibling = Some(id),
            None => self.root = Some(id),
        }
        self.last_top_level = Some(id);
        id
    }

    /// Append a node as the last child of `parent`.
    pub fn push_child(&mut self, parent: NodeId, kind: NodeKind, start_line: usize) -> NodeId {
        let id = self.alloc(SyntaxNode::new(kind, start_line, Some(parent)));
        let prev = self.nodes[parent.0].last_child.replace(id);
        match prev {
            Some(prev) => self.nodes[prev.0].next_sibling = Some(id),
            None => self.nodes[parent.0].first_child = Some(id),
        }
        id
    }

    /// Every node id, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Iterate over the strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.node(id).parent,
        }
    }

    /// Iterate over the direct children of `id` in source order.
    pub fn children(&self, id: NodeId) -> Siblings<'_> {
        Siblings {
            tree: self,
            next: self.node(id).first_child,
        }
    }

    /// Iterate over the top-level nodes in source order.
    pub fn top_level(&self) -> Siblings<'_> {
        Siblings {
            tree: self,
            next: self.root,
        }
    }

    fn alloc(&mut self, node: SyntaxNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.node(id).parent;
        Some(id)
    }
}

pub struct Siblings<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Siblings<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.node(id).next_sibling;
        Some(id)
    }
}
