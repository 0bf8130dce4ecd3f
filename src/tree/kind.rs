/// Grammar-level tag of a syntax node.
///
/// Only the kinds the extractor cares about get their own variant. Every
/// other grammar symbol is carried through as [`NodeKind::Other`] with the
/// provider's own kind name, so trees stay faithful to the source even where
/// nothing is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A class definition (interfaces, enums and records are not classes).
    ClassDef,
    /// A method definition, abstract or with a body.
    MethodDef,
    /// A constructor definition.
    CtorDef,
    /// One declared variable: class field, interface constant, local or
    /// enhanced-for loop variable. `int a, b;` holds two of them.
    VariableDef,
    /// A `//` comment.
    SingleLineComment,
    /// The opening `/*` of a block comment.
    BlockCommentBegin,
    /// The closing `*/` of a block comment.
    BlockCommentEnd,
    /// Any other grammar symbol or token.
    Other(&'static str),
}

impl NodeKind {
    /// Map a tree-sitter Java kind name to a node kind.
    ///
    /// Each `variable_declarator` is one variable; the declaration statement
    /// around it stays opaque. `block_comment` maps to the comment's opening
    /// token; the provider adds the matching [`NodeKind::BlockCommentEnd`]
    /// child itself.
    pub fn from_java(kind: &'static str) -> Self {
        match kind {
            "class_declaration" => NodeKind::ClassDef,
            "method_declaration" => NodeKind::MethodDef,
            "constructor_declaration" => NodeKind::CtorDef,
            "variable_declarator" => NodeKind::VariableDef,
            "line_comment" => NodeKind::SingleLineComment,
            "block_comment" => NodeKind::BlockCommentBegin,
            other => NodeKind::Other(other),
        }
    }

    /// Short name used in debug output.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::ClassDef => "CLASS_DEF",
            NodeKind::MethodDef => "METHOD_DEF",
            NodeKind::CtorDef => "CTOR_DEF",
            NodeKind::VariableDef => "VARIABLE_DEF",
            NodeKind::SingleLineComment => "SINGLE_LINE_COMMENT",
            NodeKind::BlockCommentBegin => "BLOCK_COMMENT_BEGIN",
            NodeKind::BlockCommentEnd => "BLOCK_COMMENT_END",
            NodeKind::Other(kind) => kind,
        }
    }
}
