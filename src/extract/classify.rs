use crate::tree::NodeKind;
use std::fmt;

/// Semantic label reported for a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Class,
    Function,
    Field,
    Comment,
}

impl Category {
    /// Every category, in the order they are documented.
    pub const ALL: [Category; 4] = [
        Category::Class,
        Category::Function,
        Category::Field,
        Category::Comment,
    ];

    /// Classify a node kind, returning `None` for anything that is not a
    /// declaration.
    pub const fn of(kind: NodeKind) -> Option<Category> {
        match kind {
            NodeKind::ClassDef => Some(Category::Class),
            NodeKind::MethodDef | NodeKind::CtorDef => Some(Category::Function),
            NodeKind::VariableDef => Some(Category::Field),
            NodeKind::SingleLineComment | NodeKind::BlockCommentBegin => Some(Category::Comment),
            NodeKind::BlockCommentEnd | NodeKind::Other(_) => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Class => "class",
            Category::Function => "function",
            Category::Field => "field",
            Category::Comment => "comment",
        }
    }

    /// Look up a category by the name used in declaration lists.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
