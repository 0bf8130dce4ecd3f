//! Declaration extraction over a [`SyntaxTree`](crate::tree::SyntaxTree).
//!
//! The walk classifies every node, keeps the ones whose category was
//! requested, drops variable definitions that live inside a method, and
//! reports each survivor with its line span. Every operation here is total:
//! a well-formed tree and a set of names cannot make extraction fail.

pub mod classify;
pub mod range;
pub mod requested;
pub mod scope;
pub mod walk;

pub use classify::Category;
pub use range::line_range;
pub use requested::RequestedKinds;
pub use scope::is_method_local;
pub use walk::{extract, Declarations};

use std::fmt;

/// One reported declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    pub category: Category,
    pub start_line: usize,
    pub end_line: usize,
}

/// Renders as `<category> - [<start>-<end>]`.
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - [{}-{}]",
            self.category, self.start_line, self.end_line
        )
    }
}
