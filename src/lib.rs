//! declscan: line-ranged declaration listings for Java sources
//!
//! Given a Java file and a list of wanted categories (`class`, `function`,
//! `field`, `comment`), declscan reports every matching declaration with the
//! inclusive line range it covers, in source order.
//!
//! # Architecture
//!
//! - [`java`] parses source with tree-sitter and lowers it into an arena
//!   [`tree::SyntaxTree`].
//! - [`extract`] walks that tree once in pre-order, classifies nodes, drops
//!   variables local to a method and computes line ranges.
//! - [`config`], [`analyze`] and [`report`] load the category list, run files
//!   (optionally in parallel) and render results as text.
//!
//! # Example
//!
//! ```no_run
//! use declscan::{analyze_source, RequestedKinds};
//!
//! let kinds: RequestedKinds = ["class", "function"].into_iter().collect();
//! let source = "class A {\n  void run() {\n  }\n}\n";
//!
//! for declaration in analyze_source(source, &kinds).unwrap() {
//!     println!("{declaration}");
//! }
//! ```

pub mod analyze;
pub mod config;
pub mod extract;
pub mod java;
pub mod logging;
pub mod pool;
pub mod report;
pub mod tree;

// Re-exports
pub use analyze::{
    analyze_file, analyze_files, analyze_source, discover_java_files, AnalysisError, FileReport,
};
pub use config::{load_from_path, load_from_str, ConfigError};
pub use extract::{extract, Category, Declaration, Declarations, RequestedKinds};
pub use java::{parse_java, JavaParser, ParseError};
pub use tree::{NodeId, NodeKind, SyntaxNode, SyntaxTree};
