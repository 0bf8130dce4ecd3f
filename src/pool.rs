//! Thread-local parser pooling.
//!
//! Each thread (the main thread or a rayon worker) creates one
//! [`JavaParser`] on first use and reuses it for every later file.

use crate::java::{JavaParser, ParseError};
use std::cell::RefCell;

thread_local! {
    static JAVA_PARSER: RefCell<Option<JavaParser>> = const { RefCell::new(None) };
}

/// Execute function with pooled parser instance.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use declscan::pool::with_parser;
///
/// let _tree = with_parser(|parser| parser.parse("class A {}"))??;
/// # Ok(())
/// # }
/// ```
pub fn with_parser<F, R>(f: F) -> Result<R, ParseError>
where
    F: FnOnce(&mut JavaParser) -> R,
{
    JAVA_PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(JavaParser::new()?);
        }
        Ok(f(slot.as_mut().expect("parser was just initialized above")))
    })
}
