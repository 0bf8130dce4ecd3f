//! Plain-text rendering of per-file reports.
//!
//! Each file renders as its path on one line followed by one
//! `<category> - [<start>-<end>]` line per declaration.

use crate::analyze::FileReport;
use std::io::{self, Write};
use std::path::Path;

pub fn write_header<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", path.display())
}

pub fn write_report<W: Write>(out: &mut W, report: &FileReport) -> io::Result<()> {
    write_header(out, &report.path)?;
    for declaration in &report.declarations {
        writeln!(out, "{declaration}")?;
    }
    Ok(())
}
