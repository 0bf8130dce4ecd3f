//! Per-file parse-then-extract pipeline.
//!
//! Files are independent of each other, so a batch can run on a rayon pool;
//! results always come back in input order.

use crate::extract::{extract, Declaration, RequestedKinds};
use crate::java::{parse_java, ParseError};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl AnalysisError {
    /// The file or directory the error is about.
    pub fn path(&self) -> &Path {
        match self {
            AnalysisError::Io { path, .. }
            | AnalysisError::Parse { path, .. }
            | AnalysisError::Walk { path, .. } => path,
        }
    }
}

/// Declarations found in one file, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub declarations: Vec<Declaration>,
}

/// Parse Java `source` and extract the requested declarations.
pub fn analyze_source(
    source: &str,
    kinds: &RequestedKinds,
) -> Result<Vec<Declaration>, ParseError> {
    let tree = parse_java(source)?;
    Ok(extract(&tree, kinds))
}

/// Read, parse and extract a single file.
pub fn analyze_file(path: &Path, kinds: &RequestedKinds) -> Result<FileReport, AnalysisError> {
    let contents = fs::read_to_string(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source = contents.strip_prefix('\u{feff}').unwrap_or(&contents);

    let declarations = analyze_source(source, kinds).map_err(|source| AnalysisError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        declarations = declarations.len(),
        "analyzed file"
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        declarations,
    })
}

/// Expand the given paths into the list of files to analyze.
///
/// Plain paths are kept as given, even when they do not end in `.java`.
/// Directories are walked for `*.java` files in file-name order, skipping
/// hidden entries.
pub fn discover_java_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, AnalysisError> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        let before = files.len();
        for entry in walker {
            let entry = entry.map_err(|source| AnalysisError::Walk {
                path: path.clone(),
                source,
            })?;
            if entry.file_type().is_file() && is_java(entry.path()) {
                files.push(entry.into_path());
            }
        }

        if files.len() == before {
            tracing::warn!(path = %path.display(), "directory contains no .java files");
        }
    }

    Ok(files)
}

/// Analyze `files` in order.
///
/// The batch stops after the first failure, which is the last element
/// returned. With more than one job files are analyzed on a dedicated rayon
/// pool; a worker skips any file that comes after the earliest failure seen
/// so far, so every file before the reported failure is still analyzed.
pub fn analyze_files(
    files: &[PathBuf],
    kinds: &RequestedKinds,
    jobs: usize,
) -> Vec<Result<FileReport, AnalysisError>> {
    if jobs > 1 {
        match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
            Ok(pool) => {
                tracing::debug!(jobs, files = files.len(), "analyzing in parallel");
                let first_failure = AtomicUsize::new(usize::MAX);
                let outcomes: Vec<Option<_>> = pool.install(|| {
                    files
                        .par_iter()
                        .enumerate()
                        .map(|(index, path)| {
                            if index > first_failure.load(Ordering::Relaxed) {
                                return None;
                            }
                            let result = analyze_file(path, kinds);
                            if result.is_err() {
                                first_failure.fetch_min(index, Ordering::Relaxed);
                            }
                            Some(result)
                        })
                        .collect()
                });
                return up_to_first_failure(outcomes.into_iter().map_while(|outcome| outcome));
            }
            Err(err) => {
                tracing::warn!(error = %err, "falling back to sequential analysis");
            }
        }
    }

    up_to_first_failure(files.iter().map(|path| analyze_file(path, kinds)))
}

fn up_to_first_failure<I>(results: I) -> Vec<Result<FileReport, AnalysisError>>
where
    I: Iterator<Item = Result<FileReport, AnalysisError>>,
{
    let mut collected = Vec::new();
    for result in results {
        let failed = result.is_err();
        collected.push(result);
        if failed {
            break;
        }
    }
    collected
}

fn is_java(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("java")
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
