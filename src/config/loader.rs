use crate::extract::RequestedKinds;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    InputFormat {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
}

impl ConfigError {
    fn with_path(self, path: &Path) -> Self {
        match self {
            ConfigError::InputFormat { path: None, source } => ConfigError::InputFormat {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(
                    f,
                    "failed to read declarations from {}: {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InputFormat { path, source } => match path {
                Some(path) => write!(
                    f,
                    "declarations must be a JSON array ({}): {}",
                    path.display(),
                    source
                ),
                None => write!(f, "declarations must be a JSON array: {}", source),
            },
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::InputFormat { source, .. } => Some(source),
        }
    }
}

/// Parse a JSON array of category names.
///
/// String elements are taken verbatim; any other element is kept in its JSON
/// text form and will never match a category.
pub fn load_from_str(input: &str) -> Result<RequestedKinds, ConfigError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let values: Vec<Value> = serde_json::from_str(input)
        .map_err(|source| ConfigError::InputFormat { path: None, source })?;

    let kinds: RequestedKinds = values
        .into_iter()
        .map(|value| match value {
            Value::String(name) => name,
            other => other.to_string(),
        })
        .collect();

    for name in kinds.unknown_names() {
        tracing::debug!(name, "requested declaration kind matches no category");
    }

    Ok(kinds)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<RequestedKinds, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents).map_err(|error| error.with_path(path))
}
