use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BioteaError {
    #[error("container registry at {url} is unreachable: {reason}")]
    RegistryUnreachable { url: String, reason: String },
    #[error("container runtime `{runtime}` is unavailable: {reason}")]
    RuntimeUnavailable { runtime: String, reason: String },
    #[error("GEO series '{0}' was not found")]
    SeriesNotFound(String),
    #[error("GEO at {url} is unreachable: {reason}")]
    GeoUnreachable { url: String, reason: String },
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid argument: {0}")]
    ArgumentValidation(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BioteaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
