use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while enumerating images or writing manifests.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("split ratio must be a positive integer, got {0}")]
    InvalidRatio(u32),
}

impl SplitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
