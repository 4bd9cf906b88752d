use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SummaryError>;

/// Fatal failures of a summarization call. Capacity overflows are not errors.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("out of memory while building {stage}")]
    OutOfMemory { stage: &'static str },
}

impl SummaryError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    pub(crate) fn oom(stage: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |_| Self::OutOfMemory { stage }
    }
}
