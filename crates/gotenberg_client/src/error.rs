use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::persist::PersistError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailureKind {
    InvalidRequest,
    Timeout,
    Network,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Body,
}

impl fmt::Display for TransportFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportFailureKind::InvalidRequest => write!(f, "invalid request"),
            TransportFailureKind::Timeout => write!(f, "timeout"),
            TransportFailureKind::Network => write!(f, "network error"),
            TransportFailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            TransportFailureKind::Body => write!(f, "failed to read response body"),
        }
    }
}

/// Failure reported by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportFailureKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("malformed archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("io error while extracting: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
    #[error("API responded with status code {status} instead of 200, error message: {message}")]
    ConversionFailed { status: u16, message: String },
    #[error("archive read failure: {0}")]
    Archive(#[from] ArchiveError),
    #[error("failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}
