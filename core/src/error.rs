use std::{io, path::PathBuf};

use serde_json::Value;
use thiserror::Error;

/// coarse classification of a [`MapError`], used by the binaries for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    InvalidTileReference,
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse map: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid map: {0}")]
    Shape(String),

    #[error("invalid tile reference {value} in layer {layer} at index {index}")]
    InvalidTileReference {
        layer: usize,
        index: usize,
        value: Value,
    },
}

impl MapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MapError::Read { .. } | MapError::Write { .. } => ErrorKind::Io,
            MapError::Json(_) | MapError::Shape(_) => ErrorKind::Parse,
            MapError::InvalidTileReference { .. } => ErrorKind::InvalidTileReference,
        }
    }
}
