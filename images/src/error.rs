//! Conversion error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot read image directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode {path} as WebP: {reason}")]
    WebP { path: PathBuf, reason: String },

    #[error("cannot encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ConvertError {
    /// File the error is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::ReadDir { path, .. }
            | Self::Open { path, .. }
            | Self::Decode { path, .. }
            | Self::Write { path, .. }
            | Self::WebP { path, .. }
            | Self::Encode { path, .. } => path,
        }
    }
}
