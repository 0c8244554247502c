use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("source icon not found: {0}")]
    MissingSource(PathBuf),
    #[error("source icon must be square, got {width}x{height}")]
    NotSquare { width: u32, height: u32 },
    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid icon spec {path}: {source}")]
    Spec {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} exported icon(s) failed verification")]
    Verify(usize),
}
