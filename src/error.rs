//! Error types for file conversion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur around a conversion. Rendering itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Usage: markdown2html README.md README.html")]
    Usage,

    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
