use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while converting HTML files to Markdown.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The conversion library could not produce Markdown from this input.
    #[error("conversion failed: {0}")]
    Conversion(String),

    /// The destination file exists and the policy forbids replacing it.
    #[error("output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// The input directory cannot be expressed as a search pattern.
    #[error("input directory is not a usable path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
