//! Batch conversion of a directory of HTML files to Markdown.
//!
//! Enumerates `*.html` directly under the input directory (non-recursive),
//! converts each file and writes the result to the output directory under
//! the same base name with a `.md` extension. Failures are collected per
//! file; one bad input does not abort the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::generator;

/// What to do when a destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Replace the existing file.
    Overwrite,
    /// Leave the existing file untouched.
    Skip,
    /// Report the file as failed.
    Fail,
}

impl Default for OverwritePolicy {
    fn default() -> Self {
        OverwritePolicy::Overwrite
    }
}

impl std::str::FromStr for OverwritePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Ok(OverwritePolicy::Overwrite),
            "skip" => Ok(OverwritePolicy::Skip),
            "fail" => Ok(OverwritePolicy::Fail),
            other => Err(format!(
                "unknown overwrite mode '{}' (expected overwrite, skip or fail)",
                other
            )),
        }
    }
}

/// Locations and policy for a single batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub overwrite: OverwritePolicy,
}

/// One input file that could not be converted.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: ConvertError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Output paths that were written.
    pub converted: Vec<PathBuf>,
    /// Input paths left alone because their destination already existed.
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<FileFailure>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert every `*.html` file directly under `options.input_dir`.
///
/// The output directory is created if it does not exist. Returns the run
/// summary; only enumeration and output-directory failures abort the run.
pub fn run(options: &BatchOptions) -> Result<BatchSummary> {
    if !options.input_dir.is_dir() {
        log::warn!(
            "input directory {} does not exist, nothing to convert",
            options.input_dir.display()
        );
    }

    let pattern = options.input_dir.join("*.html");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| ConvertError::InvalidPath(options.input_dir.clone()))?;

    fs::create_dir_all(&options.output_dir)?;

    let mut summary = BatchSummary::default();
    for entry in glob(pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                let path = e.path().to_path_buf();
                let error = ConvertError::Io(e.into_error());
                log::warn!("failed to read {}: {}", path.display(), error);
                summary.failed.push(FileFailure { path, error });
                continue;
            }
        };

        match convert_one(&path, options) {
            Ok(Some(dest)) => {
                log::info!("converted {} -> {}", path.display(), dest.display());
                summary.converted.push(dest);
            }
            Ok(None) => {
                log::info!("skipped {}, output already exists", path.display());
                summary.skipped.push(path);
            }
            Err(error) => {
                log::warn!("failed to convert {}: {}", path.display(), error);
                summary.failed.push(FileFailure { path, error });
            }
        }
    }

    Ok(summary)
}

/// Convert a single file, honoring the overwrite policy.
///
/// Returns the destination path on success, or `None` when an existing
/// destination was skipped.
fn convert_one(path: &Path, options: &BatchOptions) -> Result<Option<PathBuf>> {
    let dest = options.output_dir.join(markdown_name(path));

    if dest.exists() {
        match options.overwrite {
            OverwritePolicy::Overwrite => {}
            OverwritePolicy::Skip => return Ok(None),
            OverwritePolicy::Fail => return Err(ConvertError::OutputExists(dest)),
        }
    }

    let bytes = fs::read(path)?;
    let markdown = generator::html2md::run(&bytes)?;
    fs::write(&dest, markdown)?;

    Ok(Some(dest))
}

/// Output file name for an input file: same base name, extension replaced
/// by `.md`.
pub fn markdown_name(path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => Path::new(name).with_extension("md"),
        None => PathBuf::new(),
    }
}
