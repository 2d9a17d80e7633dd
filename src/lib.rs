pub mod batch;
pub mod config;
pub mod error;
pub mod generator;

use std::fs;
use std::path::Path;

use error::Result;

/// Convert a single HTML document to Markdown.
pub fn convert(html: &str) -> Result<String> {
    generator::html2md::run(html.as_bytes())
}

/// Read an HTML file and convert its contents to Markdown.
pub fn convert_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path.as_ref())?;
    generator::html2md::run(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_handles_plain_markup() {
        let md = convert("<p>Hello <b>world</b></p>").unwrap();
        assert!(md.contains("**world**"));
    }

    #[test]
    fn convert_from_path_reports_missing_file() {
        let err = convert_from_path("no-such-file.html").unwrap_err();
        assert!(matches!(err, error::ConvertError::Io(_)));
    }
}
