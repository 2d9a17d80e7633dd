use html2md::parse_html;

use crate::error::{ConvertError, Result};

pub fn run(bytes: &[u8]) -> Result<String> {
    // Convert bytes to string
    let html_content = std::str::from_utf8(bytes)
        .map_err(|e| ConvertError::Conversion(format!("invalid UTF-8 encoding: {}", e)))?;

    // Parse HTML to Markdown
    let markdown = parse_html(html_content);

    // Blank output from non-blank input means the library found nothing it
    // could convert.
    if markdown.trim().is_empty() && !html_content.trim().is_empty() {
        return Err(ConvertError::Conversion(
            "empty or invalid HTML content".to_string(),
        ));
    }

    Ok(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_headings_and_emphasis() {
        let md = run(b"<h1>Title</h1><p>Hello <b>world</b></p>").unwrap();
        assert!(md.contains("# Title"), "missing heading in {:?}", md);
        assert!(md.contains("Hello **world**"), "missing emphasis in {:?}", md);
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = run(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ConvertError::Conversion(_)));
    }

    #[test]
    fn blank_input_converts_to_blank_markdown() {
        let md = run(b"  \n").unwrap();
        assert!(md.trim().is_empty());
    }
}
