//! PDF analyzer
//!
//! Runs `pdfinfo` and reports the first page's dimensions in points plus
//! the page count. Later pages are not inspected.

use std::collections::HashMap;

use mediaprobe_core::Metadata;

use crate::invoker::ProcessInvoker;
use crate::parsers::pdfinfo;
use crate::resolver::ResolvedFile;

pub struct PdfAnalyzer {
    invoker: ProcessInvoker,
}

impl PdfAnalyzer {
    pub fn new(pdfinfo_path: impl Into<String>) -> Self {
        Self {
            invoker: ProcessInvoker::new(pdfinfo_path),
        }
    }

    /// `{width, height, pages}`, or empty when pdfinfo is unavailable,
    /// fails, or reports nothing parseable.
    pub async fn metadata(&self, file: &ResolvedFile) -> Metadata {
        if file.is_empty() {
            return Metadata::new();
        }
        let result = match self.invoker.run(&[], file.path()).await {
            Ok(result) => result,
            Err(_) => return Metadata::new(),
        };
        if !result.success {
            return Metadata::new();
        }
        metadata_from_fields(&pdfinfo::parse(&result.stdout))
    }
}

fn metadata_from_fields(fields: &HashMap<String, String>) -> Metadata {
    let mut metadata = Metadata::new();
    if let Some((width, height)) = pdfinfo::page_dimensions(fields) {
        metadata.set("width", width);
        metadata.set("height", height);
    }
    if let Some(pages) = pdfinfo::page_count(fields) {
        metadata.set("pages", pages);
    }
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_stdout(stdout: &str) -> Metadata {
        metadata_from_fields(&pdfinfo::parse(stdout))
    }

    #[test]
    fn test_square_two_page_document() {
        let metadata = from_stdout("Page size:      150 x 150 pts\nPages:          2\n");
        assert_eq!(metadata.get_u64("width"), Some(150));
        assert_eq!(metadata.get_u64("height"), Some(150));
        assert_eq!(metadata.get_u64("pages"), Some(2));
    }

    #[test]
    fn test_letter_page_size_with_label() {
        let metadata = from_stdout("Page size: 612 x 792 pts (letter)\nPages: 1\n");
        assert_eq!(metadata.get_u64("width"), Some(612));
        assert_eq!(metadata.get_u64("height"), Some(792));
    }

    #[test]
    fn test_fields_are_independent() {
        let metadata = from_stdout("Pages: 4\n");
        assert_eq!(metadata.get("width"), None);
        assert_eq!(metadata.get_u64("pages"), Some(4));
    }

    #[test]
    fn test_unparseable_output_yields_empty_metadata() {
        assert!(from_stdout("this is not pdfinfo output").is_empty());
        assert!(from_stdout("").is_empty());
    }
}
