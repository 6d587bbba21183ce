use anyhow::Result;
use std::path::Path;

/// One authored table-of-contents entry: nesting level, raw title, 1-based
/// target page.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub level: u32,
    pub title: String,
    pub page_number: u32,
}

/// Smallest unit of styled text on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub font_size: f32,
}

/// What the section pipeline needs from a parsed document. Any PDF (or other)
/// backend exposing this shape is substitutable; tests use an in-memory fake.
pub trait DocumentSource {
    fn page_count(&self) -> usize;
    /// Authored outline entries; empty when the document has none.
    fn outline(&self) -> &[OutlineEntry];
    /// Full plain text of the page at `index` (0-based).
    fn page_text(&self, index: usize) -> &str;
    /// Styled spans of the page at `index` (0-based).
    fn page_spans(&self, index: usize) -> &[TextSpan];
}

/// Opens documents by path. Injected into the collection processor so the
/// parsing backend stays swappable.
pub trait DocumentOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentSource>>;
}
