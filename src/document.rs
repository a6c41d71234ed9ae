//! Per-document index composing line offsets, lowercase text, and page
//! boundaries.

use crate::{
    chapters,
    lines::LineIndex,
    pages::{self, PageBoundary, PageConfig},
};

/// An indexed document ready for keyword search.
///
/// Owns the raw text plus everything derived from it at load time: an ASCII
/// lowercase copy for case-insensitive matching (byte offsets line up with
/// the original exactly), the line-end offset table, and the resolved page
/// boundaries. Immutable once built.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    text: String,
    text_lower: String,
    lines: LineIndex,
    pages: Vec<PageBoundary>,
}

impl Document {
    /// Index raw text under the given display name.
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        config: &PageConfig,
    ) -> Self {
        let text = text.into();
        let lines = LineIndex::new(&text);
        let pages = pages::resolve_boundaries(&text, &lines, config);
        let text_lower = text.to_ascii_lowercase();
        Self {
            name: name.into(),
            text,
            text_lower,
            lines,
            pages,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase copy of the text; byte offsets match the original.
    pub fn text_lower(&self) -> &str {
        &self.text_lower
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn boundaries(&self) -> &[PageBoundary] {
        &self.pages
    }

    /// Text of a 1-based line, without its line ending.
    pub fn line_at(&self, line_number: usize) -> Option<&str> {
        let (start, end) = self.lines.line_span(line_number)?;
        Some(self.text[start..end].trim_end_matches('\r'))
    }

    /// 1-based number of the line containing `offset`.
    pub fn line_number_at(&self, offset: usize) -> usize {
        self.lines.line_number_at(offset)
    }

    /// Page containing `offset`, or `None` when no boundary covers it.
    pub fn page_at(&self, offset: usize) -> Option<u32> {
        pages::page_at(&self.pages, offset)
    }

    /// Chapter count in effect at a 1-based line number.
    ///
    /// Scans the first `line_number` lines, the named line included.
    pub fn chapter_at(&self, line_number: usize) -> u32 {
        let upto = line_number.min(self.lines.len());
        chapters::chapter_count((1..=upto).filter_map(|n| self.line_at(n)))
    }
}
