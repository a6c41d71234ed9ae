//! Case-insensitive keyword search with page and chapter attribution.

use rayon::prelude::*;
use tracing::warn;

use crate::document::Document;

/// One keyword occurrence with its positional attribution.
///
/// Owns everything it reports; no borrow back into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Display name of the book the match was found in.
    pub document: String,
    /// Byte offset of the match in the original text.
    pub offset: usize,
    /// 1-based line number of the match.
    pub line_number: usize,
    /// Encoded page value; `None` when no boundary covers the offset.
    pub page: Option<u32>,
    /// Chapter count in effect at the match line.
    pub chapter: u32,
    /// The matching line, preceded by the line before it when one exists.
    pub context: Vec<String>,
}

/// Find every occurrence of `keyword` across the corpus.
///
/// Matching is ASCII case-insensitive and non-overlapping: the cursor
/// advances by the keyword length after each hit. Documents keep their input
/// order in the result list; within a document, matches ascend by offset.
/// An empty keyword matches nothing.
pub fn search(documents: &[Document], keyword: &str) -> Vec<MatchResult> {
    if keyword.is_empty() {
        return Vec::new();
    }
    let needle = keyword.to_ascii_lowercase();

    // Documents are independent; search them in parallel and concatenate
    // per-document results in the original order.
    documents
        .par_iter()
        .map(|doc| search_document(doc, &needle))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

fn search_document(doc: &Document, needle: &str) -> Vec<MatchResult> {
    let mut results = Vec::new();
    let haystack = doc.text_lower();
    let mut from = 0;

    while let Some(found) = haystack[from..].find(needle) {
        let offset = from + found;
        let line_number = doc.line_number_at(offset);
        let page = doc.page_at(offset);
        if page.is_none() {
            warn!(
                "no page boundary covers offset {offset} in {}",
                doc.name()
            );
        }

        results.push(MatchResult {
            document: doc.name().to_string(),
            offset,
            line_number,
            page,
            chapter: doc.chapter_at(line_number),
            context: context_window(doc, line_number),
        });

        from = offset + needle.len();
    }

    results
}

/// The matched line plus its predecessor, when one exists.
fn context_window(doc: &Document, line_number: usize) -> Vec<String> {
    let first = line_number.saturating_sub(1).max(1);
    (first..=line_number)
        .filter_map(|n| doc.line_at(n))
        .map(str::to_string)
        .collect()
}
