//! Page boundary resolution from noisy page-marker lines.
//!
//! Digitized books carry their printed page numbers as bare lines of text:
//! a line containing only `42`, or `iv` in Roman-numeral front matter.
//! Nothing marks such a line as a page break, and an incidental numeral (a
//! year, an item count) looks exactly the same. A candidate line is accepted
//! as a real marker only when a later candidate continues the sequence
//! within a bounded jump, and a book whose front matter paginates in Roman
//! numerals may restart Arabic numbering at the body.

use crate::{lines::LineIndex, roman};

/// Largest Arabic page number accepted as a marker. Digit-only lines above
/// this are treated as prose.
pub const MAX_ARABIC_PAGE: u32 = 99_999;

/// Default maximum increase between consecutive accepted page numbers.
pub const DEFAULT_MAX_JUMP: u32 = 10;

/// Tunables for marker validation.
#[derive(Debug, Clone, Copy)]
pub struct PageConfig {
    /// Maximum increase between consecutive accepted page numbers. Scans of
    /// real books drop the occasional marker, so a small jump is tolerated.
    pub max_jump: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            max_jump: DEFAULT_MAX_JUMP,
        }
    }
}

/// A contiguous byte range attributed to one printed page.
///
/// `start` and `end` are inclusive offsets into the document text. Within a
/// resolved list, boundaries are ordered, non-overlapping, and contiguous:
/// `end + 1` of one boundary is the `start` of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBoundary {
    /// Encoded page value; Roman labels sit above
    /// [`roman::ROMAN_PAGE_BASE`].
    pub page: u32,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    value: u32,
    /// Offset of the line's `\n` (or the text length on the final line).
    line_end: usize,
}

/// Parse a line as a page-number candidate.
///
/// A candidate's trimmed content is either an integer in
/// `[1, MAX_ARABIC_PAGE]` or a known Roman front-matter label.
fn parse_candidate(line: &str) -> Option<u32> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        // Out-of-range or overflowing numerals are prose, not markers.
        let value: u32 = trimmed.parse().ok()?;
        return (1..=MAX_ARABIC_PAGE).contains(&value).then_some(value);
    }
    roman::roman_to_page(trimmed)
}

fn collect_candidates(text: &str, index: &LineIndex) -> Vec<Candidate> {
    (1..=index.len())
        .filter_map(|n| {
            let (start, end) = index.line_span(n)?;
            let value = parse_candidate(&text[start..end])?;
            Some(Candidate {
                value,
                line_end: end,
            })
        })
        .collect()
}

/// Forward continuity: some later candidate strictly continues
/// `candidates[idx]` within `max_jump`. Seeds the accepted sequence and
/// re-seeds Arabic numbering after a Roman front-matter run.
fn has_continuation(
    candidates: &[Candidate],
    idx: usize,
    max_jump: u32,
) -> bool {
    let from = candidates[idx].value;
    candidates[idx + 1..]
        .iter()
        .any(|c| c.value > from && c.value - from <= max_jump)
}

/// Indices of candidates accepted as real page markers, in line order.
fn accept_markers(candidates: &[Candidate], config: &PageConfig) -> Vec<usize> {
    let mut accepted = Vec::new();
    let mut last_value: Option<u32> = None;

    for idx in 0..candidates.len() {
        let value = candidates[idx].value;
        let accept = match last_value {
            None => has_continuation(candidates, idx, config.max_jump),
            Some(last) => {
                let continues =
                    value > last && value - last <= config.max_jump;
                // First Arabic candidate after a Roman run is validated on
                // its own; the body restarts numbering at 1.
                let restarts = roman::is_roman_page(last)
                    && !roman::is_roman_page(value)
                    && has_continuation(candidates, idx, config.max_jump);
                continues || restarts
            }
        };
        if accept {
            accepted.push(idx);
            last_value = Some(value);
        }
    }

    accepted
}

/// Resolve the validated page boundaries of a document.
///
/// The returned list covers the whole text. Each accepted marker closes the
/// previous boundary at its own line (the marker line belongs to the page it
/// ends) and opens the next page immediately after. Text before the first
/// marker carries the first accepted page number; a document with no
/// accepted markers is a single page 1.
pub fn resolve_boundaries(
    text: &str,
    index: &LineIndex,
    config: &PageConfig,
) -> Vec<PageBoundary> {
    let end_of_text = text.len().saturating_sub(1);
    let candidates = collect_candidates(text, index);
    let accepted = accept_markers(&candidates, config);

    let Some((&first, rest)) = accepted.split_first() else {
        return vec![PageBoundary {
            page: 1,
            start: 0,
            end: end_of_text,
        }];
    };

    let mut boundaries = Vec::with_capacity(accepted.len());
    let mut start = 0;
    let mut page = candidates[first].value;

    for &idx in rest {
        let marker = candidates[idx];
        boundaries.push(PageBoundary {
            page,
            start,
            end: marker.line_end.min(end_of_text),
        });
        start = marker.line_end + 1;
        page = marker.value;
    }

    // The last page runs to the end of the text. A marker on the very last
    // line opens nothing.
    if start <= end_of_text {
        boundaries.push(PageBoundary {
            page,
            start,
            end: end_of_text,
        });
    }

    boundaries
}

/// Binary search for the boundary containing `offset`.
///
/// Returns `None` when no boundary covers the offset; resolved lists are
/// contiguous so this only happens on degenerate input.
pub fn page_at(boundaries: &[PageBoundary], offset: usize) -> Option<u32> {
    let idx = boundaries.partition_point(|b| b.end < offset);
    boundaries
        .get(idx)
        .and_then(|b| (b.start <= offset && offset <= b.end).then_some(b.page))
}
