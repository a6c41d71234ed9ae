//! Line boundary indexing over raw document text.
//!
//! Offsets always refer to the original bytes; only `\n` is treated as a
//! separator and nothing is normalized.

/// Byte offsets of line ends within a document.
///
/// Entry `i` holds the offset of the `\n` terminating line `i` (0-based), or
/// the text length when the final line has no trailing newline. Empty text
/// has no entries.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    line_ends: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_ends: Vec<usize> = text
            .bytes()
            .enumerate()
            .filter_map(|(i, b)| (b == b'\n').then_some(i))
            .collect();

        // Synthetic final entry for a last line without a newline.
        if !text.is_empty() && !text.ends_with('\n') {
            line_ends.push(text.len());
        }

        Self { line_ends }
    }

    /// Number of lines in the document.
    pub fn len(&self) -> usize {
        self.line_ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_ends.is_empty()
    }

    /// 1-based number of the first line whose end offset is >= `offset`.
    ///
    /// Offsets past the final line end map to the last line.
    pub fn line_number_at(&self, offset: usize) -> usize {
        if self.line_ends.is_empty() {
            return 1;
        }
        let idx = self.line_ends.partition_point(|&end| end < offset);
        idx.min(self.line_ends.len() - 1) + 1
    }

    /// Byte span `[start, end)` of a 1-based line, excluding the newline.
    pub fn line_span(&self, line_number: usize) -> Option<(usize, usize)> {
        if line_number == 0 || line_number > self.line_ends.len() {
            return None;
        }
        let start = if line_number == 1 {
            0
        } else {
            self.line_ends[line_number - 2] + 1
        };
        Some((start, self.line_ends[line_number - 1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_lines() {
        let index = LineIndex::new("");
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.line_span(1), None);
    }

    #[test]
    fn trailing_newline_counts_once() {
        let index = LineIndex::new("one\ntwo\n");
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn missing_final_newline_gets_synthetic_end() {
        let text = "one\ntwo";
        let index = LineIndex::new(text);
        assert_eq!(index.len(), 2);
        assert_eq!(index.line_span(2), Some((4, text.len())));
    }

    #[test]
    fn line_spans_exclude_newline() {
        let text = "abc\nde\nf\n";
        let index = LineIndex::new(text);
        assert_eq!(&text[..], "abc\nde\nf\n");
        let (s, e) = index.line_span(1).unwrap();
        assert_eq!(&text[s..e], "abc");
        let (s, e) = index.line_span(2).unwrap();
        assert_eq!(&text[s..e], "de");
        let (s, e) = index.line_span(3).unwrap();
        assert_eq!(&text[s..e], "f");
    }

    #[test]
    fn line_number_at_maps_offsets() {
        let index = LineIndex::new("abc\nde\nf\n");
        assert_eq!(index.line_number_at(0), 1);
        assert_eq!(index.line_number_at(2), 1);
        assert_eq!(index.line_number_at(4), 2);
        assert_eq!(index.line_number_at(7), 3);
    }

    #[test]
    fn line_number_at_is_monotonic() {
        let text = "first line\nsecond\nthird one\n";
        let index = LineIndex::new(text);
        let mut last = 0;
        for offset in 0..=text.len() {
            let n = index.line_number_at(offset);
            assert!(n >= last, "line number decreased at offset {offset}");
            last = n;
        }
    }

    #[test]
    fn line_number_at_clamps_past_end() {
        let index = LineIndex::new("abc\n");
        assert_eq!(index.line_number_at(1000), 1);
    }
}
