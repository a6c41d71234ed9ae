//! Tabular presentation of search results and context lookup.

use std::fmt::Write as _;

use serde::Serialize;

use crate::{
    error::{Error, Result},
    roman,
    search::MatchResult,
};

/// Rendered in place of a page number that could not be resolved.
pub const PAGE_NOT_AVAILABLE: &str = "N/A";

/// Human-readable page label.
///
/// Roman front-matter pages decode back to their Roman form; an unresolved
/// page renders as [`PAGE_NOT_AVAILABLE`].
pub fn format_page(page: Option<u32>) -> String {
    match page {
        None => PAGE_NOT_AVAILABLE.to_string(),
        Some(value) => match roman::page_to_roman(value) {
            Some(label) => label.to_string(),
            None => value.to_string(),
        },
    }
}

/// Render the numbered result table.
///
/// One tab-separated row per match: sequence number, keyword, page, chapter,
/// book name.
pub fn render_table(results: &[MatchResult], keyword: &str) -> String {
    if results.is_empty() {
        return "No matches found.\n".to_string();
    }

    let mut out = String::from("#\tkeyword\tpage\tchapter\tbook\n");
    for (i, r) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            i + 1,
            keyword,
            format_page(r.page),
            r.chapter,
            r.document
        );
    }
    let _ = writeln!(out, "\n{} match(es)", results.len());
    out
}

/// Context of the 1-based result `index`.
///
/// An out-of-range index is a reportable error, never a panic.
pub fn context_for(results: &[MatchResult], index: usize) -> Result<String> {
    if index == 0 || index > results.len() {
        return Err(Error::ResultOutOfRange {
            index,
            total: results.len(),
        });
    }
    Ok(results[index - 1].context.join("\n"))
}

#[derive(Serialize)]
struct Report<'a> {
    query: &'a str,
    match_count: usize,
    matches: Vec<Row<'a>>,
}

#[derive(Serialize)]
struct Row<'a> {
    index: usize,
    page: String,
    chapter: u32,
    line: usize,
    book: &'a str,
    context: &'a [String],
}

/// Render the result list as pretty-printed JSON.
pub fn render_json(results: &[MatchResult], keyword: &str) -> Result<String> {
    let report = Report {
        query: keyword,
        match_count: results.len(),
        matches: results
            .iter()
            .enumerate()
            .map(|(i, r)| Row {
                index: i + 1,
                page: format_page(r.page),
                chapter: r.chapter,
                line: r.line_number,
                book: &r.document,
                context: &r.context,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<MatchResult> {
        vec![
            MatchResult {
                document: "first.txt".to_string(),
                offset: 10,
                line_number: 2,
                page: Some(42),
                chapter: 1,
                context: vec!["before".to_string(), "the hit".to_string()],
            },
            MatchResult {
                document: "second.txt".to_string(),
                offset: 3,
                line_number: 1,
                page: None,
                chapter: 0,
                context: vec!["only line".to_string()],
            },
        ]
    }

    #[test]
    fn formats_arabic_roman_and_missing_pages() {
        assert_eq!(format_page(Some(42)), "42");
        assert_eq!(
            format_page(crate::roman::roman_to_page("xiv")),
            "xiv"
        );
        assert_eq!(format_page(None), PAGE_NOT_AVAILABLE);
    }

    #[test]
    fn table_rows_are_numbered_from_one() {
        let table = render_table(&sample_results(), "magic");
        assert!(table.contains("1\tmagic\t42\t1\tfirst.txt"));
        assert!(table.contains("2\tmagic\tN/A\t0\tsecond.txt"));
        assert!(table.contains("2 match(es)"));
    }

    #[test]
    fn empty_results_report_no_matches() {
        assert_eq!(render_table(&[], "magic"), "No matches found.\n");
    }

    #[test]
    fn context_lookup_joins_stored_lines() {
        let results = sample_results();
        assert_eq!(context_for(&results, 1).unwrap(), "before\nthe hit");
        assert_eq!(context_for(&results, 2).unwrap(), "only line");
    }

    #[test]
    fn out_of_range_context_is_an_error() {
        let results = sample_results();
        assert!(matches!(
            context_for(&results, 0),
            Err(Error::ResultOutOfRange { index: 0, total: 2 })
        ));
        assert!(matches!(
            context_for(&results, 3),
            Err(Error::ResultOutOfRange { index: 3, total: 2 })
        ));
    }

    #[test]
    fn json_report_includes_query_and_rows() {
        let json = render_json(&sample_results(), "magic").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["query"], "magic");
        assert_eq!(value["match_count"], 2);
        assert_eq!(value["matches"][0]["page"], "42");
        assert_eq!(value["matches"][1]["page"], "N/A");
    }
}
