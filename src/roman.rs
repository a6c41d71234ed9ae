//! Roman-numeral page labels used for front-matter pagination.
//!
//! Front-matter labels are encoded as reserved integers above every valid
//! Arabic page number, so a mixed Roman/Arabic marker sequence still has a
//! total order. The tables are fixed at startup and never mutated.

use std::{collections::HashMap, sync::LazyLock};

/// Known front-matter labels, in page order. Index + 1 is the ordinal.
const ROMAN_PAGES: &[&str] = &[
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii",
    "xiii", "xiv", "xv", "xvi", "xvii", "xviii", "xix", "xx", "xxi", "xxii",
    "xxiii", "xxiv", "xxv", "xxvi", "xxvii", "xxviii", "xxix", "xxx", "xxxi",
    "xxxii", "xxxiii", "xxxiv", "xxxv", "xxxvi", "xxxvii", "xxxviii",
    "xxxix", "xl",
];

/// Encoded values for Roman labels start above this; it exceeds
/// [`crate::pages::MAX_ARABIC_PAGE`] so Roman pages sort after every
/// Arabic page.
pub const ROMAN_PAGE_BASE: u32 = 1_000_000;

static ROMAN_ORDINALS: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| {
        ROMAN_PAGES
            .iter()
            .enumerate()
            .map(|(i, &label)| (label, i as u32 + 1))
            .collect()
    });

/// Encode a front-matter label (case-insensitive) as a page value.
pub fn roman_to_page(label: &str) -> Option<u32> {
    let lower = label.to_ascii_lowercase();
    ROMAN_ORDINALS
        .get(lower.as_str())
        .map(|ordinal| ROMAN_PAGE_BASE + ordinal)
}

/// Decode an encoded page value back to its Roman label.
///
/// Returns `None` for ordinary Arabic page values.
pub fn page_to_roman(page: u32) -> Option<&'static str> {
    let ordinal = page.checked_sub(ROMAN_PAGE_BASE + 1)? as usize;
    ROMAN_PAGES.get(ordinal).copied()
}

/// Whether an encoded page value stands for a Roman front-matter label.
pub fn is_roman_page(page: u32) -> bool {
    page >= ROMAN_PAGE_BASE
}
