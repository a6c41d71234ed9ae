//! Chapter counting over document lines.
//!
//! Heading detection is case-sensitive to the literal markers books actually
//! print. The zero-chapter phrase resets the running count and wins over the
//! plain heading check when both would match the same line.

/// Literal phrases that reset the running chapter count.
const ZERO_CHAPTER_MARKS: &[&str] = &["Chapter Zero", "CHAPTER ZERO"];

/// Literal markers that begin a new chapter.
const CHAPTER_MARKS: &[&str] = &["Chapter", "CHAPTER"];

/// Running chapter count after scanning the given lines in order.
pub fn chapter_count<'a, I>(lines: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let mut chapter = 0;
    for line in lines {
        if ZERO_CHAPTER_MARKS.iter().any(|mark| line.contains(mark)) {
            chapter = 0;
        } else if CHAPTER_MARKS.iter().any(|mark| line.contains(mark)) {
            chapter += 1;
        }
    }
    chapter
}
