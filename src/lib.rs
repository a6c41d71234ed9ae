//! pagegrep - keyword search over digitized books with page attribution.
//!
//! pagegrep indexes plain-text book files so a keyword can be located and
//! annotated with its printed page number, chapter number, and surrounding
//! lines. Page numbers in digitized books are bare numeral lines mixed into
//! the prose; the page resolver validates them with a sequence-continuity
//! heuristic and understands Roman-numeral front matter that restarts into
//! Arabic numbering at the body.
//!
//! # Quick start
//!
//! ```
//! use pagegrep::{Document, PageConfig, search};
//!
//! let text = "Intro text\n42\nChapter One starts here\nmore text\n43\n\
//!             keyword appears here\n";
//! let doc = Document::new("example.txt", text, &PageConfig::default());
//!
//! let results = search::search(std::slice::from_ref(&doc), "keyword");
//! assert_eq!(results[0].page, Some(43));
//! assert_eq!(results[0].chapter, 1);
//! assert_eq!(results[0].line_number, 6);
//! ```

pub mod chapters;
pub mod cli;
pub mod corpus;
pub mod document;
pub mod error;
pub mod lines;
pub mod pages;
pub mod report;
pub mod roman;
pub mod search;

pub use document::Document;
pub use error::{Error, Result};
pub use pages::{PageBoundary, PageConfig};
pub use search::MatchResult;
