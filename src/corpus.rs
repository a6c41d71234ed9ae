//! Corpus loading: file discovery plus per-document indexing.
//!
//! The indexing core never opens files itself; this module is the thin shell
//! that turns paths into [`Document`]s, skipping whatever cannot be read.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::warn;

use crate::{document::Document, error::Result, pages::PageConfig};

/// File extensions recognized as book text.
const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md"];

/// Recursively discover book files under a directory, sorted by path.
///
/// Hidden files and directories (names starting with `.`) are skipped.
pub fn discover_books(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk_dir(root, &mut found)?;
    found.sort();
    Ok(found)
}

fn walk_dir(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type()?.is_dir() {
            walk_dir(&path, found)?;
        } else if is_supported(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Load and index a set of book files.
///
/// Unreadable files are logged and skipped rather than failing the run; the
/// returned documents keep the order of `paths`. Files are read and indexed
/// in parallel.
pub fn load_documents(paths: &[PathBuf], config: &PageConfig) -> Vec<Document> {
    paths
        .par_iter()
        .filter_map(|path| {
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    warn!("skipping {}: {err}", path.display());
                    return None;
                }
            };
            Some(Document::new(display_name(path), text, config))
        })
        .collect()
}

/// Display name for a book: the file name without its directory.
fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("untitled")
        .to_string()
}
