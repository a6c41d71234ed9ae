//! End-to-end pipeline tests: files on disk through search to the rendered
//! report.

use pagegrep::{corpus, pages::PageConfig, report, roman, search};

fn write_books(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let first = dir.join("first-book.txt");
    std::fs::write(
        &first,
        "Opening remarks\n\
         12\n\
         Chapter One\n\
         The wizard waved his wand\n\
         13\n\
         Nothing but prose\n",
    )
    .unwrap();

    let second = dir.join("second-book.txt");
    std::fs::write(
        &second,
        "Preface about the wizard\n\
         ii\n\
         more front matter\n\
         iii\n\
         1\n\
         CHAPTER ONE\n\
         The wizard returns\n\
         2\n\
         closing words\n",
    )
    .unwrap();

    vec![first, second]
}

#[test]
fn search_report_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = write_books(tmp.path());

    let documents = corpus::load_documents(&paths, &PageConfig::default());
    assert_eq!(documents.len(), 2);

    let results = search::search(&documents, "wizard");
    assert_eq!(results.len(), 3);

    // Corpus order first, offset order within each book.
    assert_eq!(results[0].document, "first-book.txt");
    assert_eq!(results[1].document, "second-book.txt");
    assert_eq!(results[2].document, "second-book.txt");

    // Body match in the first book: after marker 12, inside chapter one.
    assert_eq!(results[0].page, Some(12));
    assert_eq!(results[0].chapter, 1);
    assert_eq!(results[0].context, vec![
        "Chapter One".to_string(),
        "The wizard waved his wand".to_string(),
    ]);

    // Front-matter match in the second book carries a Roman page.
    assert_eq!(results[1].page, roman::roman_to_page("ii"));
    assert_eq!(results[1].chapter, 0);

    // Body match after the Arabic restart.
    assert_eq!(results[2].page, Some(1));
    assert_eq!(results[2].chapter, 1);

    let table = report::render_table(&results, "wizard");
    assert!(table.contains("1\twizard\t12\t1\tfirst-book.txt"));
    assert!(table.contains("2\twizard\tii\t0\tsecond-book.txt"));
    assert!(table.contains("3\twizard\t1\t1\tsecond-book.txt"));
    assert!(table.contains("3 match(es)"));

    let context = report::context_for(&results, 3).unwrap();
    assert_eq!(context, "CHAPTER ONE\nThe wizard returns");

    assert!(report::context_for(&results, 4).is_err());
}

#[test]
fn absent_keyword_reports_cleanly() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = write_books(tmp.path());

    let documents = corpus::load_documents(&paths, &PageConfig::default());
    let results = search::search(&documents, "muggle");

    assert!(results.is_empty());
    assert_eq!(report::render_table(&results, "muggle"), "No matches found.\n");
    assert!(report::context_for(&results, 1).is_err());
}

#[test]
fn unreadable_book_is_excluded_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let mut paths = write_books(tmp.path());
    paths.push(tmp.path().join("does-not-exist.txt"));

    let documents = corpus::load_documents(&paths, &PageConfig::default());
    assert_eq!(documents.len(), 2);

    let results = search::search(&documents, "wizard");
    assert_eq!(results.len(), 3);
}
