// Chunk: docs/chunks/search_results_panel - Summary labels for search and file rows

/// Label of a search row: `Search "<term>" (<hits> hits in <files> file)`.
///
/// "file" and "hits" are never singularized or pluralized; the wording is
/// fixed regardless of the counts.
pub fn search_label(term: &str, total_hits: usize, file_count: usize) -> String {
    format!("Search \"{}\" ({} hits in {} file)", term, total_hits, file_count)
}

/// Label of a file row: `<path> (<hits> hits)`.
pub fn file_label(display_path: &str, file_hits: usize) -> String {
    format!("{} ({} hits)", display_path, file_hits)
}
