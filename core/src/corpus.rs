use crate::error::{Result, SearchError};
use crate::index::{DocId, IndexStore};
use std::fs::File;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files directly under `dir` (no recursion) whose names end in `.{extension}`, sorted by name.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(SearchError::NotADirectory(dir.to_path_buf()));
    }
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        // Lossy so names with invalid UTF-8 still match on their extension.
        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Discover and index every matching file in `dir`. Each file's path is its document id.
pub fn load_directory(dir: &Path, extension: &str) -> Result<IndexStore> {
    let files = discover(dir, extension)?;
    let mut store = IndexStore::new();
    for path in &files {
        let id = DocId::new(path.to_string_lossy());
        let f = File::open(path).map_err(|source| SearchError::Read { id: id.to_string(), source })?;
        store.add_reader(id, f)?;
    }
    tracing::info!(dir = %dir.display(), num_docs = store.num_docs(), num_terms = store.num_terms(), "loaded corpus");
    Ok(store)
}
