use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::import_string::SOURCE_EXTENSION;

fn is_source_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_str()
            .map(|s| s.ends_with(SOURCE_EXTENSION))
            .unwrap_or(false)
}

/// Every `.js` file below `root`, depth first.
pub fn find_source_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = vec![];

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| anyhow!("Failed to walk {:?}: {}", root, e))?;

        if is_source_file(&entry) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
