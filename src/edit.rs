use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::import_string;
use crate::path;
use crate::walk;

/// Reads `file`, applies `rewrite` and writes the result back only when it
/// produced new content.
fn rewrite_file<F>(file: &Path, rewrite: F) -> Result<bool>
where
    F: FnOnce(&str) -> Option<String>,
{
    let source_code =
        fs::read_to_string(file).map_err(|e| anyhow!("Failed to read {:?}: {}", file, e))?;

    match rewrite(&source_code) {
        None => {
            debug!(file = ?file, "unchanged");
            Ok(false)
        }
        Some(new_source_code) => {
            fs::write(file, new_source_code)
                .map_err(|e| anyhow!("Failed to write {:?}: {}", file, e))?;
            debug!(file = ?file, "rewritten");
            Ok(true)
        }
    }
}

pub fn fix_extensions(root: &Path) -> Result<usize> {
    let mut fixed_count = 0;

    for file in walk::find_source_files(root)? {
        if rewrite_file(&file, import_string::append_extensions)? {
            fixed_count += 1;
            println!("Fixed: {}", file.display());
        }
    }

    println!("\nTotal files fixed: {}", fixed_count);
    Ok(fixed_count)
}

pub fn fix_slot_imports(root: &Path, target: &str) -> Result<usize> {
    let mut fixed_count = 0;
    let old_import = import_string::from_import(&format!("../{}", target));

    for file in walk::find_source_files(root)? {
        let depth = path::depth(&file, root)?;
        let target_path = format!("{}{}", path::ascent_prefix(depth), target);
        let new_import = import_string::from_import(&target_path);

        debug!(file = ?file, depth, "computed depth");

        let changed = rewrite_file(&file, |source_code| {
            import_string::replace_import(source_code, &old_import, &new_import)
        })?;

        if changed {
            fixed_count += 1;
            println!("Fixed: {} -> {}", file.display(), target_path);
        }
    }

    println!("Total files fixed: {}", fixed_count);
    Ok(fixed_count)
}
