/// Workbook discovery
///
/// Finds workbook files by extension in a single directory (not recursive).
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Prefix of the lock files Excel leaves next to open workbooks
const LOCK_FILE_PREFIX: &str = "~$";

/// List files in `dir` whose name ends with `.<extension>`, sorted by file name.
///
/// The match is case-sensitive. Excel lock files (`~$name.xlsx`) are skipped.
pub fn find_workbooks(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let suffix = format!(".{}", extension);
    let mut found = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(LOCK_FILE_PREFIX) {
            debug!("Skipping lock file {}", name);
            continue;
        }
        if name.ends_with(&suffix) {
            found.push(path);
        }
    }

    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} '{}' files in {}", found.len(), suffix, dir.display());
    Ok(found)
}

/// File name of a path for display
pub fn display_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| path.display().to_string())
}
