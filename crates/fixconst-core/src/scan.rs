// crates/fixconst-core/src/scan.rs

use std::path::{Path, PathBuf};

use crate::error::{FixError, Result};

/// Files directly inside `dir` whose name ends with `suffix`, sorted by name.
///
/// Not recursive. Subdirectories are skipped even if their name matches.
pub fn candidate_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source| FixError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::debug!(name = ?entry.file_name(), "skipping non-utf8 file name");
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        out.push(path);
    }

    out.sort();
    Ok(out)
}
