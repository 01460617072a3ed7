// crates/fixconst-core/src/normalize.rs

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::NormalizeConfig;
use crate::error::{FixError, Result};
use crate::line::{is_normalized_arch_line, rewrite_assignment, tag_arch_line};
use crate::report::Report;
use crate::scan::candidate_files;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Replace rewritten files on disk.
    Write,
    /// Compute outcomes only; nothing is written.
    Check,
}

/// Result of normalizing one file's text.
///
/// A skipped file carries no buffer, so nothing half-built can reach disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    AlreadyNormalized,
    Rewritten(Vec<String>),
}

impl FileOutcome {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, FileOutcome::Rewritten(_))
    }

    /// Joined output lines, `None` when the file is left alone.
    pub fn contents(&self) -> Option<String> {
        match self {
            FileOutcome::AlreadyNormalized => None,
            FileOutcome::Rewritten(lines) => Some(lines.concat()),
        }
    }
}

/// Line 0 verbatim, line 1 tagged (or bail on sentinel), the rest rewritten.
pub fn normalize_text(text: &str, cfg: &NormalizeConfig) -> FileOutcome {
    let mut out = Vec::new();

    for (i, line) in text.split_inclusive('\n').enumerate() {
        match i {
            0 => out.push(line.to_string()),
            1 => {
                if is_normalized_arch_line(line, cfg) {
                    return FileOutcome::AlreadyNormalized;
                }
                out.push(tag_arch_line(line, cfg));
            }
            _ => {
                if let Some(l) = rewrite_assignment(line) {
                    out.push(l);
                }
            }
        }
    }

    FileOutcome::Rewritten(out)
}

pub fn normalize_file(path: &Path, cfg: &NormalizeConfig, mode: Mode) -> Result<FileOutcome> {
    let text = std::fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = normalize_text(&text, cfg);
    match (outcome.contents(), mode) {
        (Some(body), Mode::Write) => {
            replace_contents(path, body.as_bytes())?;
            tracing::debug!(path = %path.display(), bytes = body.len(), "rewrote");
        }
        (Some(body), Mode::Check) => {
            tracing::debug!(path = %path.display(), bytes = body.len(), "needs rewrite");
        }
        (None, _) => {
            tracing::debug!(path = %path.display(), "already normalized");
        }
    }

    Ok(outcome)
}

/// Normalize every candidate file in `dir`. Stops at the first I/O error;
/// files rewritten before it stay rewritten.
pub fn normalize_dir(dir: &Path, cfg: &NormalizeConfig, mode: Mode) -> Result<Report> {
    cfg.validate()?;

    let files = candidate_files(dir, &cfg.suffix)?;
    tracing::info!(dir = %dir.display(), candidates = files.len(), "scanning");

    let mut report = Report::new(mode);
    for path in files {
        let outcome = normalize_file(&path, cfg, mode)?;
        report.record(path, &outcome);
    }

    tracing::info!(
        scanned = report.scanned,
        fixed = report.fixed,
        skipped = report.skipped,
        "done"
    );
    Ok(report)
}

/// Whole-content replace: write a temp file next to the real target, then
/// rename it over the target. Symlinks are resolved first so the link stays.
fn replace_contents(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| FixError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = std::fs::canonicalize(path).map_err(write_err)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let perms = std::fs::metadata(&target).map_err(write_err)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().set_permissions(perms).map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}
