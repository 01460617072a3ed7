// crates/fixconst-core/src/report.rs

use std::path::PathBuf;

use crate::normalize::{FileOutcome, Mode};

#[derive(Clone, Debug)]
pub struct Report {
    pub mode: Mode,
    pub scanned: usize,
    pub fixed: usize,
    pub skipped: usize,
    pub fixed_paths: Vec<PathBuf>,
}

impl Report {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            scanned: 0,
            fixed: 0,
            skipped: 0,
            fixed_paths: Vec::new(),
        }
    }

    pub fn record(&mut self, path: PathBuf, outcome: &FileOutcome) {
        self.scanned += 1;
        if outcome.is_rewritten() {
            self.fixed += 1;
            self.fixed_paths.push(path);
        } else {
            self.skipped += 1;
        }
    }

    /// The one line printed at the end of a run.
    ///
    /// A zero count does not say whether nothing matched or everything was
    /// already normalized.
    pub fn summary(&self) -> String {
        let verb = match self.mode {
            Mode::Write => "Fixed",
            Mode::Check => "Would fix",
        };
        if self.fixed != 0 {
            format!("{verb} {} files.", self.fixed)
        } else {
            format!("{verb} 0 files. Either const files are missing or they are good to go already.")
        }
    }
}
