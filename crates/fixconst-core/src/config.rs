// crates/fixconst-core/src/config.rs

use crate::error::{FixError, Result};

/// Directory the const files are generated into.
pub const DEFAULT_DIR: &str = "sys/freebsd";

/// Candidate files end with this ("text" + "constants").
pub const DEFAULT_SUFFIX: &str = ".txt.const";

/// Present on line 1 once a file has been normalized
/// (or when the generator already emitted the full arch list).
pub const DEFAULT_SENTINEL: &str = "386";

/// Appended to the GOARCH line, in this order.
pub const DEFAULT_ARCHES: [&str; 3] = ["386", "amd64", "riscv64"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeConfig {
    pub suffix: String,
    pub sentinel: String,
    pub extra_arches: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
            extra_arches: DEFAULT_ARCHES.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl NormalizeConfig {
    /// The text appended to line 1, e.g. `", 386, amd64, riscv64"`.
    pub fn arch_suffix(&self) -> String {
        let mut s = String::new();
        for a in &self.extra_arches {
            s.push_str(", ");
            s.push_str(a);
        }
        s
    }

    pub fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            return Err(FixError::Config("suffix must not be empty".into()));
        }
        // An empty sentinel would match every line and skip every file.
        if self.sentinel.is_empty() {
            return Err(FixError::Config("sentinel must not be empty".into()));
        }
        if self.extra_arches.is_empty() {
            return Err(FixError::Config("at least one arch is required".into()));
        }
        for a in &self.extra_arches {
            if a.trim().is_empty() || a.contains([',', '\n', '\r']) {
                return Err(FixError::Config(format!("invalid arch name {a:?}")));
            }
        }
        // A rewritten line 1 must carry the sentinel, or reruns append again.
        if !self.arch_suffix().contains(self.sentinel.as_str()) {
            return Err(FixError::Config(format!(
                "sentinel {:?} does not appear in the appended arch list",
                self.sentinel
            )));
        }
        Ok(())
    }
}
