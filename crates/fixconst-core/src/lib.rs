// crates/fixconst-core/src/lib.rs

pub mod config;
pub mod error;
pub mod line;
pub mod normalize;
pub mod report;
pub mod scan;

pub use crate::config::NormalizeConfig;
pub use crate::normalize::{normalize_dir, normalize_file, normalize_text, FileOutcome, Mode};
pub use crate::report::Report;
