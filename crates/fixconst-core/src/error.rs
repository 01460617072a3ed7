// crates/fixconst-core/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixError>;

#[derive(Debug, Error)]
pub enum FixError {
    #[error("config error: {0}")]
    Config(String),

    #[error("cannot list directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
