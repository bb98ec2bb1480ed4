//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid arguments to a view swap. Always raised before the view tree is
/// touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("view is neither the window's content view nor attached to a parent")]
    Detached,

    #[error("replacement view is already attached to a view hierarchy")]
    AlreadyAttached,

    #[error("a view cannot replace itself")]
    SameView,
}

/// Errors surfaced by window chrome operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    #[error("window has no content view")]
    NoContentView,

    #[error("view swap failed: {0}")]
    Swap(#[from] SwapError),
}

/// Errors loading a chrome configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
