// Chunk: docs/chunks/search_results_panel - Config error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving the panel configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine the config directory")]
    NoConfigDir,

    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("config schema version mismatch (expected {expected}, got {found})")]
    SchemaMismatch { expected: u32, found: u32 },
}
