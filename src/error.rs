use std::path::PathBuf;

use thiserror::Error;

/// Failures at the I/O edges of the library. License resolution itself
/// never fails; unresolvable licenses are reported as unknown.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("failed to read dependency metadata from {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dependency metadata in {path}")]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write artifact details to {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
