//! CLI errors with distinct exit codes.
//!
//! Exit code scheme:
//! - 0:  run finished (terminated or frame cap reached)
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: invalid simulation configuration
//! - 11: sprite could not be loaded
//! - 12: I/O error reading or writing a frame log
//! - 13: frame log could not be encoded or decoded

use std::path::PathBuf;

use game_core::{AssetError, ConfigError};
use proto::FrameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Codec(#[from] FrameError),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 10,
            CliError::Asset(_) => 11,
            CliError::Io { .. } => 12,
            CliError::Codec(_) => 13,
        }
    }
}
