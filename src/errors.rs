// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorphError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The shell could not find the morph executable (exit code 127), or the
    /// shell itself could not be spawned.
    #[error("executable not found while running `{command}`")]
    ExecutableNotFound { command: String },

    /// The morph executable exited unsuccessfully. `code` is `None` when the
    /// process was terminated by a signal.
    #[error("`{command}` exited with status {}", display_code(.code))]
    ChildNonZeroExit { command: String, code: Option<i32> },

    #[cfg(unix)]
    #[error("pseudo-terminal error: {0}")]
    PtyError(#[from] nix::errno::Errno),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, MorphError>;
