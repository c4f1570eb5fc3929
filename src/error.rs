//! Error types for accumulator arithmetic, configuration and I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library and the CLI.
#[derive(Error, Debug)]
pub enum AdderError {
    #[error("Arithmetic overflow: {total} + {value} does not fit in i64")]
    Overflow { total: i64, value: i64 },

    #[error("Factorial overflow: {n}! does not fit in u64")]
    FactorialOverflow { n: u32 },

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Configuration file already exists at {path}. Use --force to overwrite")]
    ConfigExists { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl AdderError {
    /// Process exit code for this error.
    ///
    /// 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Overflow { .. } | Self::FactorialOverflow { .. } => 3,
            Self::Config(_) | Self::ConfigExists { .. } => 4,
            Self::Io(_) | Self::Serialize(_) => 1,
        }
    }
}

impl From<toml::ser::Error> for AdderError {
    fn from(e: toml::ser::Error) -> Self {
        AdderError::Serialize(e.to_string())
    }
}

impl From<serde_json::Error> for AdderError {
    fn from(e: serde_json::Error) -> Self {
        AdderError::Serialize(e.to_string())
    }
}

pub type AdderResult<T> = Result<T, AdderError>;
