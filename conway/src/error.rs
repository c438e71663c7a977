// error.rs - Error type shared by the core crate

use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog has no pattern registered under this name.
    #[error("no pattern named {0:?} in the catalog")]
    PatternNotFound(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config file i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file format: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
