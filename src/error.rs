use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum WeaveError {
    #[error("unexpected character '{character}' at position {position} of namespace \"{input}\"")]
    InvalidNamespace {
        character: char,
        position: usize,
        input: String,
    },

    #[error("unable to resolve type '{token}'")]
    UnresolvedType {
        token: String,
        #[source]
        source: ResolveError,
    },

    #[error("cleaner '{provider}' failed")]
    Provider {
        provider: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type resolution errors raised by the artifact loader
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("empty type name")]
    EmptyName,

    #[error("class '{0}' not found on any loader root")]
    NotFound(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WeaveError>;
