use parley_core::error::{DefinitionError, ParseTypeError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unable to read command catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed command catalog: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Parameter '{parameter}' declares tag '{tag}' but no pattern")]
    MissingPattern { parameter: String, tag: String },
    #[error("Unknown protocol identifier: {0}")]
    UnknownProtocol(String),
    #[error(transparent)]
    Definition(#[from] DefinitionError),
    #[error(transparent)]
    ValueType(#[from] ParseTypeError),
}
