//! Client error types.

use std::fmt;

use confsched_core::CatalogError;
use confsched_providers::ProviderError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// Loading the schedule failed.
    Provider(ProviderError),
    /// The tag catalog could not be loaded.
    Catalog(CatalogError),
    /// A command-line argument does not match the loaded data.
    InvalidArgument(String),
    /// Rendering output failed.
    Output(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Provider(err) => write!(f, "failed to load schedule: {}", err),
            Self::Catalog(err) => write!(f, "tag catalog: {}", err),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Self::Output(msg) => write!(f, "output error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Provider(err) => Some(err),
            Self::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProviderError> for ClientError {
    fn from(err: ProviderError) -> Self {
        Self::Provider(err)
    }
}

impl From<CatalogError> for ClientError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}
