use thiserror::Error;

use crate::config::ConfigError;
use crate::imports::ImportError;

/// Failures the application layer can surface. The five funding
/// operations themselves are total over their inputs and never appear
/// here; only ambient concerns (configuration, data import) can fail.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("agent failure: {0}")]
    Agent(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The request could not be processed. Check inputs and try again."
            }
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. } | Self::Internal { correlation_id, .. } => {
                correlation_id
            }
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        match self {
            ApplicationError::Import(error) => {
                InterfaceError::BadRequest { message: error.to_string(), correlation_id }
            }
            ApplicationError::Configuration(error) => {
                InterfaceError::Internal { message: error.to_string(), correlation_id }
            }
            ApplicationError::Agent(message) => {
                InterfaceError::Internal { message, correlation_id }
            }
        }
    }
}
