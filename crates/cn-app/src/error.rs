//! Error types for the cn-app service layer.

use std::path::PathBuf;

use cn_core::{AreaCode, PhoneNumber};

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load network from {path}: {source}")]
    Load {
        path: PathBuf,
        source: cn_project::ProjectError,
    },

    #[error("Network error: {0}")]
    Graph(#[from] cn_graph::GraphError),

    #[error("Station {0} is not in the network")]
    StationNotFound(AreaCode),

    #[error("{phone} not found in station {area_code}")]
    ClientNotFound {
        area_code: AreaCode,
        phone: PhoneNumber,
    },

    #[error("Provided phones are identical, one cannot call oneself")]
    SelfCall,

    #[error("No trajectory between stations {from} and {to}")]
    NoRoute { from: AreaCode, to: AreaCode },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for cn-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<cn_core::CoreError> for AppError {
    fn from(err: cn_core::CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
