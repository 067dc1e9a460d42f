//! Error types
//!
//! The dashboard has a single handled failure class: the dataset could not be
//! made available at startup. Every cause (transport, HTTP status, disk, JSON)
//! maps onto one `LoadError` and is handled once, in `loader::boot`.

use thiserror::Error;

/// Static message shown in place of the explorer when the dataset is unavailable.
pub const DATA_UNAVAILABLE_MESSAGE: &str =
    "Error: Could not load commodity data. Please check the data.json file and console for details.";

/// Dataset could not be loaded ("data unavailable")
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network failure while fetching dataset: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to load data.json: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    pub fn status(status: u16, reason: impl Into<String>) -> Self {
        LoadError::Status {
            status,
            reason: reason.into(),
        }
    }
}
