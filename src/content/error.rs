//! Content error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying static content
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid JSON for the expected shape
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Article date is not an ISO `YYYY-MM-DD` date
    #[error("Article {id} has invalid date '{date}'")]
    InvalidDate { id: u32, date: String },

    /// Search radius outside the accepted range or not on a step
    #[error("Invalid radius {0} km: must be between 5 and 100 in steps of 5")]
    InvalidRadius(u32),

    /// Latitude/longitude outside the valid range
    #[error("Invalid coordinates: lat={lat}, lng={lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;
