//! Errors of the export pipeline.
//!
//! Every variant is fatal: the binary prints it and exits non-zero.

use bdl_client::BdlError;
use thiserror::Error;

/// Export pipeline error type.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Listing variables from the API failed.
    #[error("Failed to fetch variables: {0}")]
    Fetch(#[from] BdlError),

    /// Fewer variables exist than the sample asks for.
    #[error("Only {available} variables available, cannot draw a sample of {required}")]
    InsufficientPopulation {
        /// Variables fetched
        available: usize,
        /// Sample size requested
        required: usize,
    },

    /// CSV serialization or output error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error (permission denied, disk full, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_population_names_both_counts() {
        let err = ExportError::InsufficientPopulation {
            available: 30,
            required: 40,
        };
        let msg = err.to_string();
        assert!(msg.contains("30"));
        assert!(msg.contains("40"));
    }

    #[test]
    fn test_fetch_error_wraps_client_error() {
        let err: ExportError = BdlError::ApiRequestFailed {
            status: 500,
            url: "https://bdl.stat.gov.pl/api/v1/variables".to_string(),
        }
        .into();
        assert!(matches!(err, ExportError::Fetch(_)));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: ExportError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
