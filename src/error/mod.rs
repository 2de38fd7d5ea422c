//! Error handling for pophealth.
//!
//! Generating and filtering a population cannot fail. Errors only arise at
//! the boundaries: parsing labels from strings, loading configuration,
//! strict ingestion of satellite collections and exporting data.

use std::path::PathBuf;

/// Specialized error type for pophealth
#[derive(Debug, thiserror::Error)]
pub enum PopHealthError {
    /// A string is not a member of a closed vocabulary
    #[error("Unknown {vocabulary} label: '{label}'")]
    UnknownLabel {
        /// Name of the vocabulary that rejected the label
        vocabulary: &'static str,
        /// The offending label
        label: String,
    },

    /// Generator configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A record references a patient id that does not exist
    #[error("{collection} record {record_id} references unknown patient {patient_id}")]
    DanglingReference {
        /// Collection the record belongs to
        collection: &'static str,
        /// Id of the offending record
        record_id: String,
        /// Patient id that could not be resolved
        patient_id: String,
    },

    /// Error opening, reading or writing a file
    #[error("IO error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error serializing or deserializing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PopHealthError {
    /// Create an unknown label error
    #[must_use]
    pub fn unknown_label(vocabulary: &'static str, label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            vocabulary,
            label: label.into(),
        }
    }

    /// Create an invalid configuration error
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create an IO error with path context
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for pophealth operations
pub type Result<T> = std::result::Result<T, PopHealthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_message() {
        let err = PopHealthError::unknown_label("risk level", "Severe");
        assert_eq!(err.to_string(), "Unknown risk level label: 'Severe'");
    }

    #[test]
    fn test_dangling_reference_message() {
        let err = PopHealthError::DanglingReference {
            collection: "referral",
            record_id: "R-90000".to_string(),
            patient_id: "P10548".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "referral record R-90000 references unknown patient P10548"
        );
    }
}
