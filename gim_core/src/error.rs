//! Error types for the gim_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when the command word is not recognised
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

/// Failure to turn a raw command line into a [`crate::Command`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Leading token is not a known command word
    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    /// Command word recognised but its arguments are malformed
    #[error(
        "Invalid command format!{}\n{usage}",
        .cause.as_deref().map(|cause| format!(" {cause}")).unwrap_or_default()
    )]
    InvalidFormat {
        usage: &'static str,
        cause: Option<String>,
    },

    /// A stored value could not be read as a decimal number
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
}

impl ParseError {
    /// Build an `InvalidFormat` error without an underlying cause
    pub fn invalid_format(usage: &'static str) -> Self {
        ParseError::InvalidFormat { usage, cause: None }
    }

    /// Build an `InvalidFormat` error wrapping a field-level failure
    pub fn with_cause(usage: &'static str, cause: impl std::fmt::Display) -> Self {
        ParseError::InvalidFormat {
            usage,
            cause: Some(cause.to_string()),
        }
    }
}

/// Failure converting a single field value into its typed form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Index is not a non-zero unsigned integer: '{0}'")]
    InvalidIndex(String),

    #[error("At least one index must be provided.")]
    EmptyIndexList,

    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank: '{0}'")]
    InvalidName(String),

    #[error("Weight should be a non-negative decimal number: '{0}'")]
    InvalidWeight(String),

    #[error("Sets should be a positive integer: '{0}'")]
    InvalidSets(String),

    #[error("Reps should be a positive integer: '{0}'")]
    InvalidReps(String),

    #[error("Date should be day/month/year or year/month/day, separated by '/', '-' or spaces: '{0}'")]
    InvalidDate(String),

    #[error("Level should be one of easy, medium or hard: '{0}'")]
    InvalidLevel(String),

    #[error("Multiple values specified for the following single-valued field(s): {}", .0.join(" "))]
    DuplicatePrefixes(Vec<String>),

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,
}

/// Core error type for gim_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command line could not be parsed
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// A one-based index does not refer to a displayed exercise
    #[error("The exercise index provided is invalid: {index} (only {len} displayed)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The exercise already exists in the tracker
    #[error("This exercise already exists in the exercise tracker")]
    DuplicateExercise,
}
