//! Error types for the Basketball Victoria statistics CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, BigvError>;

/// Coarse classification used when reporting a failed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-2xx status or transport failure.
    Network,
    /// The response is missing expected buckets or has the wrong shape.
    MalformedResponse,
    /// Normalization produced zero records.
    EmptyResult,
    /// The workbook could not be built.
    Export,
    /// Local filesystem failure.
    Io,
    /// Bad command-line input.
    Usage,
}

#[derive(Error, Debug)]
pub enum BigvError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! Status: {status} ({url})")]
    Status { status: u16, url: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("Statistic entry references unknown person: {person_id}")]
    UnmatchedPerson { person_id: String },

    #[error("No player records found, nothing to export")]
    EmptyResult,

    #[error("No competition given: pass --competition or --competition-id")]
    MissingCompetition,

    #[error("Invalid identifier: {value:?}")]
    InvalidId { value: String },
}

impl BigvError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        BigvError::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Which part of the taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BigvError::Http(_) | BigvError::Status { .. } => ErrorKind::Network,
            BigvError::Json(_)
            | BigvError::MalformedResponse { .. }
            | BigvError::UnmatchedPerson { .. } => ErrorKind::MalformedResponse,
            BigvError::EmptyResult => ErrorKind::EmptyResult,
            BigvError::Xlsx(_) => ErrorKind::Export,
            BigvError::Io(_) => ErrorKind::Io,
            BigvError::MissingCompetition | BigvError::InvalidId { .. } => ErrorKind::Usage,
        }
    }
}
