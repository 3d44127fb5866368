//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Malformed data: {0}")]
    Malformed(#[from] MalformedDataError),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Shape and parse faults in an otherwise successful response.
///
/// These replace the downstream crash a raw reshaping of unvalidated JSON
/// would produce: the wire → domain conversion checks every field and
/// reports the first offender.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedDataError {
    #[error("response is missing the {0:?} key")]
    MissingSeriesKey(&'static str),

    #[error("time series is empty")]
    EmptySeries,

    #[error("entry {timestamp:?}: field {field:?} is not a finite decimal: {value:?}")]
    NonNumericField {
        timestamp: String,
        field: &'static str,
        value: String,
    },
}
