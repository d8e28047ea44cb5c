//! Error types for the Tableau API client.
//!
//! This module provides a single error type covering all failure modes
//! when talking to the Tableau API, from transport problems to typed
//! errors decoded from vendor error bodies.

use std::collections::BTreeMap;

use thiserror::Error;

/// A specialized `Result` type for Tableau operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error code carried by failures the client manufactures itself
/// (malformed bodies, shape mismatches), as opposed to codes supplied by
/// the Tableau API.
pub const ERR_CODE_INTERNAL: &str = "-1";

/// The main error type for all Tableau API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Typed error from the API or from response classification.
    #[error("{message}")]
    Api {
        /// Human-readable error message
        message: String,
        /// Machine error code: vendor-supplied, or [`ERR_CODE_INTERNAL`]
        code: String,
        /// Diagnostic context, e.g. the raw response body under `"body"`
        /// or the HTTP status text under `"http_status"`
        meta: BTreeMap<String, String>,
    },
}

impl Error {
    /// Build a typed error with a vendor-supplied code and no metadata.
    pub(crate) fn api(message: impl Into<String>, code: impl Into<String>) -> Self {
        Error::Api {
            message: message.into(),
            code: code.into(),
            meta: BTreeMap::new(),
        }
    }

    /// Build a typed error with the fixed internal code.
    pub(crate) fn internal(
        message: impl Into<String>,
        meta: BTreeMap<String, String>,
    ) -> Self {
        Error::Api {
            message: message.into(),
            code: ERR_CODE_INTERNAL.to_string(),
            meta,
        }
    }

    /// The machine error code, if this is a typed API error.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// The diagnostic metadata, if this is a typed API error.
    pub fn meta(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Error::Api { meta, .. } => Some(meta),
            _ => None,
        }
    }

    /// Returns `true` if this is a typed error manufactured by the client
    /// rather than reported by the API.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Api { code, .. } if code == ERR_CODE_INTERNAL)
    }

    /// Returns `true` if this is a typed API error of any flavor.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}
