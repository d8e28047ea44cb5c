//! Response classification and decoding for Tableau API calls.
//!
//! Every HTTP exchange funnels through here after the body has been read
//! in full: statuses at or above 400 are mapped to a typed [`Error::Api`],
//! everything else is either a no-content short-circuit or a JSON decode
//! into the caller's type.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::error::Category;

use crate::error::{Error, Result};

/// Error body shape used by the Tableau API.
///
/// The record is optional end to end so "nothing decoded" is a
/// distinguishable outcome rather than something inferred from default
/// values after the fact.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<VendorError>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VendorError {
    summary: String,
    detail: String,
    code: String,
}

impl VendorError {
    // An all-empty record means the body parsed but wasn't the error
    // shape. A vendor error that legitimately has every field empty is
    // indistinguishable from that and classified the same way.
    fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.detail.is_empty() && self.code.is_empty()
    }
}

/// Decode a completed exchange into `T`.
///
/// Returns `Ok(None)` when no decode was attempted: a 204 response is
/// never decoded, even when a body happens to be present.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<Option<T>> {
    if status.as_u16() >= 400 {
        return Err(classify_error_body(status, body));
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    match serde_json::from_slice(body) {
        Ok(value) => Ok(Some(value)),
        Err(err) if is_syntax_error(&err) => Err(Error::internal(
            "malformed response body received",
            body_meta(status, body),
        )),
        Err(err) => Err(Error::Json(err)),
    }
}

/// Classify an exchange whose body the caller does not want decoded.
///
/// Success statuses return `Ok(())` untouched; error statuses go through
/// the same vendor-error mapping as [`decode_response`].
pub(crate) fn check_response(status: StatusCode, body: &[u8]) -> Result<()> {
    if status.as_u16() >= 400 {
        return Err(classify_error_body(status, body));
    }
    Ok(())
}

/// Map a status >= 400 body to a typed error.
fn classify_error_body(status: StatusCode, body: &[u8]) -> Error {
    // Outer Option so a literal `null` body lands in the mismatch branch
    // instead of failing with a type error.
    let envelope: Option<ErrorEnvelope> = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(err) if is_syntax_error(&err) => {
            let mut meta = body_meta(status, body);
            meta.insert("err".to_string(), err.to_string());
            return Error::internal("malformed error response body received", meta);
        }
        Err(err) => return Error::Json(err),
    };

    match envelope.and_then(|envelope| envelope.error) {
        Some(vendor) if !vendor.is_empty() => Error::api(
            format!("{}: {}", vendor.summary, vendor.detail),
            vendor.code,
        ),
        _ => Error::internal(
            "internal error, response body doesn't match error type signature",
            body_meta(status, body),
        ),
    }
}

// Syntax covers malformed JSON, Eof covers truncated or empty bodies.
fn is_syntax_error(err: &serde_json::Error) -> bool {
    matches!(err.classify(), Category::Syntax | Category::Eof)
}

fn body_meta(status: StatusCode, body: &[u8]) -> BTreeMap<String, String> {
    let mut meta = BTreeMap::new();
    meta.insert(
        "body".to_string(),
        String::from_utf8_lossy(body).into_owned(),
    );
    meta.insert(
        "http_status".to_string(),
        status.canonical_reason().unwrap_or_default().to_string(),
    );
    meta
}
