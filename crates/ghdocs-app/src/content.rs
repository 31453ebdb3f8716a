// Rust guideline compliant 2026-02-09

//! Decoding of file bodies returned by the contents API.

use crate::error::{AppError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Decodes a base64 file body into UTF-8 text.
///
/// The contents API wraps base64 at 60 columns, so all ASCII whitespace is
/// removed before decoding.
///
/// # Errors
///
/// Returns [`AppError::Decode`] if the body is not valid base64 or the
/// decoded bytes are not UTF-8.
pub fn decode_base64_content(path: &str, encoded: &str) -> Result<String> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact).map_err(|err| AppError::Decode {
        path: path.to_string(),
        reason: err.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|err| AppError::Decode {
        path: path.to_string(),
        reason: err.to_string(),
    })
}

/// Decodes a file body according to the `encoding` field of the response.
///
/// # Errors
///
/// Returns [`AppError::Decode`] for unsupported encodings or invalid bodies.
pub fn decode_content(path: &str, encoding: Option<&str>, body: &str) -> Result<String> {
    match encoding.unwrap_or("base64") {
        "base64" => decode_base64_content(path, body),
        "utf-8" | "utf8" => Ok(body.to_string()),
        other => Err(AppError::Decode {
            path: path.to_string(),
            reason: format!("unsupported encoding '{}'", other),
        }),
    }
}
