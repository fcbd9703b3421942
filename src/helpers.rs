//! Helper utilities shared by the REST handlers.

use crate::error::ShopError;
use axum::http::{header, HeaderMap};
use serde::{de::DeserializeOwned, Serialize};

/// Parses an identifier taken from a request path.
///
/// Leading digits are read and anything after them is ignored, so `1abc` and
/// `1.5` both name id 1. Input without leading digits (or with a minus sign)
/// yields `None`, which handlers treat as an id that matches nothing.
pub fn parse_id(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

/// Reads an optional JSON request body.
///
/// A request that is not declared as JSON, or whose body is blank, yields
/// `T::default()`. A declared JSON body that does not parse is an
/// [`ShopError::InvalidBody`].
pub fn json_or_default<T>(headers: &HeaderMap, body: &[u8]) -> Result<T, ShopError>
where
    T: DeserializeOwned + Default,
{
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|error| {
        ShopError::InvalidBody(format!(
            "Failed to parse the request body as JSON: {error}"
        ))
    })
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

/// `{"message": ...}` body used for confirmations.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: &'static str,
}

impl Confirmation {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
