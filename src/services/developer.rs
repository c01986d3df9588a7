//! JWT inspection and URL parsing.

use crate::domain::errors::ToolError;
use crate::domain::models::{JwtReport, UrlParts};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::Value;

fn decode_segment(name: &str, segment: &str) -> Result<Value, ToolError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| ToolError::InvalidJwt(format!("{} is not base64url: {}", name, e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ToolError::InvalidJwt(format!("{} is not JSON: {}", name, e)))
}

/// Decodes without verifying the signature.
pub fn jwt_decode(token: &str) -> Result<JwtReport, ToolError> {
    let token = token.trim();
    let token = token.strip_prefix("Bearer ").unwrap_or(token);
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ToolError::InvalidJwt(format!(
            "expected 3 dot-separated segments, found {}",
            parts.len()
        )));
    }
    Ok(JwtReport {
        header: decode_segment("header", parts[0])?,
        payload: decode_segment("payload", parts[1])?,
        signature: parts[2].to_string(),
    })
}

pub fn url_parse(raw: &str) -> Result<UrlParts, ToolError> {
    let url = url::Url::parse(raw.trim())?;
    Ok(UrlParts {
        scheme: url.scheme().to_string(),
        username: url.username().to_string(),
        password: url.password().map(str::to_string),
        host: url.host_str().map(str::to_string),
        port: url.port_or_known_default(),
        path: url.path().to_string(),
        query: url.query().map(str::to_string),
        query_pairs: url.query_pairs().into_owned().collect(),
        fragment: url.fragment().map(str::to_string),
    })
}
