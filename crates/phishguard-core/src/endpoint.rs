//! API origin selection and endpoint construction.

use url::Url;

/// Development API origin used when the client runs from a local page.
pub const DEV_API_ORIGIN: &str = "http://127.0.0.1:8000";

/// Path of the classification endpoint relative to the API origin.
pub const PREDICT_PATH: &str = "/predict";

/// Chooses the API origin for a client served from `page_url`.
///
/// A page on `localhost` or `127.0.0.1` talks to [`DEV_API_ORIGIN`]; any other
/// page talks to its own origin (scheme, host and non-default port).
pub fn api_origin_for(page_url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(page_url)?;
    match parsed.host_str() {
        Some("localhost") | Some("127.0.0.1") => Ok(DEV_API_ORIGIN.to_string()),
        Some(_) => Ok(parsed.origin().ascii_serialization()),
        None => Err(url::ParseError::EmptyHost),
    }
}

/// Full URL of the predict endpoint under `origin`.
pub fn predict_url(origin: &str) -> Result<Url, url::ParseError> {
    Url::parse(origin)?.join(PREDICT_PATH)
}
