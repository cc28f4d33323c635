//! Remote classification call: `POST <origin>/predict`.
//!
//! Uses the curl crate (libcurl). One request per check, no retry; any
//! non-2xx status, transport error or unexpected body is a failure.

mod error;
mod wire;

pub use error::{classify_curl_error, FailureKind, PredictError};
pub use wire::{PredictRequest, PredictResponse};

use std::time::Duration;
use url::Url;

use crate::endpoint;
use crate::verdict::Verdict;

/// Something that can classify a single normalized URL.
pub trait Classifier {
    fn classify(&self, url: &str) -> Result<Verdict, PredictError>;
}

impl<T: Classifier + ?Sized> Classifier for &T {
    fn classify(&self, url: &str) -> Result<Verdict, PredictError> {
        (**self).classify(url)
    }
}

/// Classifier backed by the HTTP classification service.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    endpoint: Url,
    connect_timeout: Option<Duration>,
}

impl HttpClassifier {
    /// Targets `<origin>/predict`.
    pub fn new(origin: &str) -> Result<Self, PredictError> {
        Ok(Self {
            endpoint: endpoint::predict_url(origin)?,
            connect_timeout: None,
        })
    }

    /// Sets a connect timeout; without one the libcurl default applies.
    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends the request and returns the raw status and body.
    ///
    /// Runs in the current thread.
    fn post_json(&self, body: &[u8]) -> Result<(u32, Vec<u8>), PredictError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(self.endpoint.as_str())?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        // Keep POST (and the body) across 301/302/303 as well as 307/308.
        easy.follow_location(true)?;
        easy.post_redirections(curl::easy::PostRedirections::new().redirect_all(true))?;
        if let Some(timeout) = self.connect_timeout {
            easy.connect_timeout(timeout)?;
        }

        let mut headers = curl::easy::List::new();
        headers.append("Content-Type: application/json")?;
        headers.append("Accept: application/json")?;
        easy.http_headers(headers)?;

        let mut response = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, response))
    }
}

impl Classifier for HttpClassifier {
    fn classify(&self, url: &str) -> Result<Verdict, PredictError> {
        let body =
            serde_json::to_vec(&PredictRequest::single(url)).map_err(PredictError::Encode)?;
        tracing::debug!(endpoint = %self.endpoint, url, "POST predict");

        let (code, response) = self.post_json(&body)?;
        if !(200..300).contains(&code) {
            return Err(PredictError::Http(code));
        }

        let verdict = wire::parse_body(url, &response)?;
        tracing::info!(
            url,
            label = verdict.label.short_name(),
            probability = verdict.probability,
            "classified"
        );
        Ok(verdict)
    }
}
