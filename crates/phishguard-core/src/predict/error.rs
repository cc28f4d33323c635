//! Failure of the classification call.

use thiserror::Error;

/// Everything that can go wrong between sending `POST /predict` and holding a verdict.
///
/// The user sees one generic message for all of these; the variants exist
/// for logs and tests.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Origin could not be turned into an endpoint URL.
    #[error("invalid API endpoint")]
    Endpoint(#[from] url::ParseError),
    /// Request body could not be serialized.
    #[error("encoding request")]
    Encode(#[source] serde_json::Error),
    /// Curl reported an error (connection refused, DNS, timeout, ...).
    #[error("transport")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Body was not the expected JSON shape.
    #[error("decoding response")]
    Decode(#[from] serde_json::Error),
    /// Body parsed but carried no prediction for the submitted URL.
    #[error("response contained no prediction")]
    EmptyResponse,
}

/// Coarse failure category, used for log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Connection,
    Status,
    Body,
    Other,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Connection => "connection",
            FailureKind::Status => "status",
            FailureKind::Body => "body",
            FailureKind::Other => "other",
        }
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_operation_timedout() {
        return FailureKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FailureKind::Connection;
    }
    FailureKind::Other
}

impl PredictError {
    /// This error and its causes joined with `: `, for logs.
    pub fn detail(&self) -> String {
        let mut text = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            PredictError::Transport(e) => classify_curl_error(e),
            PredictError::Http(_) => FailureKind::Status,
            PredictError::Decode(_) | PredictError::EmptyResponse => FailureKind::Body,
            PredictError::Endpoint(_) | PredictError::Encode(_) => FailureKind::Other,
        }
    }
}
