//! JSON bodies exchanged with the classification service.

use serde::{Deserialize, Serialize};

use super::PredictError;
use crate::verdict::Verdict;

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub urls: Vec<String>,
}

impl PredictRequest {
    pub fn single(url: &str) -> Self {
        Self {
            urls: vec![url.to_string()],
        }
    }
}

/// Body returned by the service: one entry per submitted URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictResponse {
    /// 1 = phishing, 0 = legitimate.
    pub predictions: Vec<f64>,
    /// Phishing probability in [0, 1].
    pub probabilities: Vec<f64>,
    /// `"phishing"` / `"legitimate"`; older deployments omit it.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl PredictResponse {
    /// Verdict for the first (and only) submitted URL.
    pub fn first_verdict(&self, url: &str) -> Result<Verdict, PredictError> {
        match (self.predictions.first(), self.probabilities.first()) {
            (Some(&prediction), Some(&probability)) => {
                Ok(Verdict::new(url, prediction, probability))
            }
            _ => Err(PredictError::EmptyResponse),
        }
    }
}

/// Decode a response body and pick the verdict for `url`.
pub(crate) fn parse_body(url: &str, body: &[u8]) -> Result<Verdict, PredictError> {
    let response: PredictResponse = serde_json::from_slice(body)?;
    if let Some(label) = response.labels.first() {
        tracing::debug!(url, label = label.as_str(), "service label");
    }
    response.first_verdict(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Label;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_string(&PredictRequest::single("https://example.com")).unwrap();
        assert_eq!(body, r#"{"urls":["https://example.com"]}"#);
    }

    #[test]
    fn parse_phishing_body() {
        let v = parse_body(
            "https://bad.example",
            br#"{"predictions":[1],"probabilities":[0.92],"labels":["phishing"]}"#,
        )
        .unwrap();
        assert_eq!(v.label, Label::Phishing);
        assert_eq!(v.url, "https://bad.example");
        assert_eq!(v.confidence_percent(), "92.0%");
    }

    #[test]
    fn parse_body_without_labels() {
        let v = parse_body("https://ok.example", br#"{"predictions":[0],"probabilities":[0.1]}"#)
            .unwrap();
        assert_eq!(v.label, Label::Safe);
        assert_eq!(v.confidence_percent(), "90.0%");
    }

    #[test]
    fn only_first_entry_is_used() {
        let v = parse_body(
            "u",
            br#"{"predictions":[0,1],"probabilities":[0.3,0.99]}"#,
        )
        .unwrap();
        assert_eq!(v.label, Label::Safe);
        assert!((v.probability - 0.3).abs() < 1e-12);
    }

    #[test]
    fn empty_arrays_rejected() {
        let err = parse_body("u", br#"{"predictions":[],"probabilities":[]}"#).unwrap_err();
        assert!(matches!(err, PredictError::EmptyResponse));
        let err = parse_body("u", br#"{"predictions":[1],"probabilities":[]}"#).unwrap_err();
        assert!(matches!(err, PredictError::EmptyResponse));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            parse_body("u", b"<html>oops</html>").unwrap_err(),
            PredictError::Decode(_)
        ));
        assert!(matches!(
            parse_body("u", br#"{"predictions":"nope"}"#).unwrap_err(),
            PredictError::Decode(_)
        ));
    }
}
