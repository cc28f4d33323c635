//! Integration test: real HTTP round trips against a local stand-in for the
//! classification service, driven through `HttpClassifier` and `CheckSession`.

mod common;

use phishguard_core::predict::{Classifier, FailureKind, HttpClassifier, PredictError};
use phishguard_core::session::{CheckError, CheckSession, REQUEST_FAILED_MESSAGE};
use phishguard_core::render::TextRenderer;
use phishguard_core::Label;

#[test]
fn classifier_posts_json_and_reads_verdict() {
    let server = common::predict_server::start_json(
        r#"{"predictions":[1],"probabilities":[0.92],"labels":["phishing"]}"#,
    );
    let classifier = HttpClassifier::new(&server.origin).unwrap();

    let verdict = classifier.classify("https://login-paypal.example.com").unwrap();
    assert_eq!(verdict.label, Label::Phishing);
    assert_eq!(verdict.confidence_percent(), "92.0%");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/predict");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"urls": ["https://login-paypal.example.com"]})
    );
}

#[test]
fn redirects_are_followed_with_the_post_body() {
    let target = common::predict_server::start_json(r#"{"predictions":[1],"probabilities":[0.8]}"#);
    for status in ["307 Temporary Redirect", "308 Permanent Redirect", "301 Moved Permanently", "302 Found"] {
        let front = common::predict_server::start_redirect(
            status,
            &format!("{}/predict", target.origin),
        );
        let classifier = HttpClassifier::new(&front.origin).unwrap();
        let verdict = classifier.classify("https://example.com").unwrap();
        assert_eq!(verdict.label, Label::Phishing, "after {status}");
        assert_eq!(front.requests().len(), 1);
    }

    let requests = target.requests();
    assert_eq!(requests.len(), 4);
    for request in requests {
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/predict");
        assert_eq!(request.body, r#"{"urls":["https://example.com"]}"#);
    }
}

#[test]
fn non_success_status_is_failure() {
    let server = common::predict_server::start("500 Internal Server Error", r#"{"detail":"boom"}"#);
    let classifier = HttpClassifier::new(&server.origin).unwrap();
    let err = classifier.classify("https://example.com").unwrap_err();
    assert!(matches!(err, PredictError::Http(500)));
    assert_eq!(err.kind(), FailureKind::Status);
}

#[test]
fn malformed_body_is_failure() {
    let server = common::predict_server::start_json("<html>not json</html>");
    let classifier = HttpClassifier::new(&server.origin).unwrap();
    let err = classifier.classify("https://example.com").unwrap_err();
    assert!(matches!(err, PredictError::Decode(_)));
}

#[test]
fn refused_connection_is_failure() {
    let classifier = HttpClassifier::new(&common::predict_server::refused_origin()).unwrap();
    let err = classifier.classify("https://example.com").unwrap_err();
    assert!(matches!(err, PredictError::Transport(_)));
    assert_eq!(err.kind(), FailureKind::Connection);
}

#[test]
fn session_normalizes_and_renders_safe_result() {
    let server =
        common::predict_server::start_json(r#"{"predictions":[0],"probabilities":[0.92]}"#);
    let classifier = HttpClassifier::new(&server.origin).unwrap();
    let mut session = CheckSession::new(classifier, TextRenderer::new(Vec::new()));

    let verdict = session.submit("example.com").unwrap();
    assert_eq!(verdict.url, "https://example.com");
    assert_eq!(verdict.confidence_percent(), "8.0%");

    let requests = server.requests();
    assert_eq!(requests[0].body, r#"{"urls":["https://example.com"]}"#);

    let out = String::from_utf8(session.renderer().get_ref().clone()).unwrap();
    assert!(out.contains("✓ Safe Website"));
    assert!(out.contains("8.0%"));
    assert!(out.contains("https://example.com  [Safe]"));
    assert!(!session.renderer().is_loading());
}

#[test]
fn session_reports_refused_connection_and_reenables_input() {
    let classifier = HttpClassifier::new(&common::predict_server::refused_origin()).unwrap();
    let mut session = CheckSession::new(classifier, TextRenderer::new(Vec::new()));

    let err = session.submit("https://example.com").unwrap_err();
    assert!(matches!(err, CheckError::Request(_)));
    assert!(!session.renderer().is_loading());
    assert!(session.history().is_empty());

    let out = String::from_utf8(session.renderer().get_ref().clone()).unwrap();
    assert!(out.contains(REQUEST_FAILED_MESSAGE));
}

#[test]
fn invalid_input_sends_nothing() {
    let server = common::predict_server::start_json(r#"{"predictions":[1],"probabilities":[1.0]}"#);
    let classifier = HttpClassifier::new(&server.origin).unwrap();
    let mut session = CheckSession::new(classifier, TextRenderer::new(Vec::new()));

    assert!(session.submit("definitely not a url").is_err());
    assert!(session.submit("").is_err());
    assert!(server.requests().is_empty());
}
