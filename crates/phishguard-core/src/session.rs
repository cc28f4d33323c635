//! One check, end to end: validate, classify, render, remember.

use std::io;
use thiserror::Error;

use crate::history::History;
use crate::input::{self, InputError};
use crate::predict::{Classifier, PredictError};
use crate::render::Renderer;
use crate::verdict::Verdict;

/// Message shown for every failed classification call.
pub const REQUEST_FAILED_MESSAGE: &str =
    "Failed to connect to API. Make sure the server is running on port 8000.";

/// Why a submission did not produce a verdict.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Rejected before any network call.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The classification call failed.
    #[error("classification request failed")]
    Request(#[from] PredictError),
    /// The renderer could not write.
    #[error("rendering output")]
    Output(#[from] io::Error),
}

impl CheckError {
    /// Text shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            CheckError::Input(e) => e.to_string(),
            CheckError::Request(_) => REQUEST_FAILED_MESSAGE.to_string(),
            CheckError::Output(e) => format!("Failed to write output: {e}"),
        }
    }
}

/// Session state: the classifier, the display, and the recent history.
///
/// `submit` borrows the session mutably, so only one check can be in flight.
pub struct CheckSession<C, R> {
    classifier: C,
    renderer: R,
    history: History,
}

impl<C: Classifier, R: Renderer> CheckSession<C, R> {
    pub fn new(classifier: C, renderer: R) -> Self {
        Self {
            classifier,
            renderer,
            history: History::new(),
        }
    }

    /// Draw the initial (empty) history.
    pub fn start(&mut self) -> io::Result<()> {
        self.renderer.render_history(&self.history)
    }

    /// Validate `raw`, classify it and update the display and history.
    ///
    /// Invalid input is reported without touching the network. The loading
    /// indicator is cleared whatever the outcome of the call.
    pub fn submit(&mut self, raw: &str) -> Result<Verdict, CheckError> {
        let url = match input::normalize(raw) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(input = raw, error = %e, "input rejected");
                self.renderer.show_error(&e.to_string())?;
                return Err(e.into());
            }
        };

        self.renderer.set_loading(true)?;
        let outcome = self.run_check(&url);
        let restored = self.renderer.set_loading(false);
        let verdict = outcome?;
        restored?;
        Ok(verdict)
    }

    /// Run a preset URL through the same path as typed input.
    pub fn quick_test(&mut self, url: &str) -> Result<Verdict, CheckError> {
        self.submit(url)
    }

    /// Redraw the history list.
    pub fn show_history(&mut self) -> io::Result<()> {
        self.renderer.render_history(&self.history)
    }

    fn run_check(&mut self, url: &str) -> Result<Verdict, CheckError> {
        self.renderer.clear()?;
        match self.classifier.classify(url) {
            Ok(verdict) => {
                self.renderer.render(&verdict)?;
                if let Some(evicted) = self.history.record(&verdict) {
                    tracing::trace!(url = evicted.url.as_str(), "history evicted");
                }
                self.renderer.render_history(&self.history)?;
                Ok(verdict)
            }
            Err(e) => {
                tracing::warn!(url, kind = e.kind().as_str(), error = %e.detail(), "check failed");
                self.renderer.show_error(REQUEST_FAILED_MESSAGE)?;
                Err(e.into())
            }
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[cfg(test)]
    fn classifier(&self) -> &C {
        &self.classifier
    }
}
