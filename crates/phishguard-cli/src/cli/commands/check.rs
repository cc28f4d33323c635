//! `phishguard check <url>` – one check, then exit.

use anyhow::Result;
use phishguard_core::{CheckError, CheckSession, Classifier, TextRenderer};
use std::io::Write;

/// Run one check, printing the result card and history to `out`.
///
/// Returns `Ok(false)` when the check did not produce a verdict; the
/// renderer has already shown the message and the cause is in the log.
/// Only output failures are errors.
pub fn run_check<C: Classifier, W: Write>(
    classifier: C,
    url: &str,
    out: W,
    color: bool,
) -> Result<bool> {
    let mut session = CheckSession::new(classifier, TextRenderer::new(out).with_color(color));
    match session.submit(url) {
        Ok(_) => Ok(true),
        Err(CheckError::Output(e)) => Err(e.into()),
        Err(e) => {
            tracing::debug!("check of {:?} not completed: {}", url, e);
            Ok(false)
        }
    }
}
