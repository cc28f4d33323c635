//! Presentation of verdicts, history and errors.
//!
//! The session only talks to the [`Renderer`] trait; [`TextRenderer`] draws
//! to any `io::Write` (a terminal in the CLI, a buffer in tests).

use std::io::{self, Write};

use crate::history::{History, EMPTY_HISTORY_TEXT};
use crate::verdict::{Label, Verdict};

/// Cells in the confidence gauge.
pub const GAUGE_WIDTH: usize = 20;

/// Display capability used by the check session.
pub trait Renderer {
    /// Show the result card for a verdict.
    fn render(&mut self, verdict: &Verdict) -> io::Result<()>;
    /// Redraw the whole history list.
    fn render_history(&mut self, history: &History) -> io::Result<()>;
    /// Show a user-facing error message.
    fn show_error(&mut self, message: &str) -> io::Result<()>;
    /// Toggle the loading indicator; while loading, input is disabled.
    fn set_loading(&mut self, loading: bool) -> io::Result<()>;
    /// Hide the previous result and error before a new call.
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Width of the rule drawn between checks.
pub const SEPARATOR_WIDTH: usize = 40;

/// Gauge bar like `[##################--]` for a fill ratio in [0, 1].
pub fn gauge(fill_ratio: f64) -> String {
    let filled = ((fill_ratio * GAUGE_WIDTH as f64).round() as usize).min(GAUGE_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(GAUGE_WIDTH - filled))
}

/// Plain-text renderer with optional ANSI colouring by tone.
pub struct TextRenderer<W: Write> {
    out: W,
    color: bool,
    loading: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: false,
            loading: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// True while a check is outstanding and input must not be accepted.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, label: Label, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let code = match label {
            Label::Phishing => "31",
            Label::Safe => "32",
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, verdict: &Verdict) -> io::Result<()> {
        let label = verdict.label;
        let headline = self.paint(label, label.headline());
        let bar = self.paint(label, &gauge(verdict.fill_ratio()));
        writeln!(self.out, "{headline}")?;
        writeln!(self.out, "  URL:        {}", verdict.url)?;
        writeln!(self.out, "  Confidence: {}", verdict.confidence_percent())?;
        writeln!(self.out, "  {bar}")?;
        self.out.flush()
    }

    fn render_history(&mut self, history: &History) -> io::Result<()> {
        writeln!(self.out, "Recent checks:")?;
        if history.is_empty() {
            writeln!(self.out, "  {EMPTY_HISTORY_TEXT}")?;
            return self.out.flush();
        }
        for entry in history.iter() {
            let dot = self.paint(entry.label, "●");
            let tag = self.paint(entry.label, entry.label.short_name());
            writeln!(self.out, "  {dot} {}  [{tag}]", entry.url)?;
        }
        self.out.flush()
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "Error: {message}")?;
        self.out.flush()
    }

    /// Output already written cannot be taken back; a rule marks where the
    /// new check starts.
    fn clear(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        self.out.flush()
    }

    fn set_loading(&mut self, loading: bool) -> io::Result<()> {
        self.loading = loading;
        if loading {
            writeln!(self.out, "Checking...")?;
            self.out.flush()?;
        }
        Ok(())
    }
}
