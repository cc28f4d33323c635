//! Classification outcome for one URL and its presentation state.

use std::fmt;

/// Which way the classifier decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Phishing,
    Safe,
}

impl Label {
    /// The classifier reports 1 for phishing; anything else counts as safe.
    pub fn from_prediction(prediction: f64) -> Self {
        if prediction == 1.0 {
            Label::Phishing
        } else {
            Label::Safe
        }
    }

    /// Style class shared by the result card, icon, gauge and history dot.
    pub fn tone(self) -> &'static str {
        match self {
            Label::Phishing => "danger",
            Label::Safe => "safe",
        }
    }

    /// Headline shown on the result card.
    pub fn headline(self) -> &'static str {
        match self {
            Label::Phishing => "⚠️ Phishing Detected!",
            Label::Safe => "✓ Safe Website",
        }
    }

    /// Short label used in the history list.
    pub fn short_name(self) -> &'static str {
        match self {
            Label::Phishing => "Phishing",
            Label::Safe => "Safe",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Result of one successful check.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// The normalized URL that was submitted.
    pub url: String,
    pub label: Label,
    /// Phishing probability reported by the classifier, in [0, 1].
    pub probability: f64,
}

impl Verdict {
    pub fn new(url: impl Into<String>, prediction: f64, probability: f64) -> Self {
        Self {
            url: url.into(),
            label: Label::from_prediction(prediction),
            probability,
        }
    }

    pub fn is_phishing(&self) -> bool {
        self.label == Label::Phishing
    }

    /// Probability of the displayed label.
    pub fn confidence(&self) -> f64 {
        match self.label {
            Label::Phishing => self.probability,
            Label::Safe => 1.0 - self.probability,
        }
    }

    /// Confidence as a percentage with one decimal, e.g. `"92.0%"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence() * 100.0)
    }

    /// Gauge fill in [0, 1], clamped for out-of-range probabilities.
    pub fn fill_ratio(&self) -> f64 {
        let c = self.confidence();
        if c.is_nan() {
            0.0
        } else {
            c.clamp(0.0, 1.0)
        }
    }
}
