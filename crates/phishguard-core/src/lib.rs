//! Phishing URL checker core.
//!
//! Validates user input, asks the remote classification service about it,
//! renders the verdict and keeps a short history of recent checks.

pub mod config;
pub mod endpoint;
pub mod history;
pub mod input;
pub mod logging;
pub mod predict;
pub mod render;
pub mod session;
pub mod verdict;

pub use history::{History, HistoryEntry};
pub use predict::{Classifier, HttpClassifier, PredictError};
pub use render::{Renderer, TextRenderer};
pub use session::{CheckError, CheckSession};
pub use verdict::{Label, Verdict};
