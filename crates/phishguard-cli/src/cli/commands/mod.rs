//! CLI command handlers, one per file.

mod check;
mod interactive;

pub use check::run_check;
pub use interactive::run_interactive;
pub use quick_tests::run_quick_tests;
