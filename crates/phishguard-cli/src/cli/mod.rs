//! CLI for the phishguard URL checker.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phishguard_core::config::{self, PhishguardConfig};
use phishguard_core::predict::HttpClassifier;
use std::io::{self, IsTerminal};
use std::time::Duration;

use commands::{run_check, run_interactive, run_quick_tests};

/// Top-level CLI for phishguard.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "Check URLs against a phishing classification service", long_about = None)]
pub struct Cli {
    /// API origin to use instead of the configured one (e.g. http://127.0.0.1:8000).
    #[arg(long, global = true, value_name = "URL")]
    pub origin: Option<String>,

    /// Disable coloured output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check a single URL and print the verdict.
    Check {
        /// URL or bare domain to check; `https://` is added when no scheme is given.
        url: String,
    },

    /// Prompt for URLs until EOF or `:quit`; `:N` runs quick test N.
    Interactive,

    /// List the configured quick-test URLs.
    QuickTests,
}

impl CliCommand {
    /// Dispatch the parsed command. `Ok(false)` means the command ran but
    /// the check it performed failed; the user has already been told why.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let color = !cli.no_color && io::stdout().is_terminal();

        match cli.command {
            CliCommand::Check { url } => {
                let classifier = build_classifier(cli.origin.as_deref(), &cfg)?;
                return run_check(classifier, &url, io::stdout(), color);
            }
            CliCommand::Interactive => {
                let classifier = build_classifier(cli.origin.as_deref(), &cfg)?;
                let stdin = io::stdin();
                run_interactive(classifier, &cfg.quick_tests, stdin.lock(), io::stdout(), color)?;
            }
            CliCommand::QuickTests => run_quick_tests(&cfg.quick_tests, io::stdout())?,
        }

        Ok(true)
    }
}

/// Classifier for the `--origin` override, else the configured origin.
fn build_classifier(origin: Option<&str>, cfg: &PhishguardConfig) -> Result<HttpClassifier> {
    let origin = match origin {
        Some(origin) => origin.to_string(),
        None => cfg.api_origin()?,
    };
    let classifier = HttpClassifier::new(&origin)
        .with_context(|| format!("invalid API origin {origin}"))?
        .with_connect_timeout(cfg.connect_timeout_secs.map(Duration::from_secs));
    tracing::info!("using classification endpoint {}", classifier.endpoint());
    Ok(classifier)
}

#[cfg(test)]
mod tests;
