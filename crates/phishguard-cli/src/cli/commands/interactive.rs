//! `phishguard interactive` – prompt loop.
//!
//! Enter submits the typed line. A failed check is reported and the loop
//! keeps going; only EOF, `:quit` or an output error end it.

use anyhow::Result;
use phishguard_core::{CheckError, CheckSession, Classifier, Renderer, TextRenderer};
use std::io::{BufRead, Write};

const PROMPT: &str = "url> ";
const HELP: &str = "Enter a URL to check. :N runs quick test N, :tests lists them, :history, :quit.";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PromptInput<'a> {
    Check(&'a str),
    QuickTest(usize),
    ListQuickTests,
    History,
    Help,
    Quit,
    Unknown(&'a str),
}

pub(crate) fn parse_prompt(line: &str) -> PromptInput<'_> {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return PromptInput::Check(line);
    };
    match command {
        "q" | "quit" | "exit" => PromptInput::Quit,
        "h" | "history" => PromptInput::History,
        "t" | "tests" => PromptInput::ListQuickTests,
        "?" | "help" => PromptInput::Help,
        n => match n.parse::<usize>() {
            Ok(n) if n >= 1 => PromptInput::QuickTest(n),
            _ => PromptInput::Unknown(trimmed),
        },
    }
}

pub fn run_interactive<C, In, Out>(
    classifier: C,
    quick_tests: &[String],
    mut input: In,
    out: Out,
    color: bool,
) -> Result<()>
where
    C: Classifier,
    In: BufRead,
    Out: Write,
{
    let mut session = CheckSession::new(classifier, TextRenderer::new(out).with_color(color));
    writeln!(session.renderer_mut().get_mut(), "{HELP}")?;
    session.start()?;

    let mut line = String::new();
    loop {
        {
            let out = session.renderer_mut().get_mut();
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        let outcome = match parse_prompt(line) {
            PromptInput::Quit => break,
            PromptInput::History => {
                session.show_history()?;
                continue;
            }
            PromptInput::Help => {
                writeln!(session.renderer_mut().get_mut(), "{HELP}")?;
                continue;
            }
            PromptInput::ListQuickTests => {
                super::run_quick_tests(quick_tests, session.renderer_mut().get_mut())?;
                continue;
            }
            PromptInput::QuickTest(n) => match quick_tests.get(n - 1) {
                Some(url) => session.quick_test(url),
                None => {
                    session
                        .renderer_mut()
                        .show_error(&format!("No quick test :{n} (see :tests)"))?;
                    continue;
                }
            },
            PromptInput::Unknown(cmd) => {
                session
                    .renderer_mut()
                    .show_error(&format!("Unknown command {cmd} (see :help)"))?;
                continue;
            }
            PromptInput::Check(raw) => session.submit(raw),
        };

        match outcome {
            Ok(verdict) => tracing::debug!(url = verdict.url.as_str(), "check done"),
            Err(CheckError::Output(e)) => return Err(e.into()),
            Err(e) => tracing::debug!("check not completed: {}", e),
        }
    }

    tracing::info!(checked = session.history().len(), "interactive session ended");
    Ok(())
}
