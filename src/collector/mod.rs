//! Interactive answer collection
//!
//! Walks the question sequence in order and produces one [`Answers`] record.
//! For every question the effective default is resolved lazily, immediately
//! before the prompt is shown, via [`Question::effective_default`]; that is
//! what lets a later question's default react to an earlier answer in the
//! same run.
//!
//! Two modes:
//! - **Interactive**: each question is printed and a line is read from stdin;
//!   empty input accepts the default. Requires a terminal on stdin; a missing
//!   terminal is the one fatal condition in the question flow.
//! - **Accept-all** (`--yes`): no prompting, every question resolves to its
//!   effective default. Dependent defaults still run, but since no answer can
//!   deviate from its default they take their unchanged fast path.
//!
//! Also hosts [`ask_overwrite`], the yes/no gate shown before an existing
//! README is replaced. Declining is a successful no-op, not an error.

use anyhow::Result;
use colored::Colorize;
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::core::ReadgenError;
use crate::questions::{AnswerValue, Answers, Question, QuestionKind};

/// Collects answers for a question sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerCollector {
    /// Accept every default without prompting
    pub assume_yes: bool,
}

impl AnswerCollector {
    /// Creates a collector; `assume_yes` selects accept-all mode.
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    /// Asks every question in order and returns the collected answers.
    ///
    /// Fails only when interactive mode is requested without a terminal on
    /// stdin. Every other irregularity (failed dependent lookup, empty
    /// input, skipped optional value) degrades to an empty answer.
    pub async fn collect(&self, questions: &[Question]) -> Result<Answers> {
        if !self.assume_yes && !std::io::stdin().is_terminal() {
            return Err(ReadgenError::PromptUnavailable.into());
        }

        let mut answers = Answers::new();

        for question in questions {
            // Lazy per-question resolution: dependent defaults see the
            // answers collected so far, not the initial snapshot
            let default = question.effective_default(&answers).await;

            let value = if self.assume_yes {
                accept_default(question, default)
            } else {
                self.prompt(question, default).await?
            };
            answers.insert(question.name, value);
        }

        Ok(answers)
    }

    /// Prints one prompt and reads one line of input.
    async fn prompt(&self, question: &Question, default: Option<String>) -> Result<AnswerValue> {
        match question.kind {
            QuestionKind::Input => {
                let hint = default
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .map(|d| format!(" ({d})"))
                    .unwrap_or_default();
                print!("{} {}{} ", "?".green().bold(), question.message, hint.dimmed());
                std::io::stdout().flush()?;

                let input = read_line().await?;
                let value = if input.is_empty() {
                    default.unwrap_or_default()
                } else {
                    input
                };
                Ok(AnswerValue::Text(value))
            }
            QuestionKind::Confirm => {
                let default_yes = default.as_deref() == Some("yes");
                let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
                print!("{} {} {} ", "?".green().bold(), question.message, hint.dimmed());
                std::io::stdout().flush()?;

                let input = read_line().await?;
                Ok(AnswerValue::Flag(parse_confirm(&input, default_yes)))
            }
        }
    }
}

/// Converts an effective default into the answer recorded in `--yes` mode.
fn accept_default(question: &Question, default: Option<String>) -> AnswerValue {
    match question.kind {
        QuestionKind::Input => AnswerValue::Text(default.unwrap_or_default()),
        QuestionKind::Confirm => AnswerValue::Flag(default.as_deref() == Some("yes")),
    }
}

/// Parses a yes/no reply; empty input falls back to the default.
fn parse_confirm(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" | "true" => true,
        _ => false,
    }
}

/// Reads one trimmed line from stdin.
///
/// Uses the async stdin reader so the prompt loop stays on the runtime; each
/// call creates a fresh reader because stdin is only touched one line at a
/// time between prompts.
async fn read_line() -> Result<String> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut response = String::new();
    reader.read_line(&mut response).await?;
    Ok(response.trim().to_string())
}

/// Asks whether an existing file at `path` may be overwritten.
///
/// Defaults to "no"; in accept-all mode the confirmation is skipped and the
/// file is overwritten, matching the no-prompt contract of `--yes`.
pub async fn ask_overwrite(path: &std::path::Path, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(ReadgenError::PromptUnavailable.into());
    }

    print!(
        "{} readgen will overwrite {}. Are you sure you want to continue? {} ",
        "?".green().bold(),
        path.display().to_string().cyan(),
        "[y/N]".dimmed()
    );
    std::io::stdout().flush()?;

    let input = read_line().await?;
    Ok(parse_confirm(&input, false))
}
