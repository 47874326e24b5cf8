//! Command-line interface for readgen
//!
//! readgen is a single-purpose command: it generates a README for the project
//! in the current directory. The flags here only tune the run (accept all
//! defaults, custom template, output location, verbosity); the pipeline
//! itself lives in the library modules:
//!
//! ```text
//! gather_project_infos -> build_questions -> AnswerCollector -> assemble -> write
//! ```
//!
//! [`CliConfig`] translates the verbosity/progress flags into environment
//! variables (`RUST_LOG`, `READGEN_NO_PROGRESS`) once at startup, before the
//! tracing subscriber is installed.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::collector::{AnswerCollector, ask_overwrite};
use crate::core::ReadgenError;
use crate::github::{GithubClient, IdentityLookup};
use crate::infos::gather_project_infos;
use crate::questions::build_questions;
use crate::template::{self, DEFAULT_TEMPLATE};

/// Environment configuration derived from CLI flags.
///
/// Applied exactly once at startup so every later component (tracing
/// subscriber, progress spinners) observes a consistent environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the `RUST_LOG` environment variable; `None` preserves
    /// whatever is already set
    pub log_level: Option<String>,
    /// Whether to disable progress indicators via `READGEN_NO_PROGRESS`
    pub no_progress: bool,
}

impl CliConfig {
    /// Applies this configuration to the process environment.
    pub fn apply_to_env(&self) {
        if let Some(ref level) = self.log_level {
            // Respect an explicit RUST_LOG from the user
            if std::env::var("RUST_LOG").is_err() {
                unsafe { std::env::set_var("RUST_LOG", level) };
            }
        }

        if self.no_progress {
            unsafe { std::env::set_var("READGEN_NO_PROGRESS", "1") };
        }
    }
}

/// Generate a README.md for the project in the current directory.
#[derive(Parser, Debug)]
#[command(
    name = "readgen",
    version,
    about = "Generate beautiful README.md files from project metadata and a few questions",
    long_about = "readgen reads package.json, the git remote, lock files and the GitHub API, \
                  suggests an answer for every question it asks, and renders the result into \
                  a README.md. Run it at the root of your project."
)]
pub struct Cli {
    /// Accept every suggested default without prompting
    #[arg(short = 'y', long)]
    yes: bool,

    /// Path to a custom Tera template to render instead of the built-in one
    #[arg(short = 'p', long = "template", value_name = "PATH")]
    template: Option<PathBuf>,

    /// Where to write the generated README
    #[arg(short = 'o', long, value_name = "PATH", default_value = "README.md")]
    output: PathBuf,

    /// Enable verbose output (equivalent to RUST_LOG=debug)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    /// Disable the progress spinner (also implied by --quiet)
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    /// Derives the environment configuration from the parsed flags.
    #[must_use]
    pub fn config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            no_progress: self.no_progress || self.quiet,
        }
    }

    /// Runs the generator in the current working directory.
    pub async fn execute(self) -> Result<()> {
        let dir = std::env::current_dir().context("Failed to determine current directory")?;
        let lookup: Arc<dyn IdentityLookup> = Arc::new(GithubClient::new());
        self.execute_in_dir(&dir, lookup).await
    }

    /// Runs the full pipeline against `dir` with the given profile lookup.
    async fn execute_in_dir(self, dir: &Path, lookup: Arc<dyn IdentityLookup>) -> Result<()> {
        let infos = gather_project_infos(dir, lookup.as_ref()).await;
        debug!("resolved project infos: {infos:?}");

        let questions = build_questions(&infos, Arc::clone(&lookup));
        let collector = AnswerCollector::new(self.yes);
        let answers = collector.collect(&questions).await?;

        let template_src = match &self.template {
            Some(path) => {
                tokio::fs::read_to_string(path).await.map_err(|_| {
                    ReadgenError::TemplateNotFound {
                        path: path.display().to_string(),
                    }
                })?
            }
            None => DEFAULT_TEMPLATE.to_string(),
        };

        let readme = template::assemble(&template_src, &infos, &answers)?;

        let output_path =
            if self.output.is_absolute() { self.output.clone() } else { dir.join(&self.output) };

        if tokio::fs::try_exists(&output_path).await.unwrap_or(false)
            && !ask_overwrite(&output_path, self.yes).await?
        {
            // Declining the overwrite ends the run successfully
            println!("{}", "Aborted: existing README was left untouched.".yellow());
            return Ok(());
        }

        tokio::fs::write(&output_path, readme)
            .await
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        println!("{} README generated at {}", "✓".green(), output_path.display().to_string().cyan());
        Ok(())
    }
}
