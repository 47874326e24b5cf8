//! Progress indicators for readgen operations.
//!
//! Wraps the `indicatif` crate with consistent styling and a kill switch for
//! CI/automation environments. The only indicator readgen needs is a spinner
//! for the metadata-gathering phase, which has no discrete progress steps.
//!
//! # Environment Variables
//!
//! - `READGEN_NO_PROGRESS`: set to any value to disable all progress output
//!
//! # Examples
//!
//! ```rust
//! use readgen::utils::progress::spinner_with_message;
//!
//! let spinner = spinner_with_message("Gathering project infos");
//! // ... long-running work ...
//! spinner.finish_with_message("Project infos gathered");
//! ```

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

/// Checks if progress output should be disabled.
///
/// Progress indicators are disabled when the `READGEN_NO_PROGRESS` environment
/// variable is set to any value, which keeps output clean in scripts and CI.
fn is_progress_disabled() -> bool {
    std::env::var("READGEN_NO_PROGRESS").is_ok()
}

/// A spinner-style progress indicator with consistent readgen styling.
///
/// Wraps an `indicatif` progress bar; hidden entirely when progress output is
/// disabled via `READGEN_NO_PROGRESS`.
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Creates a spinner for indeterminate progress operations.
    ///
    /// The spinner uses Unicode Braille patterns and ticks every 100ms until
    /// finished.
    #[must_use]
    pub fn new_spinner() -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self { inner: bar }
    }

    /// Sets the message displayed next to the spinner.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Finishes the spinner, leaving the final message visible.
    pub fn finish_with_message(&self, msg: impl Into<String>) {
        self.inner.finish_with_message(msg.into());
    }

    /// Finishes the spinner and removes it from the terminal entirely.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{prefix:.bold} {spinner:.cyan} {msg}")
        .unwrap()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
}

/// Creates a spinner with an initial message in one call.
pub fn spinner_with_message(msg: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(msg);
    spinner
}
