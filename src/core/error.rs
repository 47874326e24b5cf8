//! Error handling for readgen
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`ReadgenError`]) for precise handling in code
//! 2. **User-friendly reports** ([`ErrorContext`]) with actionable suggestions
//!   for CLI users
//!
//! Note that most failures in readgen are deliberately *not* errors: a missing
//! manifest, a git command that fails, or an unreachable GitHub API all
//! degrade to absent metadata fields and the run continues. The variants here
//! cover the few conditions that actually abort a run, such as not being able
//! to prompt the user at all or failing to render the output template.
//!
//! Use [`user_friendly_error`] at the CLI boundary to convert any
//! [`anyhow::Error`] into a displayable context with suggestions.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Enumerated error types for failure cases that abort a readgen run.
#[derive(Error, Debug, Clone)]
pub enum ReadgenError {
    /// A git command returned a non-zero exit code.
    ///
    /// Callers in the metadata resolver catch this and treat the remote URL
    /// as absent; it only surfaces to the user when propagated deliberately.
    #[error("git operation failed: {operation}")]
    GitCommandError {
        /// The git operation that failed (e.g., "config --get remote.origin.url")
        operation: String,
        /// The error output from the git command
        stderr: String,
    },

    /// Git executable not found in PATH.
    #[error("git is not installed or not found in PATH")]
    GitNotFound,

    /// The GitHub profile lookup failed (network error or non-success status).
    ///
    /// Like git failures, this is caught at the resolver boundary and
    /// collapsed into an absent website field.
    #[error("GitHub profile lookup failed for '{username}': {reason}")]
    GithubLookupError {
        /// The GitHub username that was queried
        username: String,
        /// Why the lookup failed
        reason: String,
    },

    /// Standard input is not a terminal and `--yes` was not given.
    ///
    /// Interactive questions cannot be asked without a terminal; this is the
    /// only fatal condition in the question flow.
    #[error("cannot prompt for answers: stdin is not a terminal")]
    PromptUnavailable,

    /// A user-supplied template file could not be read.
    #[error("template file not found: {path}")]
    TemplateNotFound {
        /// The path passed via `--template`
        path: String,
    },

    /// Template rendering failed (syntax error or missing variable).
    #[error("failed to render README template: {reason}")]
    TemplateRenderError {
        /// The underlying Tera error message
        reason: String,
    },

    /// A file system operation failed.
    #[error("file system error during {operation}: {path}")]
    FileSystemError {
        /// The operation being performed (e.g., "write")
        operation: String,
        /// The path involved
        path: String,
    },

    /// Catch-all for errors without a dedicated variant.
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// A user-facing error report: the error itself plus optional details and an
/// actionable suggestion. Displayed with colors at the CLI boundary.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying readgen error
    pub error: ReadgenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ReadgenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, displayed in green.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add extra background details, displayed in yellow.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the report to stderr with colored severity markers.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error into a user-friendly [`ErrorContext`] with contextual
/// suggestions, matching on known error types first.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(readgen_error) = error.downcast_ref::<ReadgenError>() {
        return create_error_context(readgen_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(ReadgenError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check file ownership or run from a directory you can write to")
                .with_details("readgen does not have permission to read or write a file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(ReadgenError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(ReadgenError::Other {
        message: format!("{error:#}"),
    })
}

/// Attach suggestions and details for the known [`ReadgenError`] variants.
fn create_error_context(error: ReadgenError) -> ErrorContext {
    match &error {
        ReadgenError::GitNotFound => ErrorContext::new(error.clone())
            .with_suggestion("Install git from https://git-scm.com/ or via your package manager")
            .with_details("readgen uses the system git command to read the remote URL"),
        ReadgenError::PromptUnavailable => ErrorContext::new(error.clone())
            .with_suggestion("Run readgen from an interactive terminal, or pass --yes to accept all defaults")
            .with_details("Interactive questions need a terminal attached to stdin"),
        ReadgenError::TemplateNotFound { path } => {
            let path = path.clone();
            ErrorContext::new(error.clone())
                .with_suggestion(format!("Check that '{path}' exists and is readable"))
        }
        ReadgenError::TemplateRenderError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check the template syntax; readgen templates use the Tera language")
            .with_details("Rendering errors are usually caused by unclosed tags or unknown variables"),
        ReadgenError::GitCommandError { stderr, .. } => {
            let stderr = stderr.clone();
            ErrorContext::new(error.clone()).with_details(stderr)
        }
        _ => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_context_display_includes_suggestion_and_details() {
        let ctx = ErrorContext::new(ReadgenError::GitNotFound)
            .with_suggestion("install git")
            .with_details("git missing");

        let rendered = format!("{ctx}");
        assert!(rendered.contains("git is not installed"));
        assert!(rendered.contains("Suggestion: install git"));
        assert!(rendered.contains("Details: git missing"));
    }

    #[test]
    fn user_friendly_error_downcasts_readgen_errors() {
        let err = anyhow::Error::from(ReadgenError::PromptUnavailable);
        let ctx = user_friendly_error(err);

        assert!(matches!(ctx.error, ReadgenError::PromptUnavailable));
        assert!(ctx.suggestion.as_deref().unwrap_or("").contains("--yes"));
    }

    #[test]
    fn user_friendly_error_wraps_unknown_errors() {
        let err = anyhow::anyhow!("something odd");
        let ctx = user_friendly_error(err);

        assert!(matches!(ctx.error, ReadgenError::Other { .. }));
        assert!(format!("{}", ctx.error).contains("something odd"));
    }
}
