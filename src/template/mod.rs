//! Conditional README assembly
//!
//! Pure document assembly: given the metadata snapshot and the collected
//! answers, render a Tera template into the final README text. No I/O happens
//! here; reading a custom template file and writing the output are the CLI's
//! concern.
//!
//! Every optional section of the built-in template is gated on a predicate
//! over the context (an answer or metadata field being non-empty), sections
//! appear in one fixed order regardless of which are included, and absent
//! values render as omitted lines rather than placeholder text.

use anyhow::Result;
use tera::Tera;

use crate::core::ReadgenError;
use crate::infos::ProjectInfos;
use crate::questions::{AnswerValue, Answers, QUESTION_NAMES};

/// The built-in README template, compiled into the binary.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/default.md");

/// Renders `template_src` with a context built from `infos` and `answers`.
///
/// Metadata fields are inserted first and answers second, so an answer always
/// wins over a metadata field of the same name. Absent optional values are
/// inserted as empty strings, which Tera's `if` treats as false.
pub fn assemble(template_src: &str, infos: &ProjectInfos, answers: &Answers) -> Result<String> {
    let context = build_context(infos, answers);

    let mut tera = Tera::default();
    tera.add_raw_template("readme", template_src).map_err(|e| {
        ReadgenError::TemplateRenderError {
            reason: error_chain(&e),
        }
    })?;

    let rendered = tera.render("readme", &context).map_err(|e| {
        ReadgenError::TemplateRenderError {
            reason: error_chain(&e),
        }
    })?;
    Ok(rendered)
}

/// Builds the Tera context exposed to templates.
fn build_context(infos: &ProjectInfos, answers: &Answers) -> tera::Context {
    let mut context = tera::Context::new();

    // Seed every question key so templates can reference any of them even
    // when an answer was never collected; Tera is strict about unknown
    // variables inside conditionals
    for name in QUESTION_NAMES {
        context.insert(*name, "");
    }
    context.insert("is_project_on_npm", &false);

    // Metadata fields useful to custom templates even when no question
    // carries them
    context.insert("repository_url", infos.repository_url.as_deref().unwrap_or(""));
    context.insert("contributing_url", infos.contributing_url.as_deref().unwrap_or(""));
    context.insert("package_manager", infos.package_manager.as_deref().unwrap_or(""));
    context.insert("is_github_repos", &infos.is_github_repos);
    context.insert("is_js_project", &infos.is_js_project);
    context.insert("has_start_command", &infos.has_start_command);
    context.insert("has_test_command", &infos.has_test_command);
    context.insert("engines", &infos.engines);

    for (name, value) in answers.iter() {
        match value {
            AnswerValue::Text(text) => context.insert(name, text),
            AnswerValue::Flag(flag) => context.insert(name, flag),
        }
    }

    context
}

/// Flattens a Tera error and its sources into one readable reason.
fn error_chain(error: &tera::Error) -> String {
    let mut reason = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    reason
}
