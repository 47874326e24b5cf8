//! readgen - README generator
//!
//! A CLI tool that generates a `README.md` for the project in the current
//! directory. It gathers metadata from several independent sources, reconciles
//! them into a single [`infos::ProjectInfos`] snapshot, walks an ordered list
//! of questions whose defaults come from that snapshot, and renders a Tera
//! template conditionally from the collected answers.
//!
//! # Architecture Overview
//!
//! readgen follows a strict one-way data flow:
//!
//! ```text
//! package.json ─┐
//! git remote  ──┼─▶ ProjectInfos ─▶ questions ─▶ Answers ─▶ README.md
//! lock files  ──┤      (infos)      (collector)             (template)
//! GitHub API  ──┘
//! ```
//!
//! Each metadata source is independent and may be absent or fail on its own;
//! absence and failure both degrade to missing fields, never to a fatal error.
//! The snapshot is computed exactly once per run and is read-only afterwards.
//!
//! A small number of questions have *dependent* defaults: their default value
//! is recomputed asynchronously right before the question is asked, from
//! answers already collected earlier in the same run. The canonical example is
//! the author-website question, which performs a fresh GitHub profile lookup
//! when the user changed the username answer from the detected one.
//!
//! # Core Modules
//!
//! - [`infos`] - Metadata resolution into the immutable `ProjectInfos` record
//! - [`questions`] - Question specifications and dependent-default logic
//! - [`collector`] - Interactive answer collection and overwrite confirmation
//! - [`template`] - Conditional README assembly with Tera
//!
//! ## Source Readers
//! - [`manifest`] - package.json parsing and lock-file probing
//! - [`git`] - Remote URL lookup via the system git command
//! - [`github`] - GitHub user profile lookup (website discovery)
//!
//! ## Supporting Modules
//! - [`cli`] - Command-line surface and run orchestration
//! - [`core`] - Error types and user-friendly error reporting
//! - [`license`] - SPDX license identifier to URL table
//! - [`utils`] - Progress indicator wrapper
//!
//! # Usage
//!
//! ```bash
//! # Interactive run in the current project
//! readgen
//!
//! # Accept every suggested default without prompting
//! readgen --yes
//!
//! # Render a custom template to a custom location
//! readgen --template ./docs/README.tpl.md --output ./docs/README.md
//! ```

// Core pipeline modules
pub mod collector;
pub mod infos;
pub mod questions;
pub mod template;

// Source readers
pub mod git;
pub mod github;
pub mod manifest;

// Supporting modules
pub mod cli;
pub mod core;
pub mod license;
pub mod utils;
