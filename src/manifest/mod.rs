//! Manifest parsing and lock-file probing (package.json)
//!
//! This module is one of readgen's independent metadata sources. It reads the
//! project's `package.json` into a tolerant, partially-optional model and
//! probes the project directory for dependency-manager lock files.
//!
//! # Tolerance
//!
//! Every field of [`PackageJson`] is optional: a manifest with only a `name`
//! is as valid as a fully populated one, and missing fields surface as `None`
//! rather than empty strings. The two fields with multiple on-disk shapes
//! (`author` and `repository` can each be a plain string or an object) are
//! modeled as untagged enums with a single normalizing accessor, so the rest
//! of the crate never inspects JSON shapes.
//!
//! # Absence vs. failure
//!
//! [`load_package_json`] distinguishes a missing file (`Ok(None)`) from an
//! unreadable or unparseable one (`Err`). The metadata resolver collapses
//! both into "no manifest" per readgen's never-fail resolution contract.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::debug;

/// The file name probed for each known package manager, in priority order.
///
/// The first lock file found on disk decides the manager; a project carrying
/// both yarn and npm lock files is reported as yarn.
pub const LOCK_FILES: &[(&str, &str)] = &[("yarn.lock", "yarn"), ("package-lock.json", "npm")];

/// The `author` field of a manifest, which may be a plain name string or a
/// detailed object with name/email/url.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AuthorField {
    /// Shorthand form: `"author": "Jane Doe"`
    PlainName(String),
    /// Object form: `"author": { "name": "Jane Doe", "email": ..., "url": ... }`
    Detailed {
        /// The author's display name
        name: Option<String>,
        /// Contact email, unused by readgen but accepted for tolerance
        email: Option<String>,
        /// Personal URL, unused by readgen but accepted for tolerance
        url: Option<String>,
    },
}

impl AuthorField {
    /// Normalizes either shape to a display name.
    ///
    /// Object form without a `name` key yields `None`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::PlainName(name) => Some(name.as_str()),
            Self::Detailed { name, .. } => name.as_deref(),
        }
    }
}

/// The `repository` field of a manifest, either a bare URL string or an
/// object carrying `type` and `url` keys.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RepositoryField {
    /// Shorthand form: `"repository": "https://github.com/owner/repo"`
    Url(String),
    /// Object form: `"repository": { "type": "git", "url": "git+https://..." }`
    Detailed {
        /// The VCS type, typically `"git"`
        #[serde(rename = "type")]
        kind: Option<String>,
        /// The repository URL, possibly `git+`-prefixed
        url: Option<String>,
    },
}

impl RepositoryField {
    /// Returns the raw (not yet normalized) repository URL from either shape.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url.as_str()),
            Self::Detailed { url, .. } => url.as_deref(),
        }
    }
}

/// A tolerant model of the fields readgen reads from `package.json`.
///
/// Unknown keys are ignored; known keys are all optional. Scripts default to
/// an empty map so script-flag derivation never needs a null check.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct PackageJson {
    /// Project name
    pub name: Option<String>,
    /// One-line project description
    pub description: Option<String>,
    /// Project version
    pub version: Option<String>,
    /// Author, in either string or object form
    pub author: Option<AuthorField>,
    /// SPDX license identifier
    pub license: Option<String>,
    /// Project homepage URL
    pub homepage: Option<String>,
    /// Repository reference, in either string or object form
    pub repository: Option<RepositoryField>,
    /// Runtime version requirements (e.g. `node`, `npm`), sorted by name
    pub engines: Option<BTreeMap<String, String>>,
    /// Declared npm scripts
    #[serde(default)]
    pub scripts: HashMap<String, String>,
}

impl PackageJson {
    /// True if a non-empty script with the given name is declared.
    #[must_use]
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts
            .get(name)
            .is_some_and(|command| !command.trim().is_empty())
    }

    /// The raw repository URL from the manifest, if any.
    #[must_use]
    pub fn repository_url(&self) -> Option<&str> {
        self.repository.as_ref().and_then(RepositoryField::url)
    }
}

/// Reads and parses `package.json` from `dir`.
///
/// Returns `Ok(None)` when the file does not exist. Read and parse failures
/// return `Err`; the caller decides whether that is fatal (the metadata
/// resolver treats it as "no manifest").
pub async fn load_package_json(dir: &Path) -> Result<Option<PackageJson>> {
    let path = dir.join("package.json");
    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        debug!("no package.json at {}", path.display());
        return Ok(None);
    }

    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let manifest: PackageJson = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    debug!("loaded package.json from {}", path.display());
    Ok(Some(manifest))
}

/// Derives a project name from the directory itself, used when no manifest
/// name exists. Falls back to `"."`-relative display when the path has no
/// final component (e.g. the filesystem root).
#[must_use]
pub fn project_name_from_dir(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

/// Probes `dir` for known lock files and reports the owning package manager.
///
/// Probing follows the fixed order of [`LOCK_FILES`]; the first hit wins.
pub async fn detect_package_manager(dir: &Path) -> Option<String> {
    for (file_name, manager) in LOCK_FILES {
        if tokio::fs::try_exists(dir.join(file_name)).await.unwrap_or(false) {
            debug!("found {file_name}, package manager is {manager}");
            return Some((*manager).to_string());
        }
    }
    None
}
