//! Project metadata resolution
//!
//! This module reconciles readgen's independent metadata sources into one
//! coherent, immutable [`ProjectInfos`] record. The sources are:
//!
//! - the `package.json` manifest ([`crate::manifest`])
//! - the git origin remote URL ([`crate::git`])
//! - lock-file presence on disk ([`crate::manifest::detect_package_manager`])
//! - the GitHub profile lookup ([`crate::github`])
//!
//! # Resolution contract
//!
//! [`gather_project_infos`] never fails. Any source that is absent or errors
//! degrades to `None` fields; the run always continues with whatever facts
//! could be established. The manifest and git remote are read concurrently
//! since they are independent; the GitHub profile lookup is sequenced after
//! the username is derived (a true data dependency).
//!
//! # Precedence
//!
//! When both the manifest `repository` field and the git remote resolve, the
//! manifest wins. Both URLs are normalized (scheme decoration and `.git`
//! suffix stripped) before any derivation.
//!
//! All derived fields (`is_github_repos`, `github_username`,
//! `documentation_url`, `contributing_url`, `license_url`) are pure functions
//! of already-resolved fields; there is no circular derivation. The record is
//! computed exactly once per run and treated as read-only afterwards.

use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use crate::git;
use crate::github::IdentityLookup;
use crate::license::license_url;
use crate::manifest::{self, AuthorField, PackageJson};
use crate::utils::progress::spinner_with_message;

/// Matches a normalized GitHub repository URL and captures the owner segment.
static GITHUB_REPO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([^/\s]+)").expect("valid github repo regex")
});

/// Immutable snapshot of everything readgen knows about the project.
///
/// Produced once per run by [`gather_project_infos`]; the question graph and
/// template assembler only ever read it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectInfos {
    /// Project name; falls back to the directory name without a manifest
    pub name: String,
    /// One-line description from the manifest
    pub description: Option<String>,
    /// Version from the manifest
    pub version: Option<String>,
    /// Normalized author display name
    pub author: Option<String>,
    /// Homepage URL from the manifest
    pub homepage: Option<String>,
    /// SPDX license identifier from the manifest
    pub license_name: Option<String>,
    /// Canonical URL for the license, when the identifier is known
    pub license_url: Option<String>,
    /// Normalized repository URL (manifest first, then git remote)
    pub repository_url: Option<String>,
    /// True iff `repository_url` points at github.com
    pub is_github_repos: bool,
    /// Repository owner segment, only for GitHub repositories
    pub github_username: Option<String>,
    /// `{repository_url}#readme`, only for GitHub repositories
    pub documentation_url: Option<String>,
    /// Issues page derived from the repository URL
    pub contributing_url: Option<String>,
    /// Website from the author's GitHub profile, when one was discoverable
    pub author_website: Option<String>,
    /// Runtime version requirements from the manifest's `engines`
    pub engines: BTreeMap<String, String>,
    /// True iff a manifest was found at all
    pub is_js_project: bool,
    /// True iff the manifest declares a non-empty `start` script
    pub has_start_command: bool,
    /// True iff the manifest declares a non-empty `test` script
    pub has_test_command: bool,
    /// Package manager inferred from lock-file presence
    pub package_manager: Option<String>,
}

/// Gathers all project metadata from `dir` into a [`ProjectInfos`] snapshot.
///
/// This is the single resolution pass of a readgen run. It shows a spinner
/// while working and reports success unconditionally: source failures are
/// internal and degrade to absent fields, never to a failed indicator or an
/// error return.
pub async fn gather_project_infos(dir: &Path, lookup: &dyn IdentityLookup) -> ProjectInfos {
    let spinner = spinner_with_message("Gathering project infos");

    // Manifest and git remote are independent sources; read them concurrently.
    let (manifest_result, remote_result) =
        tokio::join!(manifest::load_package_json(dir), git::remote_origin_url(dir));

    // SourceFailure collapses to SourceAbsent at this boundary
    let package_json = match manifest_result {
        Ok(found) => found,
        Err(e) => {
            debug!("manifest unreadable, treating as absent: {e:#}");
            None
        }
    };
    let remote_url = match remote_result {
        Ok(url) => Some(url),
        Err(e) => {
            debug!("git remote unavailable: {e:#}");
            None
        }
    };

    let infos = resolve(dir, package_json, remote_url, lookup).await;

    spinner.finish_with_message("Project infos gathered");
    infos
}

/// Applies precedence and derivation rules over the already-read sources.
///
/// Split from [`gather_project_infos`] so tests can drive it with fixed
/// source snapshots and assert idempotence.
pub async fn resolve(
    dir: &Path,
    package_json: Option<PackageJson>,
    remote_url: Option<String>,
    lookup: &dyn IdentityLookup,
) -> ProjectInfos {
    let is_js_project = package_json.is_some();
    let manifest = package_json.unwrap_or_default();

    // Precedence: manifest repository field wins over the git remote
    let repository_url = manifest
        .repository_url()
        .map(git::normalize_repository_url)
        .or_else(|| remote_url.as_deref().map(git::normalize_repository_url));

    let github_username = repository_url
        .as_deref()
        .and_then(|url| GITHUB_REPO_RE.captures(url))
        .map(|captures| captures[1].to_string());
    let is_github_repos = github_username.is_some();

    let documentation_url =
        is_github_repos.then(|| format!("{}#readme", repository_url.as_deref().unwrap_or("")));
    let contributing_url = repository_url.as_deref().map(|url| format!("{url}/issues"));

    // True data dependency: the profile lookup needs the derived username,
    // so it runs after URL derivation, never concurrently with it.
    let author_website = match github_username.as_deref() {
        Some(username) => match lookup.website(username).await {
            Ok(website) => website,
            Err(e) => {
                debug!("GitHub profile lookup failed: {e:#}");
                None
            }
        },
        None => None,
    };

    let package_manager = if is_js_project {
        manifest::detect_package_manager(dir).await
    } else {
        None
    };

    let license_name = manifest.license.clone();
    let license_url = license_name.as_deref().and_then(license_url).map(str::to_string);

    ProjectInfos {
        name: manifest
            .name
            .clone()
            .unwrap_or_else(|| manifest::project_name_from_dir(dir)),
        description: manifest.description.clone(),
        version: manifest.version.clone(),
        author: manifest
            .author
            .as_ref()
            .and_then(AuthorField::display_name)
            .map(str::to_string),
        homepage: manifest.homepage.clone(),
        license_name,
        license_url,
        repository_url,
        is_github_repos,
        github_username,
        documentation_url,
        contributing_url,
        author_website,
        engines: manifest.engines.clone().unwrap_or_default(),
        is_js_project,
        has_start_command: manifest.has_script("start"),
        has_test_command: manifest.has_script("test"),
        package_manager,
    }
}
