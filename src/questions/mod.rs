//! Question specifications and dependent defaults
//!
//! readgen's interactive flow is an ordered list of [`Question`]s. Every
//! question carries a *static* default computed from the immutable
//! [`ProjectInfos`] snapshot; a few additionally carry a *recompute* hook that
//! derives a fresh default from answers already collected earlier in the same
//! run. The collector resolves each question's effective default lazily, at
//! the moment the question is about to be asked, so a recomputed default
//! always sees the user's actual earlier answers rather than the initial
//! snapshot.
//!
//! The one recompute hook today belongs to the author-website question: when
//! the user changes the GitHub-username answer away from the detected value,
//! the website default is obtained by a fresh profile lookup for the *new*
//! username. If that lookup yields nothing (or fails), the default becomes
//! empty rather than falling back to the stale detected website.
//!
//! Hooks only ever read answers collected *before* their own question; the
//! strict sequence ordering is what makes the data dependency sound.

use futures::FutureExt;
use futures::future::BoxFuture;
use std::sync::Arc;

use crate::github::IdentityLookup;
use crate::infos::ProjectInfos;

/// Answer values are either free text or a yes/no flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// Free-form text answer; empty string means "skipped"
    Text(String),
    /// Yes/no answer from a confirm question
    Flag(bool),
}

/// Ordered collection of answers, one per resolved question.
///
/// Insertion order follows question order; entries are appended as each
/// question resolves, so a recompute hook invoked for question *n* only ever
/// observes answers to questions before *n*.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    entries: Vec<(String, AnswerValue)>,
}

impl Answers {
    /// Creates an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an answer for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: AnswerValue) {
        self.entries.push((name.into(), value));
    }

    /// Looks up a text answer by question name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(key, _)| key == name).and_then(|(_, value)| match value {
            AnswerValue::Text(text) => Some(text.as_str()),
            AnswerValue::Flag(_) => None,
        })
    }

    /// Looks up a flag answer by question name.
    #[must_use]
    pub fn get_flag(&self, name: &str) -> Option<bool> {
        self.entries.iter().find(|(key, _)| key == name).and_then(|(_, value)| match value {
            AnswerValue::Flag(flag) => Some(*flag),
            AnswerValue::Text(_) => None,
        })
    }

    /// Iterates answers in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of collected answers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been collected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stable answer keys, in question order.
///
/// Also the set of variables every template can rely on existing; the
/// assembler seeds its context with an empty value for each of these before
/// answers are applied.
pub const QUESTION_NAMES: &[&str] = &[
    "project_name",
    "project_version",
    "project_description",
    "project_homepage",
    "project_demo_url",
    "project_documentation_url",
    "project_prerequisites",
    "author_name",
    "author_github_username",
    "author_website",
    "author_twitter_username",
    "license_name",
    "license_url",
    "install_command",
    "usage_command",
    "test_command",
    "is_project_on_npm",
];

/// How a question is presented and parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text input; empty input accepts the default
    Input,
    /// Yes/no confirmation
    Confirm,
}

/// Async hook recomputing a question's default from earlier answers.
///
/// The hook snapshots what it needs from the borrowed [`Answers`] before
/// returning its future, so the future itself is `'static` and the collector
/// can keep mutating the answer set between questions.
pub type RecomputeDefault =
    Box<dyn Fn(&Answers) -> BoxFuture<'static, Option<String>> + Send + Sync>;

/// A single question specification.
///
/// The two-phase default contract: `static_default` is a pure function of the
/// metadata snapshot, baked in at build time; `recompute_default`, when
/// present, overrides it at ask time using the answers collected so far.
pub struct Question {
    /// Stable answer key, also the template variable name
    pub name: &'static str,
    /// Prompt text shown to the user
    pub message: &'static str,
    /// Input or confirm presentation
    pub kind: QuestionKind,
    /// Default derived from [`ProjectInfos`] when the graph was built
    pub static_default: Option<String>,
    /// Optional answer-dependent default, resolved at ask time
    pub recompute_default: Option<RecomputeDefault>,
}

impl Question {
    fn input(name: &'static str, message: &'static str, default: Option<String>) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Input,
            static_default: default,
            recompute_default: None,
        }
    }

    fn confirm(name: &'static str, message: &'static str, default: bool) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Confirm,
            static_default: Some(if default { "yes" } else { "no" }.to_string()),
            recompute_default: None,
        }
    }

    /// Resolves the default to present for this question right now.
    ///
    /// A recompute hook wins over the static default; a hook that resolves to
    /// `None` means "no default", never a fallback to the static value.
    pub async fn effective_default(&self, prior_answers: &Answers) -> Option<String> {
        match &self.recompute_default {
            Some(recompute) => recompute(prior_answers).await,
            None => self.static_default.clone(),
        }
    }
}

impl std::fmt::Debug for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("static_default", &self.static_default)
            .field("has_recompute", &self.recompute_default.is_some())
            .finish()
    }
}

/// Builds the fixed, ordered question list for one run.
///
/// The GitHub-username question must precede the author-website question:
/// the website recompute hook reads the username answer.
pub fn build_questions(infos: &ProjectInfos, lookup: Arc<dyn IdentityLookup>) -> Vec<Question> {
    let package_manager = infos.package_manager.clone().unwrap_or_else(|| "npm".to_string());

    let prerequisites = if infos.engines.is_empty() {
        None
    } else {
        Some(
            infos
                .engines
                .iter()
                .map(|(runtime, range)| format!("{runtime} {range}"))
                .collect::<Vec<_>>()
                .join(", "),
        )
    };

    vec![
        Question::input("project_name", "Project name", Some(infos.name.clone())),
        Question::input("project_version", "Project version", infos.version.clone()),
        Question::input("project_description", "Project description", infos.description.clone()),
        Question::input(
            "project_homepage",
            "Project homepage (use empty value to skip)",
            infos.homepage.clone(),
        ),
        Question::input("project_demo_url", "Demo URL (use empty value to skip)", None),
        Question::input(
            "project_documentation_url",
            "Project documentation URL (use empty value to skip)",
            infos.documentation_url.clone(),
        ),
        Question::input(
            "project_prerequisites",
            "Prerequisites (use empty value to skip)",
            prerequisites,
        ),
        Question::input("author_name", "Author name", infos.author.clone()),
        Question::input(
            "author_github_username",
            "GitHub username (use empty value to skip)",
            infos.github_username.clone(),
        ),
        author_website_question(infos, lookup),
        Question::input(
            "author_twitter_username",
            "Twitter username (use empty value to skip)",
            None,
        ),
        Question::input(
            "license_name",
            "License name (use empty value to skip)",
            infos.license_name.clone(),
        ),
        Question::input(
            "license_url",
            "License URL (use empty value to skip)",
            infos.license_url.clone(),
        ),
        Question::input(
            "install_command",
            "Install command (use empty value to skip)",
            infos.is_js_project.then(|| format!("{package_manager} install")),
        ),
        Question::input(
            "usage_command",
            "Usage command (use empty value to skip)",
            infos.has_start_command.then(|| format!("{package_manager} run start")),
        ),
        Question::input(
            "test_command",
            "Test command (use empty value to skip)",
            infos.has_test_command.then(|| format!("{package_manager} run test")),
        ),
        Question::confirm(
            "is_project_on_npm",
            "Is this project published on npm?",
            infos.is_js_project,
        ),
    ]
}

/// The author-website question, with its answer-dependent default.
///
/// Default resolution at ask time:
/// - username answer unchanged (or missing) -> the website detected during
///   metadata resolution, with no extra lookup performed
/// - username answer changed and non-empty -> fresh profile lookup for the
///   new username; a failed or empty lookup resolves to no default, never to
///   the stale detected website
fn author_website_question(infos: &ProjectInfos, lookup: Arc<dyn IdentityLookup>) -> Question {
    let detected_username = infos.github_username.clone();
    let detected_website = infos.author_website.clone();

    let recompute: RecomputeDefault = Box::new(move |prior_answers: &Answers| {
        let answered_username = prior_answers.get("author_github_username").map(str::to_owned);
        let detected_username = detected_username.clone();
        let detected_website = detected_website.clone();
        let lookup = Arc::clone(&lookup);

        async move {
            match answered_username {
                Some(username)
                    if !username.is_empty()
                        && detected_username.as_deref() != Some(username.as_str()) =>
                {
                    lookup.website(&username).await.ok().flatten()
                }
                _ => detected_website,
            }
        }
        .boxed()
    });

    Question {
        name: "author_website",
        message: "Author website (use empty value to skip)",
        kind: QuestionKind::Input,
        static_default: infos.author_website.clone(),
        recompute_default: Some(recompute),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub lookup returning a fixed website, counting invocations.
    struct StubLookup {
        website: Option<String>,
        calls: AtomicUsize,
    }

    impl StubLookup {
        fn with_website(website: &str) -> Self {
            Self {
                website: Some(website.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn empty() -> Self {
            Self {
                website: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl IdentityLookup for StubLookup {
        fn website<'a>(&'a self, _username: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(self.website.clone()) }.boxed()
        }
    }

    struct FailingLookup;

    impl IdentityLookup for FailingLookup {
        fn website<'a>(&'a self, _username: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
            async move { Err(anyhow!("network down")) }.boxed()
        }
    }

    fn alice_infos() -> ProjectInfos {
        ProjectInfos {
            name: "demo".to_string(),
            github_username: Some("alice".to_string()),
            author_website: Some("https://alice.io".to_string()),
            ..ProjectInfos::default()
        }
    }

    #[test]
    fn questions_keep_a_fixed_order() {
        let infos = alice_infos();
        let questions = build_questions(&infos, Arc::new(StubLookup::empty()));

        let names: Vec<&str> = questions.iter().map(|q| q.name).collect();
        assert_eq!(names, QUESTION_NAMES);

        // The username question must come before the website question that
        // depends on its answer
        let username_pos = names.iter().position(|n| *n == "author_github_username").unwrap();
        let website_pos = names.iter().position(|n| *n == "author_website").unwrap();
        assert!(username_pos < website_pos);
    }

    #[test]
    fn static_defaults_come_from_the_snapshot() {
        let infos = ProjectInfos {
            name: "demo".to_string(),
            version: Some("1.2.3".to_string()),
            author: Some("Mark Fomin".to_string()),
            is_js_project: true,
            has_test_command: true,
            package_manager: Some("yarn".to_string()),
            ..ProjectInfos::default()
        };
        let questions = build_questions(&infos, Arc::new(StubLookup::empty()));

        let default_of = |name: &str| {
            questions.iter().find(|q| q.name == name).unwrap().static_default.clone()
        };
        assert_eq!(default_of("project_name").as_deref(), Some("demo"));
        assert_eq!(default_of("project_version").as_deref(), Some("1.2.3"));
        assert_eq!(default_of("author_name").as_deref(), Some("Mark Fomin"));
        assert_eq!(default_of("install_command").as_deref(), Some("yarn install"));
        assert_eq!(default_of("test_command").as_deref(), Some("yarn run test"));
        // No start script, no usage default
        assert_eq!(default_of("usage_command"), None);
        assert_eq!(default_of("is_project_on_npm").as_deref(), Some("yes"));
    }

    #[test]
    fn prerequisites_default_joins_engines() {
        let mut infos = alice_infos();
        infos.engines.insert("node".to_string(), ">=9.3.0".to_string());
        infos.engines.insert("npm".to_string(), ">=5.5.0".to_string());
        let questions = build_questions(&infos, Arc::new(StubLookup::empty()));

        let prerequisites =
            questions.iter().find(|q| q.name == "project_prerequisites").unwrap();
        assert_eq!(
            prerequisites.static_default.as_deref(),
            Some("node >=9.3.0, npm >=5.5.0")
        );
    }

    #[tokio::test]
    async fn changed_username_triggers_a_fresh_lookup() {
        let lookup = Arc::new(StubLookup::with_website("https://bob.dev"));
        let questions = build_questions(&alice_infos(), Arc::clone(&lookup) as Arc<dyn IdentityLookup>);
        let website = questions.iter().find(|q| q.name == "author_website").unwrap();

        let mut answers = Answers::new();
        answers.insert("author_github_username", AnswerValue::Text("bob".to_string()));

        let default = website.effective_default(&answers).await;
        assert_eq!(default.as_deref(), Some("https://bob.dev"));
        assert_eq!(lookup.call_count(), 1);
    }

    #[tokio::test]
    async fn unchanged_username_reuses_detected_website_without_lookup() {
        let lookup = Arc::new(StubLookup::with_website("https://should-not-be-used.example"));
        let questions = build_questions(&alice_infos(), Arc::clone(&lookup) as Arc<dyn IdentityLookup>);
        let website = questions.iter().find(|q| q.name == "author_website").unwrap();

        let mut answers = Answers::new();
        answers.insert("author_github_username", AnswerValue::Text("alice".to_string()));

        let default = website.effective_default(&answers).await;
        assert_eq!(default.as_deref(), Some("https://alice.io"));
        assert_eq!(lookup.call_count(), 0);
    }

    #[tokio::test]
    async fn fresh_lookup_without_website_never_falls_back_to_stale_value() {
        let lookup = Arc::new(StubLookup::empty());
        let questions = build_questions(&alice_infos(), Arc::clone(&lookup) as Arc<dyn IdentityLookup>);
        let website = questions.iter().find(|q| q.name == "author_website").unwrap();

        let mut answers = Answers::new();
        answers.insert("author_github_username", AnswerValue::Text("bob".to_string()));

        let default = website.effective_default(&answers).await;
        assert_eq!(default, None);
        assert_eq!(lookup.call_count(), 1);
    }

    #[tokio::test]
    async fn failed_dependent_lookup_resolves_to_no_default() {
        let questions = build_questions(&alice_infos(), Arc::new(FailingLookup));
        let website = questions.iter().find(|q| q.name == "author_website").unwrap();

        let mut answers = Answers::new();
        answers.insert("author_github_username", AnswerValue::Text("bob".to_string()));

        assert_eq!(website.effective_default(&answers).await, None);
    }

    #[tokio::test]
    async fn emptied_username_keeps_detected_website() {
        let questions = build_questions(&alice_infos(), Arc::new(StubLookup::empty()));
        let website = questions.iter().find(|q| q.name == "author_website").unwrap();

        let mut answers = Answers::new();
        answers.insert("author_github_username", AnswerValue::Text(String::new()));

        assert_eq!(website.effective_default(&answers).await.as_deref(), Some("https://alice.io"));
    }

    #[test]
    fn answers_preserve_insertion_order() {
        let mut answers = Answers::new();
        answers.insert("first", AnswerValue::Text("1".to_string()));
        answers.insert("second", AnswerValue::Flag(true));
        answers.insert("third", AnswerValue::Text("3".to_string()));

        let names: Vec<&str> = answers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(answers.get("third"), Some("3"));
        assert_eq!(answers.get_flag("second"), Some(true));
        assert_eq!(answers.get("second"), None);
        assert_eq!(answers.len(), 3);
    }
}
