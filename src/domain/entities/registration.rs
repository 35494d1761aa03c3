//! WatchRegistration entity

use std::path::Path;

use globset::{Glob, GlobMatcher};

use crate::domain::value_objects::Action;
use crate::error::RewatchResult;

/// A glob pattern and the ordered actions a matching change triggers.
///
/// Built once at startup and never modified.
#[derive(Debug, Clone)]
pub struct WatchRegistration {
    pattern: String,
    matcher: GlobMatcher,
    actions: Vec<Action>,
}

impl WatchRegistration {
    pub fn new(pattern: impl Into<String>, actions: Vec<Action>) -> RewatchResult<Self> {
        let pattern = pattern.into();
        let matcher = Glob::new(&pattern)?.compile_matcher();
        Ok(Self {
            pattern,
            matcher,
            actions,
        })
    }

    /// `**/*.<extension>` registered against `[Build]` or `[Build, Test]`
    pub fn for_extension(extension: &str, with_tests: bool) -> RewatchResult<Self> {
        let extension = extension.trim_start_matches('.');
        let actions = if with_tests {
            vec![Action::Build, Action::Test]
        } else {
            vec![Action::Build]
        };
        Self::new(format!("**/*.{extension}"), actions)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Match a path relative to the watched root
    pub fn matches(&self, relative: &Path) -> bool {
        self.matcher.is_match(relative)
    }
}
