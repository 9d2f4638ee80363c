//! Validated run configuration.

use std::sync::LazyLock;

use regex::Regex;

use crate::cli::ArgsError;

/// Host prefix for the generated Go module path.
pub const MODULE_HOST: &str = "github.com";

static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid regex"));

// GitHub account names: alphanumerics and inner hyphens.
static USER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$").expect("valid regex")
});

/// Immutable configuration for a single scaffolding run.
///
/// Constructed once by the argument parser and passed by reference to every
/// phase. Fields are private so an unvalidated value cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    project: String,
    user: String,
    dry_run: bool,
    template_only: bool,
}

impl Config {
    /// Validate and freeze a configuration.
    ///
    /// The user is checked before the project so a run missing both reports
    /// the user first. Malformed values are reported only once both are
    /// present.
    pub fn new(
        project: impl Into<String>,
        user: impl Into<String>,
        dry_run: bool,
        template_only: bool,
    ) -> Result<Self, ArgsError> {
        let project = project.into();
        let user = user.into();
        if user.trim().is_empty() {
            return Err(ArgsError::MissingUser);
        }
        if project.trim().is_empty() {
            return Err(ArgsError::MissingProject);
        }
        if !USER_NAME.is_match(&user) {
            return Err(ArgsError::InvalidUser(user));
        }
        if !PROJECT_NAME.is_match(&project) {
            return Err(ArgsError::InvalidProject(project));
        }
        Ok(Self {
            project,
            user,
            dry_run,
            template_only,
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn template_only(&self) -> bool {
        self.template_only
    }

    /// Go module path, e.g. `github.com/alice/demo`.
    pub fn module_path(&self) -> String {
        format!("{MODULE_HOST}/{}/{}", self.user, self.project)
    }

    /// `owner/name` slug for the hosted repository.
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.user, self.project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_values_verbatim() {
        let cfg = Config::new("demo-svc", "Alice-01", true, false).expect("valid");
        assert_eq!(cfg.project(), "demo-svc");
        assert_eq!(cfg.user(), "Alice-01");
        assert!(cfg.dry_run());
        assert!(!cfg.template_only());
    }

    #[test]
    fn derives_module_path_and_slug() {
        let cfg = Config::new("demo", "alice", false, false).expect("valid");
        assert_eq!(cfg.module_path(), "github.com/alice/demo");
        assert_eq!(cfg.repo_slug(), "alice/demo");
    }

    #[test]
    fn missing_user_wins_over_missing_project() {
        let err = Config::new("", "", false, false).unwrap_err();
        assert!(matches!(err, ArgsError::MissingUser));
    }

    #[test]
    fn blank_project_is_missing() {
        let err = Config::new("   ", "alice", false, false).unwrap_err();
        assert!(matches!(err, ArgsError::MissingProject));
    }

    #[test]
    fn rejects_malformed_user_names() {
        for name in ["a/b", "has space", "-lead", "trail-", "alice_01", "$(id)", "bob\n"] {
            let err = Config::new("demo", name, false, false).unwrap_err();
            assert!(
                matches!(err, ArgsError::InvalidUser(ref n) if n == name),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn missing_project_wins_over_malformed_user() {
        let err = Config::new("", "a/b", false, false).unwrap_err();
        assert!(matches!(err, ArgsError::MissingProject));
    }

    #[test]
    fn rejects_unsafe_project_names() {
        for name in ["../escape", "has space", "-flag", ".hidden", "a/b", "$(id)"] {
            let err = Config::new(name, "alice", false, false).unwrap_err();
            assert!(
                matches!(err, ArgsError::InvalidProject(ref n) if n == name),
                "accepted {name}"
            );
        }
    }
}
