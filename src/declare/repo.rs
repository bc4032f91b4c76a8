//! Repository declarations

use serde::{Deserialize, Serialize};

use super::opt_scalar;
use crate::options::{Declared, IdKey};

/// A repository entry from the `repositories` list.
///
/// Optional fields stay `None` when absent so the provider applies its own
/// defaults; see [`RepositoryDecl::has_wiki`] and friends for the few fields
/// defaulted here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryDecl {
    /// Repository name, unique within the organization document
    pub name: String,

    #[serde(default)]
    pub allow_auto_merge: Option<bool>,
    #[serde(default)]
    pub allow_merge_commit: Option<bool>,
    #[serde(default)]
    pub allow_rebase_merge: Option<bool>,
    #[serde(default)]
    pub allow_squash_merge: Option<bool>,
    #[serde(default)]
    pub archive_on_destroy: Option<bool>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default)]
    pub auto_init: Option<bool>,
    #[serde(default)]
    pub delete_branch_on_merge: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gitignore_template: Option<String>,
    #[serde(default)]
    pub has_downloads: Option<bool>,
    #[serde(default)]
    pub has_issues: Option<bool>,
    #[serde(default)]
    pub has_projects: Option<bool>,
    #[serde(default)]
    pub has_wiki: Option<bool>,
    #[serde(default)]
    pub homepage_url: Option<String>,
    #[serde(default)]
    pub ignore_vulnerability_alerts_during_read: Option<bool>,
    #[serde(default)]
    pub is_template: Option<bool>,
    #[serde(default)]
    pub license_template: Option<String>,
    #[serde(default)]
    pub merge_commit_message: Option<String>,
    #[serde(default)]
    pub merge_commit_title: Option<String>,
    #[serde(default)]
    pub squash_merge_commit_message: Option<String>,
    #[serde(default)]
    pub squash_merge_commit_title: Option<String>,
    #[serde(default)]
    pub template: Option<RepositoryTemplate>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    /// `public`, `private` or `internal`
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub vulnerability_alerts: Option<bool>,

    /// Branch to point the repository's default at, if managed
    #[serde(default)]
    pub default_branch: Option<String>,

    #[serde(default)]
    pub protect: Option<bool>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub import_id: Option<String>,
}

/// Template repository a new repository is generated from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepositoryTemplate {
    pub owner: String,
    pub repository: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_all_branches: Option<bool>,
}

impl RepositoryDecl {
    /// Whether the repository is declared private
    pub fn is_private(&self) -> bool {
        self.visibility.as_deref() == Some("private")
    }

    /// Declared `has_wiki`, otherwise off for private repositories
    pub fn has_wiki(&self) -> bool {
        self.has_wiki.unwrap_or(!self.is_private())
    }

    /// Declared `vulnerability_alerts`, otherwise off for private repositories
    pub fn vulnerability_alerts(&self) -> bool {
        self.vulnerability_alerts.unwrap_or(!self.is_private())
    }

    /// Declared default branch, ignoring empty values
    pub fn default_branch(&self) -> Option<&str> {
        self.default_branch.as_deref().filter(|b| !b.is_empty())
    }
}

impl Declared for RepositoryDecl {
    fn protect(&self) -> Option<bool> {
        self.protect
    }

    fn identifier(&self, key: IdKey) -> Option<&str> {
        match key {
            IdKey::ImportId => self.import_id.as_deref(),
            IdKey::DefaultBranch => self.default_branch.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> RepositoryDecl {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_minimal_repository() {
        let repo = parse("name: infra");
        assert_eq!(repo.name, "infra");
        assert!(repo.description.is_none());
        assert!(repo.topics.is_none());
        assert!(repo.default_branch().is_none());
    }

    #[test]
    fn test_private_repository_defaults_off() {
        let repo = parse("name: secrets\nvisibility: private");
        assert!(repo.is_private());
        assert!(!repo.has_wiki());
        assert!(!repo.vulnerability_alerts());
    }

    #[test]
    fn test_public_and_internal_repository_defaults_on() {
        for visibility in ["public", "internal"] {
            let repo = parse(&format!("name: docs\nvisibility: {visibility}"));
            assert!(repo.has_wiki());
            assert!(repo.vulnerability_alerts());
        }

        let unset = parse("name: docs");
        assert!(unset.has_wiki());
        assert!(unset.vulnerability_alerts());
    }

    #[test]
    fn test_explicit_flags_win_over_visibility() {
        let repo = parse("name: secrets\nvisibility: private\nhas_wiki: true\nvulnerability_alerts: true");
        assert!(repo.has_wiki());
        assert!(repo.vulnerability_alerts());
    }

    #[test]
    fn test_template_and_topics() {
        let repo = parse(
            "name: svc\ntemplate:\n  owner: acme\n  repository: svc-template\ntopics: [rust, cli]",
        );
        let template = repo.template.unwrap();
        assert_eq!(template.owner, "acme");
        assert_eq!(template.repository, "svc-template");
        assert_eq!(repo.topics.unwrap(), vec!["rust", "cli"]);
    }

    #[test]
    fn test_identifier_keys() {
        let repo = parse("name: svc\nimport_id: svc\ndefault_branch: trunk");
        assert_eq!(repo.identifier(IdKey::ImportId), Some("svc"));
        assert_eq!(repo.identifier(IdKey::DefaultBranch), Some("trunk"));
    }

    #[test]
    fn test_empty_default_branch_is_ignored() {
        let repo = parse("name: svc\ndefault_branch: ''");
        assert!(repo.default_branch().is_none());
    }
}
