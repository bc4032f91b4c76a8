//! Input arguments for each resource kind
//!
//! Unset optional inputs are omitted from the serialized form so the
//! provider's own defaults apply.

use serde::Serialize;

use super::Output;
use crate::declare::RepositoryTemplate;

/// Inputs of a repository resource
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepositoryArgs {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_auto_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_on_destroy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_init: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,
    pub has_downloads: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_vulnerability_alerts_during_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_commit_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash_merge_commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash_merge_commit_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<RepositoryTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    pub vulnerability_alerts: bool,
}

/// Inputs of a branch-default pointer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchDefaultArgs {
    pub branch: String,
    pub repository: String,
}

/// Inputs of an organization membership
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipArgs {
    pub username: String,
    pub role: String,
}

/// Inputs of a team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamArgs {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub privacy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_team_id: Option<Output>,
}

/// Inputs of a team membership
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMembershipArgs {
    pub team_id: Output,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Inputs of a team's access grant to a repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRepositoryArgs {
    pub team_id: Output,
    pub repository: Output,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
}
