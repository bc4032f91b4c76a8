//! Organization builder
//!
//! Turns one organization document into provider resources. Repositories are
//! created first, then users, then teams, because teams refer back to
//! repositories and to teams declared before them.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::collections::{BTreeMap, HashSet};

use crate::config::Settings;
use crate::declare::{RepositoryDecl, TeamDecl, UserDecl};
use crate::error::{BuildError, Error, Result};
use crate::options::{IdKey, ResourceOptions};
use crate::provider::{
    BranchDefaultArgs, MembershipArgs, Output, Provider, RepositoryArgs, ResourceHandle,
    TeamArgs, TeamMembershipArgs, TeamRepositoryArgs,
};


/// A fully built organization.
///
/// Holds the handle of every repository, membership and team created for the
/// document, keyed by declared name.
#[derive(Debug)]
pub struct Organization {
    pub name: String,
    pub repos: BTreeMap<String, ResourceHandle>,
    pub users: BTreeMap<String, ResourceHandle>,
    pub teams: BTreeMap<String, ResourceHandle>,
    /// Non-fatal problems found while building
    pub diagnostics: Vec<String>,
}

impl Organization {
    /// Build an organization from a parsed document.
    ///
    /// Every entry is parsed and repository names are checked for duplicates
    /// before the first resource is registered. Any later fatal problem stops
    /// the build; resources registered before it stay with the provider,
    /// which is expected to discard the run.
    pub fn build<P: Provider>(
        document: &Mapping,
        settings: &Settings,
        provider: &mut P,
    ) -> Result<Self> {
        let name = document
            .get("organization")
            .and_then(|org| org.get("name"))
            .and_then(Value::as_str)
            .ok_or(BuildError::MissingField("organization.name"))?;

        let mut builder = Builder {
            org: Organization {
                name: name.to_string(),
                repos: BTreeMap::new(),
                users: BTreeMap::new(),
                teams: BTreeMap::new(),
                diagnostics: Vec::new(),
            },
            settings,
            provider,
        };

        let repos = declarations::<RepositoryDecl>(document, "repositories", "repository")?;
        let users = declarations::<UserDecl>(document, "users", "user")?;
        let teams = declarations::<TeamDecl>(document, "teams", "team")?;
        check_unique_repositories(&repos)?;

        for repo in repos {
            let handle = builder.create_repository(&repo)?;
            builder.org.repos.insert(repo.name, handle);
        }
        for user in users {
            let handle = builder.create_user(&user)?;
            builder.org.users.insert(user.name, handle);
        }
        for team in teams {
            let handle = builder.create_team(&team)?;
            builder.org.teams.insert(team.name, handle);
        }

        debug!(
            "Built organization '{}': {} repositories, {} users, {} teams",
            builder.org.name,
            builder.org.repos.len(),
            builder.org.users.len(),
            builder.org.teams.len()
        );
        Ok(builder.org)
    }
}

/// Deserialize every entry of a top-level list. A missing or null key is an
/// empty list.
fn declarations<T: DeserializeOwned>(
    document: &Mapping,
    key: &str,
    kind: &'static str,
) -> Result<Vec<T>> {
    let entries = match document.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Sequence(entries)) => entries,
        Some(_) => {
            return Err(BuildError::InvalidDeclaration {
                kind,
                message: format!("'{key}' must be a list"),
            }
            .into());
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_yaml::from_value(entry.clone()).map_err(|e| {
                Error::from(BuildError::InvalidDeclaration {
                    kind,
                    message: format!("{key}[{index}]: {e}"),
                })
            })
        })
        .collect()
}

/// Reject duplicate repository names before anything is registered
fn check_unique_repositories(repos: &[RepositoryDecl]) -> Result<()> {
    let mut seen = HashSet::new();
    for repo in repos {
        if !seen.insert(repo.name.as_str()) {
            return Err(BuildError::DuplicateRepository(repo.name.clone()).into());
        }
    }
    Ok(())
}

struct Builder<'a, P> {
    org: Organization,
    settings: &'a Settings,
    provider: &'a mut P,
}

impl<P: Provider> Builder<'_, P> {
    fn create_repository(&mut self, repo: &RepositoryDecl) -> Result<ResourceHandle> {
        if self.org.repos.contains_key(&repo.name) {
            return Err(BuildError::DuplicateRepository(repo.name.clone()).into());
        }

        let args = RepositoryArgs {
            name: repo.name.clone(),
            allow_auto_merge: repo.allow_auto_merge,
            allow_merge_commit: repo.allow_merge_commit,
            allow_rebase_merge: repo.allow_rebase_merge,
            allow_squash_merge: repo.allow_squash_merge,
            archive_on_destroy: repo.archive_on_destroy,
            archived: repo.archived,
            auto_init: repo.auto_init,
            delete_branch_on_merge: repo.delete_branch_on_merge,
            description: repo.description.clone(),
            gitignore_template: repo.gitignore_template.clone(),
            has_downloads: repo.has_downloads.unwrap_or(true),
            has_issues: repo.has_issues.unwrap_or(true),
            has_projects: repo.has_projects.unwrap_or(true),
            has_wiki: repo.has_wiki(),
            homepage_url: repo.homepage_url.clone(),
            ignore_vulnerability_alerts_during_read: repo.ignore_vulnerability_alerts_during_read,
            is_template: repo.is_template,
            license_template: repo.license_template.clone(),
            merge_commit_message: repo.merge_commit_message.clone(),
            merge_commit_title: repo.merge_commit_title.clone(),
            squash_merge_commit_message: repo.squash_merge_commit_message.clone(),
            squash_merge_commit_title: repo.squash_merge_commit_title.clone(),
            template: repo.template.clone(),
            topics: repo.topics.clone(),
            visibility: repo.visibility.clone(),
            vulnerability_alerts: repo.vulnerability_alerts(),
        };
        let opts = ResourceOptions::derive(repo, IdKey::ImportId, self.settings);
        let handle = self.provider.create_repository(&repo.name, &args, &opts)?;

        if let Some(branch) = repo.default_branch() {
            let args = BranchDefaultArgs {
                branch: branch.to_string(),
                repository: repo.name.clone(),
            };
            let opts = ResourceOptions::derive(repo, IdKey::DefaultBranch, self.settings);
            self.provider
                .create_branch_default(&format!("{}-{}", repo.name, branch), &args, &opts)?;
        }

        Ok(handle)
    }

    fn create_user(&mut self, user: &UserDecl) -> Result<ResourceHandle> {
        let args = MembershipArgs {
            username: user.name.clone(),
            role: user.role().to_string(),
        };
        let opts = ResourceOptions::derive(user, IdKey::ImportId, self.settings);
        self.provider.create_membership(
            &format!("{}-member-{}", self.org.name, user.name),
            &args,
            &opts,
        )
    }

    fn create_team(&mut self, team: &TeamDecl) -> Result<ResourceHandle> {
        let parent_team_id = match &team.parent {
            Some(parent) => match self.org.teams.get(parent) {
                Some(handle) => Some(handle.id()),
                None => {
                    return Err(BuildError::UnresolvedParent {
                        team: team.name.clone(),
                        parent: parent.clone(),
                    }
                    .into());
                }
            },
            None => None,
        };

        let members = team.members();
        if members.is_empty() {
            return Err(BuildError::MissingMembers(team.name.clone()).into());
        }

        let args = TeamArgs {
            name: team.name.clone(),
            description: team.description.clone(),
            privacy: team.privacy().to_string(),
            parent_team_id,
        };
        let opts = ResourceOptions::derive(team, IdKey::ImportId, self.settings);
        let handle = self.provider.create_team(&team.slug(), &args, &opts)?;

        for member in &members {
            let args = TeamMembershipArgs {
                team_id: handle.id(),
                username: member.name.clone(),
                role: member.role.clone(),
            };
            let opts = ResourceOptions::derive(member, IdKey::ImportId, self.settings);
            self.provider.create_team_membership(
                &format!("{}-{}", team.name, member.name),
                &args,
                &opts,
            )?;
        }

        for grant in &team.repositories {
            let Some(repo) = self.org.repos.get(&grant.name) else {
                let message = format!(
                    "Repository '{}' is not managed by this organization document. \
                     Skipping access for team '{}'.",
                    grant.name, team.name
                );
                warn!("{}", message);
                self.org.diagnostics.push(message);
                continue;
            };

            let args = TeamRepositoryArgs {
                team_id: handle.id(),
                repository: repo_name(repo),
                permission: grant.permission.clone(),
            };
            let opts = ResourceOptions::derive(grant, IdKey::ImportId, self.settings);
            self.provider.create_team_repository(
                &format!("{}-{}", team.name, grant.name),
                &args,
                &opts,
            )?;
        }

        Ok(handle)
    }
}

/// The repository's name as an input, so the grant depends on the repository
fn repo_name(repo: &ResourceHandle) -> Output {
    repo.output("name")
}
