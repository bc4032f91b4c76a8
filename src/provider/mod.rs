//! Provider resource registration
//!
//! The organization builder never talks to GitHub. It registers resources
//! with a [`Provider`] and wires the returned handles into later resources;
//! the provisioning engine that consumes the graph owns diffing and apply.

use serde::Serialize;
use std::fmt;

use crate::error::{ProviderError, Result};
use crate::options::ResourceOptions;

pub mod graph;
#[cfg(test)]
pub mod mock;
pub mod resources;

pub use graph::{RecordedResource, ResourceGraph};
#[cfg(test)]
pub use mock::FailingProvider;
pub use resources::{
    BranchDefaultArgs, MembershipArgs, RepositoryArgs, TeamArgs, TeamMembershipArgs,
    TeamRepositoryArgs,
};

/// Kinds of GitHub resource the builder creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ResourceKind {
    Repository,
    BranchDefault,
    Membership,
    Team,
    TeamMembership,
    TeamRepository,
}

impl ResourceKind {
    /// Provider type token
    pub fn type_token(self) -> &'static str {
        match self {
            ResourceKind::Repository => "github:index/repository:Repository",
            ResourceKind::BranchDefault => "github:index/branchDefault:BranchDefault",
            ResourceKind::Membership => "github:index/membership:Membership",
            ResourceKind::Team => "github:index/team:Team",
            ResourceKind::TeamMembership => "github:index/teamMembership:TeamMembership",
            ResourceKind::TeamRepository => "github:index/teamRepository:TeamRepository",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Repository => "repository",
            ResourceKind::BranchDefault => "branch-default",
            ResourceKind::Membership => "membership",
            ResourceKind::Team => "team",
            ResourceKind::TeamMembership => "team-membership",
            ResourceKind::TeamRepository => "team-repository",
        };
        f.write_str(label)
    }
}

/// A resource input value.
///
/// Attributes such as a team's numeric id only exist once the engine has
/// created the resource, so they are passed along as pending references.
/// Logical names are only unique within a kind, so a reference carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Known(String),
    Pending {
        kind: ResourceKind,
        resource: String,
        attribute: String,
    },
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Known(value) => f.write_str(value),
            Output::Pending {
                kind,
                resource,
                attribute,
            } => write!(f, "${{{kind:?}:{resource}.{attribute}}}"),
        }
    }
}

/// Opaque reference to a registered resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHandle {
    kind: ResourceKind,
    name: String,
}

impl ResourceHandle {
    pub fn new(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Logical resource name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deferred reference to one of the resource's attributes
    pub fn output(&self, attribute: &str) -> Output {
        Output::Pending {
            kind: self.kind,
            resource: self.name.clone(),
            attribute: attribute.to_string(),
        }
    }

    /// Deferred reference to the resource's provider id
    pub fn id(&self) -> Output {
        self.output("id")
    }
}

/// Sink for resource registrations.
///
/// Implementors only need [`Provider::register`]; the typed helpers serialize
/// their arguments and forward to it.
pub trait Provider {
    /// Register one resource and return its handle
    fn register(
        &mut self,
        kind: ResourceKind,
        name: &str,
        inputs: serde_json::Value,
        options: &ResourceOptions,
    ) -> std::result::Result<ResourceHandle, ProviderError>;

    fn create_repository(
        &mut self,
        name: &str,
        args: &RepositoryArgs,
        options: &ResourceOptions,
    ) -> Result<ResourceHandle> {
        let inputs = serde_json::to_value(args)?;
        Ok(self.register(ResourceKind::Repository, name, inputs, options)?)
    }

    fn create_branch_default(
        &mut self,
        name: &str,
        args: &BranchDefaultArgs,
        options: &ResourceOptions,
    ) -> Result<ResourceHandle> {
        let inputs = serde_json::to_value(args)?;
        Ok(self.register(ResourceKind::BranchDefault, name, inputs, options)?)
    }

    fn create_membership(
        &mut self,
        name: &str,
        args: &MembershipArgs,
        options: &ResourceOptions,
    ) -> Result<ResourceHandle> {
        let inputs = serde_json::to_value(args)?;
        Ok(self.register(ResourceKind::Membership, name, inputs, options)?)
    }

    fn create_team(
        &mut self,
        name: &str,
        args: &TeamArgs,
        options: &ResourceOptions,
    ) -> Result<ResourceHandle> {
        let inputs = serde_json::to_value(args)?;
        Ok(self.register(ResourceKind::Team, name, inputs, options)?)
    }

    fn create_team_membership(
        &mut self,
        name: &str,
        args: &TeamMembershipArgs,
        options: &ResourceOptions,
    ) -> Result<ResourceHandle> {
        let inputs = serde_json::to_value(args)?;
        Ok(self.register(ResourceKind::TeamMembership, name, inputs, options)?)
    }

    fn create_team_repository(
        &mut self,
        name: &str,
        args: &TeamRepositoryArgs,
        options: &ResourceOptions,
    ) -> Result<ResourceHandle> {
        let inputs = serde_json::to_value(args)?;
        Ok(self.register(ResourceKind::TeamRepository, name, inputs, options)?)
    }
}
