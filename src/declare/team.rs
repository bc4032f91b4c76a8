//! Team declarations, their members and repository grants

use serde::Deserialize;

use super::opt_scalar;
use crate::options::{Declared, IdKey};

/// Privacy given to teams that declare none
pub const DEFAULT_PRIVACY: &str = "closed";

/// A team entry from the `teams` list
#[derive(Debug, Clone, Deserialize)]
pub struct TeamDecl {
    pub name: String,

    /// URL-friendly name; derived from `name` when absent
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// `closed` or `secret`
    #[serde(default)]
    pub privacy: Option<String>,

    /// Name of a team declared earlier in the document
    #[serde(default)]
    pub parent: Option<String>,

    #[serde(default)]
    pub members: Option<Vec<MemberEntry>>,

    #[serde(default)]
    pub repositories: Vec<TeamRepositoryDecl>,

    #[serde(default)]
    pub protect: Option<bool>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub import_id: Option<String>,
}

/// A team member as written: a bare login or a full entry
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MemberEntry {
    Name(String),
    Detailed(MemberDecl),
}

/// A team member
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberDecl {
    pub name: String,

    /// `member` or `maintainer`; left to the provider when absent
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub protect: Option<bool>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub import_id: Option<String>,
}

/// A repository the team is granted access to
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRepositoryDecl {
    pub name: String,

    /// `pull`, `triage`, `push`, `maintain` or `admin`
    #[serde(default)]
    pub permission: Option<String>,

    #[serde(default)]
    pub protect: Option<bool>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub import_id: Option<String>,
}

impl TeamDecl {
    /// Declared slug, or the name lowercased and trimmed with spaces as hyphens
    pub fn slug(&self) -> String {
        match &self.slug {
            Some(slug) => slug.clone(),
            None => self.name.to_lowercase().trim().replace(' ', "-"),
        }
    }

    /// Declared privacy, falling back to [`DEFAULT_PRIVACY`]
    pub fn privacy(&self) -> &str {
        self.privacy.as_deref().unwrap_or(DEFAULT_PRIVACY)
    }

    /// Members normalized to full entries
    pub fn members(&self) -> Vec<MemberDecl> {
        self.members
            .iter()
            .flatten()
            .cloned()
            .map(MemberDecl::from)
            .collect()
    }
}

impl From<MemberEntry> for MemberDecl {
    fn from(entry: MemberEntry) -> Self {
        match entry {
            MemberEntry::Name(name) => MemberDecl {
                name,
                ..Default::default()
            },
            MemberEntry::Detailed(decl) => decl,
        }
    }
}

macro_rules! declared_by_import_id {
    ($($ty:ty),*) => {
        $(
            impl Declared for $ty {
                fn protect(&self) -> Option<bool> {
                    self.protect
                }

                fn identifier(&self, key: IdKey) -> Option<&str> {
                    match key {
                        IdKey::ImportId => self.import_id.as_deref(),
                        IdKey::DefaultBranch => None,
                    }
                }
            }
        )*
    };
}

declared_by_import_id!(TeamDecl, MemberDecl, TeamRepositoryDecl);
