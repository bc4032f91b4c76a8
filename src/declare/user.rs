//! Organization member declarations

use serde::Deserialize;

use super::opt_scalar;
use crate::options::{Declared, IdKey};

/// Role given to organization members that declare none
pub const DEFAULT_ROLE: &str = "member";

/// A user entry from the `users` list
#[derive(Debug, Clone, Deserialize)]
pub struct UserDecl {
    /// GitHub login
    pub name: String,

    /// `member` or `admin`
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub protect: Option<bool>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub import_id: Option<String>,
}

impl UserDecl {
    /// Declared role, falling back to [`DEFAULT_ROLE`]
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_ROLE)
    }
}

impl Declared for UserDecl {
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
