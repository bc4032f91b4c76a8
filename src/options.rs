//! Per-resource provider options
//!
//! Every declared entity may carry a `protect` flag and an import identifier.
//! These become the options attached to the provider resource created for it.

use log::debug;
use serde::Serialize;

use crate::config::Settings;

/// Which declared field supplies the import identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdKey {
    /// The entity's own `import_id` field
    #[default]
    ImportId,
    /// A repository's `default_branch` field, used for branch-default pointers
    DefaultBranch,
}

impl IdKey {
    /// Field name as written in the organization document
    pub fn field_name(self) -> &'static str {
        match self {
            IdKey::ImportId => "import_id",
            IdKey::DefaultBranch => "default_branch",
        }
    }
}

/// Read access to the option-related fields of a declaration
pub trait Declared {
    /// Declared `protect` value, if any
    fn protect(&self) -> Option<bool>;

    /// Declared value of the identifier field named by `key`
    fn identifier(&self, key: IdKey) -> Option<&str>;
}

/// Options passed to the provider alongside a resource's inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceOptions {
    /// Refuse to delete the resource on destroy
    pub protect: bool,

    /// Adopt an existing remote object with this identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        Self {
            protect: true,
            import_id: None,
        }
    }
}

impl ResourceOptions {
    /// Derive options for a declaration.
    ///
    /// `protect` defaults to true. An import directive is attached only when
    /// import mode is on and the declaration has a non-empty value for `key`.
    pub fn derive<D: Declared + ?Sized>(decl: &D, key: IdKey, settings: &Settings) -> Self {
        let import_id = if settings.import_mode {
            decl.identifier(key)
                .filter(|id| !id.is_empty())
                .map(|id| {
                    debug!("Importing existing object by {} '{}'", key.field_name(), id);
                    id.to_string()
                })
        } else {
            None
        };

        Self {
            protect: decl.protect().unwrap_or(true),
            import_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entity {
        protect: Option<bool>,
        import_id: Option<String>,
        default_branch: Option<String>,
    }

    impl Declared for Entity {
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

    fn entity(import_id: Option<&str>) -> Entity {
        Entity {
            protect: None,
            import_id: import_id.map(str::to_string),
            default_branch: Some("main".to_string()),
        }
    }

    const IMPORTING: Settings = Settings { import_mode: true };

    #[test]
    fn test_protect_defaults_to_true() {
        let opts = ResourceOptions::derive(&entity(None), IdKey::default(), &Settings::default());
        assert!(opts.protect);
        assert!(opts.import_id.is_none());
    }

    #[test]
    fn test_declared_protect_is_kept() {
        let mut e = entity(None);
        e.protect = Some(false);
        let opts = ResourceOptions::derive(&e, IdKey::ImportId, &Settings::default());
        assert!(!opts.protect);
    }

    #[test]
    fn test_import_id_ignored_without_import_mode() {
        let opts = ResourceOptions::derive(&entity(Some("42")), IdKey::ImportId, &Settings::default());
        assert!(opts.import_id.is_none());
    }

    #[test]
    fn test_import_id_attached_in_import_mode() {
        let opts = ResourceOptions::derive(&entity(Some("42")), IdKey::ImportId, &IMPORTING);
        assert_eq!(opts.import_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_empty_import_id_is_ignored() {
        let opts = ResourceOptions::derive(&entity(Some("")), IdKey::ImportId, &IMPORTING);
        assert!(opts.import_id.is_none());
    }

    #[test]
    fn test_alternate_id_key() {
        let opts = ResourceOptions::derive(&entity(Some("42")), IdKey::DefaultBranch, &IMPORTING);
        assert_eq!(opts.import_id.as_deref(), Some("main"));
        assert_eq!(IdKey::DefaultBranch.field_name(), "default_branch");
    }
}
