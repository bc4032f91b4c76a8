//! In-memory resource graph
//!
//! Records every registration in order. This is what `orgplan plan` prints
//! and what the provisioning engine is handed.

use log::debug;
use serde::Serialize;
use std::collections::HashSet;

use super::{Provider, ResourceHandle, ResourceKind};
use crate::error::ProviderError;
use crate::options::ResourceOptions;

/// One registered resource
#[derive(Debug, Clone, Serialize)]
pub struct RecordedResource {
    pub kind: ResourceKind,
    #[serde(rename = "type")]
    pub type_token: &'static str,
    pub name: String,
    pub inputs: serde_json::Value,
    pub options: ResourceOptions,
}

/// Provider that records registrations instead of applying them
#[derive(Debug, Default)]
pub struct ResourceGraph {
    resources: Vec<RecordedResource>,
    names: HashSet<(ResourceKind, String)>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resources in registration order
    pub fn resources(&self) -> &[RecordedResource] {
        &self.resources
    }

    /// Resources of a single kind, in registration order
    pub fn of_kind(&self, kind: ResourceKind) -> impl Iterator<Item = &RecordedResource> {
        self.resources.iter().filter(move |r| r.kind == kind)
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        self.of_kind(kind).count()
    }

    /// Look up a resource by kind and logical name
    pub fn get(&self, kind: ResourceKind, name: &str) -> Option<&RecordedResource> {
        self.of_kind(kind).find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl Provider for ResourceGraph {
    fn register(
        &mut self,
        kind: ResourceKind,
        name: &str,
        inputs: serde_json::Value,
        options: &ResourceOptions,
    ) -> Result<ResourceHandle, ProviderError> {
        // Two resources of one type may not share a logical name
        if !self.names.insert((kind, name.to_string())) {
            return Err(ProviderError::Rejected {
                kind: kind.to_string(),
                name: name.to_string(),
                reason: "a resource with this name is already registered".to_string(),
            });
        }

        debug!("Registered {} '{}'", kind, name);
        self.resources.push(RecordedResource {
            kind,
            type_token: kind.type_token(),
            name: name.to_string(),
            inputs,
            options: options.clone(),
        });

        Ok(ResourceHandle::new(kind, name))
    }
}
