//! Failing provider for testing
//!
//! Wraps a [`ResourceGraph`] and rejects registrations on demand, so tests
//! can check that provider errors reach the caller untouched.

use super::{Provider, ResourceGraph, ResourceHandle, ResourceKind};
use crate::error::ProviderError;
use crate::options::ResourceOptions;

/// Provider that rejects the first registration of a given kind.
///
/// # Example
/// ```ignore
/// let mut provider = FailingProvider::on_kind(ResourceKind::Team, "rate limited");
/// let result = Organization::build(&doc, &settings, &mut provider);
/// assert!(matches!(result, Err(Error::Provider(_))));
/// ```
pub struct FailingProvider {
    /// Registrations accepted before the failure
    pub graph: ResourceGraph,
    fail_on: ResourceKind,
    reason: String,
    /// Number of register calls seen, including the failing one
    pub calls: usize,
}

impl FailingProvider {
    pub fn on_kind(kind: ResourceKind, reason: &str) -> Self {
        Self {
            graph: ResourceGraph::new(),
            fail_on: kind,
            reason: reason.to_string(),
            calls: 0,
        }
    }
}

impl Provider for FailingProvider {
    fn register(
        &mut self,
        kind: ResourceKind,
        name: &str,
        inputs: serde_json::Value,
        options: &ResourceOptions,
    ) -> Result<ResourceHandle, ProviderError> {
        self.calls += 1;
        if kind == self.fail_on {
            return Err(ProviderError::Rejected {
                kind: kind.to_string(),
                name: name.to_string(),
                reason: self.reason.clone(),
            });
        }
        self.graph.register(kind, name, inputs, options)
    }
}
