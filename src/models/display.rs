//! Display model for registered resources
//!
//! Flattens a [`RecordedResource`] into the columns shown by `orgplan plan`.

use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::provider::{RecordedResource, ResourceKind};

/// Longest DETAIL column value before truncation
const DETAIL_WIDTH: usize = 48;

/// Resource display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ResourceDisplay {
    /// Resource kind
    #[tabled(rename = "KIND")]
    pub kind: String,

    /// Logical resource name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Whether destroy is refused
    #[tabled(rename = "PROTECT")]
    pub protect: String,

    /// Import identifier, when adopting an existing object
    #[tabled(rename = "IMPORT")]
    pub import_id: String,

    /// Kind-specific summary of the inputs
    #[tabled(rename = "DETAIL")]
    pub detail: String,
}

impl From<&RecordedResource> for ResourceDisplay {
    fn from(resource: &RecordedResource) -> Self {
        let protect = if resource.options.protect {
            "\u{2713}".to_string() // checkmark
        } else {
            "".to_string()
        };

        Self {
            kind: resource.kind.to_string(),
            name: resource.name.clone(),
            protect,
            import_id: resource
                .options
                .import_id
                .clone()
                .unwrap_or_else(|| "--".to_string()),
            detail: truncate_string(&detail(resource.kind, &resource.inputs), DETAIL_WIDTH),
        }
    }
}

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn detail(kind: ResourceKind, inputs: &Value) -> String {
    let field = |key: &str| render(inputs.get(key));

    match kind {
        ResourceKind::Repository => format!(
            "visibility={} wiki={} alerts={}",
            field("visibility"),
            field("has_wiki"),
            field("vulnerability_alerts")
        ),
        ResourceKind::BranchDefault => format!("branch={}", field("branch")),
        ResourceKind::Membership => format!("user={} role={}", field("username"), field("role")),
        ResourceKind::Team => match inputs.get("parent_team_id") {
            Some(parent) => format!("privacy={} parent={}", field("privacy"), render(Some(parent))),
            None => format!("privacy={}", field("privacy")),
        },
        ResourceKind::TeamMembership => {
            format!("user={} role={}", field("username"), field("role"))
        }
        ResourceKind::TeamRepository => format!(
            "repo={} permission={}",
            field("repository"),
            field("permission")
        ),
    }
}

/// Render an input value; pending references show as `${Kind:resource.attribute}`
fn render(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "--".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(obj)) => match (
            obj.get("kind"),
            obj.get("resource"),
            obj.get("attribute"),
        ) {
            (
                Some(Value::String(kind)),
                Some(Value::String(resource)),
                Some(Value::String(attribute)),
            ) => format!("${{{}:{}.{}}}", kind, resource, attribute),
            _ => Value::Object(obj.clone()).to_string(),
        },
        Some(other) => other.to_string(),
    }
}
