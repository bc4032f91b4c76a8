//! Plan command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::{BuildContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::models::ResourceDisplay;
use crate::output::{self, Formattable, json, table};
use crate::provider::{RecordedResource, ResourceKind};

/// Kinds in the order they are listed by pretty output
const KIND_ORDER: [ResourceKind; 6] = [
    ResourceKind::Repository,
    ResourceKind::BranchDefault,
    ResourceKind::Membership,
    ResourceKind::Team,
    ResourceKind::TeamMembership,
    ResourceKind::TeamRepository,
];

/// Everything `orgplan plan` reports about one build
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub organization: &'a str,
    pub resources: &'a [RecordedResource],
    pub diagnostics: &'a [String],
    #[serde(skip)]
    import_mode: bool,
}

impl<'a> PlanReport<'a> {
    pub fn new(ctx: &'a BuildContext) -> Self {
        Self {
            organization: &ctx.organization.name,
            resources: ctx.graph.resources(),
            diagnostics: &ctx.organization.diagnostics,
            import_mode: ctx.settings.import_mode,
        }
    }

    fn rows(&self) -> Vec<ResourceDisplay> {
        self.resources.iter().map(ResourceDisplay::from).collect()
    }

    fn pretty(&self) -> String {
        let mut out = format!("{} {}\n", "Organization".bold(), self.organization.cyan());
        if self.import_mode {
            out.push_str(&format!("{}\n", "Import mode: existing objects will be adopted".yellow()));
        }

        for kind in KIND_ORDER {
            let rows: Vec<ResourceDisplay> = self
                .resources
                .iter()
                .filter(|r| r.kind == kind)
                .map(ResourceDisplay::from)
                .collect();
            if rows.is_empty() {
                continue;
            }

            out.push_str(&format!("\n{} ({})\n", kind.to_string().bold(), rows.len()));
            for row in rows {
                let marker = if row.protect.is_empty() {
                    "+".green()
                } else {
                    "+".green().bold()
                };
                out.push_str(&format!("  {} {}  {}", marker, row.name, row.detail.dimmed()));
                if row.import_id != "--" {
                    out.push_str(&format!("  {} {}", "import".yellow(), row.import_id));
                }
                out.push('\n');
            }
        }

        for diagnostic in self.diagnostics {
            out.push_str(&format!("\n{} {}", "⚠".yellow(), diagnostic));
        }
        if !self.diagnostics.is_empty() {
            out.push('\n');
        }

        out.push_str(&format!("\n{} resources planned", self.resources.len()));
        out
    }
}

impl Formattable for PlanReport<'_> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.pretty()),
            OutputFormat::Table => Ok(table::format_table(&self.rows(), "No resources declared.")),
            OutputFormat::Json => Ok(json::format_json(self, self.import_mode)?),
        }
    }
}

/// Run the plan command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = BuildContext::new(opts)?;
    output::print(&PlanReport::new(&ctx), ctx.format)
}
