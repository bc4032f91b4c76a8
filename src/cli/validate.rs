//! Validate command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::{BuildContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::{self, Formattable, json};
use crate::provider::ResourceKind;

/// Entity counts for a document that built cleanly
#[derive(Debug, Serialize)]
pub struct ValidationSummary {
    pub document: String,
    pub organization: String,
    pub repositories: usize,
    pub users: usize,
    pub teams: usize,
    pub team_repositories: usize,
    pub skipped: usize,
}

impl ValidationSummary {
    pub fn new(ctx: &BuildContext) -> Self {
        Self {
            document: ctx.path.display().to_string(),
            organization: ctx.organization.name.clone(),
            repositories: ctx.organization.repos.len(),
            users: ctx.organization.users.len(),
            teams: ctx.organization.teams.len(),
            team_repositories: ctx.graph.count(ResourceKind::TeamRepository),
            skipped: ctx.organization.diagnostics.len(),
        }
    }

    fn line(&self) -> String {
        let mut line = format!(
            "{} repositories, {} users, {} teams, {} team repository grants",
            self.repositories, self.users, self.teams, self.team_repositories
        );
        if self.skipped > 0 {
            line.push_str(&format!(" ({} skipped)", self.skipped));
        }
        line
    }
}

impl Formattable for ValidationSummary {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self, false)?),
            OutputFormat::Table => Ok(format!("{}\t{}", self.organization, self.line())),
            OutputFormat::Pretty => Ok(format!(
                "{} {} is valid: {}",
                "✓".green(),
                self.organization.bold(),
                self.line()
            )),
        }
    }
}

/// Run the validate command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = BuildContext::new(opts)?;
    output::print(&ValidationSummary::new(&ctx), ctx.format)
}
