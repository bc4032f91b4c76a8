//! Command execution context
//!
//! Loads the organization document and builds its resource graph, which
//! every build-based command starts from.

use log::{debug, warn};
use std::path::PathBuf;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::{self, Settings};
use crate::error::Result;
use crate::org::Organization;
use crate::provider::ResourceGraph;

/// A loaded and built organization document.
pub struct BuildContext {
    /// Document the graph was built from
    pub path: PathBuf,
    /// Built organization
    pub organization: Organization,
    /// Every registered resource, in creation order
    pub graph: ResourceGraph,
    /// Settings the build ran with
    pub settings: Settings,
    /// Output format preference
    pub format: OutputFormat,
}

impl BuildContext {
    /// Load the document named by `opts` and build it.
    ///
    /// # Errors
    /// Returns the first loader, validation or provider error.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let path = opts.document_path();
        debug!("Loading organization document from {}", path.display());

        let document = config::load_document(&path)?;
        let mut graph = ResourceGraph::new();
        let organization = Organization::build(&document, &opts.settings, &mut graph)?;

        if graph.is_empty() {
            warn!("{} declares no resources", path.display());
        } else {
            debug!("Planned {} resources", graph.len());
        }

        Ok(Self {
            path,
            organization,
            graph,
            settings: opts.settings.clone(),
            format: opts.format,
        })
    }
}
