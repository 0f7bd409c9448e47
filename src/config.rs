// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use line_tools_shared_kernel::{PresentationError, PresentationResult};
use line_tools_usecase::Tool;

use crate::cli::Args;

/// Resolved settings for one run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ToolConfig {
    pub tool: Tool,
    pub input: PathBuf,
    #[builder(default)]
    pub results_dir: Option<PathBuf>,
    #[builder(default)]
    pub verbosity: u8,
}

impl ToolConfig {
    pub fn builder() -> ToolConfigBuilder {
        ToolConfigBuilder::default()
    }

    /// # Errors
    /// Returns [`PresentationError::ConfigBuildFailed`] when a required field is missing.
    pub fn from_args(tool: Tool, args: Args) -> PresentationResult<Self> {
        Self::builder()
            .tool(tool)
            .input(args.input)
            .results_dir(args.results_dir)
            .verbosity(args.verbose)
            .build()
            .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()))
    }
}
