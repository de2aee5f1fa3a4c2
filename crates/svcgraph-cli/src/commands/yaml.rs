//! `svcgraph yaml` — Render the dependency graph as a YAML view document.

use clap::Args;
use svcgraph_common::config::GraphConfig;

use super::GraphArgs;

/// Arguments for the `yaml` command.
#[derive(Args, Debug)]
pub struct YamlArgs {
    /// Directories, services, and output.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Executes the `yaml` command.
///
/// The whole graph is always emitted; services only add a scoped view.
///
/// # Errors
///
/// Returns an error if serialization fails or the output cannot be written.
pub fn execute(config: GraphConfig) -> anyhow::Result<()> {
    let graph = super::load_graph(&config);
    let yaml = svcgraph_render::yaml::render_yaml(&graph, &config.services)?;
    crate::output::write_output(config.output_file(), &yaml)
}
