//! `svcgraph dot` — Render the dependency graph as Graphviz DOT.

use clap::Args;
use svcgraph_common::config::GraphConfig;

use super::GraphArgs;

/// Arguments for the `dot` command.
#[derive(Args, Debug)]
pub struct DotArgs {
    /// Directories, services, and output.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Executes the `dot` command.
///
/// When services are given, the graph is narrowed to them and their
/// dependencies before rendering.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn execute(config: GraphConfig) -> anyhow::Result<()> {
    let graph = super::load_filtered_graph(&config);
    let dot = svcgraph_render::dot::render_dot(&graph);
    crate::output::write_output(config.output_file(), &dot)
}
