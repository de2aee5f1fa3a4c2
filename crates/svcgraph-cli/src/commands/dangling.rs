//! `svcgraph dangling` — List services referenced without a descriptor.

use clap::Args;
use svcgraph_common::config::GraphConfig;

use super::GraphArgs;

/// Arguments for the `dangling` command.
#[derive(Args, Debug)]
pub struct DanglingArgs {
    /// Directories, services, and output.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Executes the `dangling` command.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn execute(config: GraphConfig) -> anyhow::Result<()> {
    let graph = super::load_filtered_graph(&config);
    let count = graph.undeclared_nodes().count();
    tracing::info!(count, "found dangling references");
    let text = crate::output::format_dangling(&graph);
    crate::output::write_output(config.output_file(), &text)
}
