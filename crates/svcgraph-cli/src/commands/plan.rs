//! `svcgraph plan` — List services in startup order.

use clap::Args;
use svcgraph_common::config::GraphConfig;

use super::GraphArgs;

/// Arguments for the `plan` command.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Directories, services, and output.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Executes the `plan` command.
///
/// Builds the graph, narrows it to the requested services, and lists every
/// service after the services it depends on or is ordered after.
///
/// # Errors
///
/// Returns an error if the graph contains a cycle or the output cannot be
/// written.
pub fn execute(config: GraphConfig) -> anyhow::Result<()> {
    let graph = super::load_filtered_graph(&config);
    let order = graph.startup_order()?;
    let text = crate::output::format_plan(&graph, &order);
    crate::output::write_output(config.output_file(), &text)
}
