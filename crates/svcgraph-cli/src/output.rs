//! Output helpers for CLI commands.
//!
//! Text listings for `plan` and `dangling`, and the single place where
//! rendered output is written to its destination.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use svcgraph_service::graph::ServiceGraph;

/// Writes rendered output to a file, or to stdout when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the destination cannot be opened or written.
pub fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write output to {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = content.len(), "wrote output");
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write output to stdout")
}

/// Formats a startup order as a numbered listing with service types.
#[must_use]
pub fn format_plan(graph: &ServiceGraph, order: &[String]) -> String {
    let width = order.len().to_string().len();
    let mut lines: Vec<String> = order
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let ty = graph
                .node(name)
                .map_or("unknown", |info| info.service_type.as_str());
            format!("{:>width$}. {name} ({ty})", i + 1)
        })
        .collect();
    lines.push(format!("{} service(s) in startup order.", order.len()));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Formats each undeclared service with the services referencing it.
#[must_use]
pub fn format_dangling(graph: &ServiceGraph) -> String {
    let mut out = String::new();
    for name in graph.undeclared_nodes() {
        let referrers: Vec<String> = graph
            .referrers_of(name)
            .into_iter()
            .map(|(referrer, kind)| format!("{referrer} ({kind})"))
            .collect();
        out.push_str(name);
        if !referrers.is_empty() {
            out.push_str(" <- ");
            out.push_str(&referrers.join(", "));
        }
        out.push('\n');
    }
    out
}
