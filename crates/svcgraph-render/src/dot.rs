//! Graphviz DOT rendering.

use std::borrow::Cow;

use svcgraph_common::constants::DOT_GRAPH_NAME;
use svcgraph_common::types::{EdgeKind, ServiceType};
use svcgraph_service::graph::ServiceGraph;

/// Arrowhead drawn at the target end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrowhead {
    /// Plain arrow.
    Normal,
    /// Filled circle.
    Dot,
    /// Diamond.
    Diamond,
    /// Perpendicular bar.
    Tee,
}

impl Arrowhead {
    /// Graphviz attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Dot => "dot",
            Self::Diamond => "diamond",
            Self::Tee => "tee",
        }
    }
}

impl From<EdgeKind> for Arrowhead {
    fn from(kind: EdgeKind) -> Self {
        match kind {
            EdgeKind::DependsOn => Self::Normal,
            EdgeKind::DependsMs => Self::Dot,
            EdgeKind::WaitsFor => Self::Diamond,
            EdgeKind::After => Self::Tee,
        }
    }
}

/// Fill color for a node of the given type.
#[must_use]
pub const fn fill_color(service_type: ServiceType) -> &'static str {
    match service_type {
        ServiceType::Process => "lightblue",
        ServiceType::BgProcess => "lightgreen",
        ServiceType::Scripted => "lightyellow",
        ServiceType::Internal => "lightgray",
        ServiceType::Triggered => "lightpink",
        ServiceType::Unknown => "white",
    }
}

/// Escapes a name for use inside a double-quoted DOT identifier.
#[must_use]
pub fn escape(name: &str) -> Cow<'_, str> {
    if name.contains('"') {
        Cow::Owned(name.replace('"', "\\\""))
    } else {
        Cow::Borrowed(name)
    }
}

/// Renders the whole graph as a DOT digraph.
///
/// Nodes are emitted in name order and edges in the graph's edge order, so
/// the same graph always renders to the same text.
#[must_use]
pub fn render_dot(graph: &ServiceGraph) -> String {
    let mut lines = Vec::with_capacity(graph.node_count() + graph.edge_count() + 4);
    lines.push(format!("digraph {DOT_GRAPH_NAME} {{"));
    lines.push("    rankdir=TB;".to_owned());
    lines.push("    node [shape=box, style=rounded];".to_owned());

    for (name, info) in graph.nodes() {
        let name = escape(name);
        lines.push(format!(
            "    \"{name}\" [label=\"{name}\", fillcolor=\"{}\", style=\"rounded,filled\"];",
            fill_color(info.service_type)
        ));
    }

    for edge in graph.edges() {
        lines.push(format!(
            "    \"{}\" -> \"{}\" [arrowhead=\"{}\"];",
            escape(&edge.source),
            escape(&edge.target),
            Arrowhead::from(edge.kind).as_str()
        ));
    }

    lines.push("}".to_owned());
    tracing::debug!(lines = lines.len(), "rendered DOT graph");
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
