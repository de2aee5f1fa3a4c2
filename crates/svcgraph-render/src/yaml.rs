//! YAML view schema rendering.
//!
//! The document has three top-level sequences: `nodes`, `edges`, and
//! `views`. Unlike DOT output, the graph is rendered whole; seed services
//! only shape the views, and the viewer expands the scoped view itself.

use serde::Serialize;
use svcgraph_common::constants::PARAMETER_SEPARATOR;
use svcgraph_common::error::Result;
use svcgraph_common::types::{EdgeKind, ServiceType};
use svcgraph_service::graph::ServiceGraph;

/// Name of the view restricted to the seed services.
pub const SELECTED_VIEW: &str = "selected";
/// Name of the unscoped view.
pub const ALL_VIEW: &str = "all";
/// Expansion directive attached to the scoped view.
pub const EXPAND_OUTWARD: &str = "recursive_outward_neighbours";

#[derive(Debug, Serialize)]
struct ViewDocument<'a> {
    nodes: Vec<NodeEntry<'a>>,
    edges: Vec<EdgeEntry<'a>>,
    views: Vec<ViewEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct NodeEntry<'a> {
    /// Display label followed by the node identifier.
    id: (String, &'a str),
    style_notag: &'static str,
}

#[derive(Debug, Serialize)]
struct EdgeEntry<'a> {
    link: (&'a str, &'a str),
    style: &'static str,
}

#[derive(Debug, Serialize)]
struct ViewEntry<'a> {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    services: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    default: bool,
}

/// Style token for a node of the given type.
#[must_use]
pub const fn node_style(service_type: ServiceType) -> &'static str {
    match service_type {
        ServiceType::Process => "process",
        ServiceType::BgProcess => "bgprocess",
        ServiceType::Scripted => "scripted",
        ServiceType::Internal => "internal",
        ServiceType::Triggered => "triggered",
        ServiceType::Unknown => "unknown",
    }
}

/// Style token for an edge of the given kind.
#[must_use]
pub const fn edge_style(kind: EdgeKind) -> &'static str {
    match kind {
        EdgeKind::DependsOn => "depends_on",
        EdgeKind::DependsMs => "depends_ms",
        EdgeKind::WaitsFor => "waits_for",
        EdgeKind::After => "after",
    }
}

/// Label shown for a node: parametric services get a trailing `@`.
#[must_use]
pub fn display_name(name: &str, has_parameters: bool) -> String {
    if has_parameters {
        format!("{name}{PARAMETER_SEPARATOR}")
    } else {
        name.to_owned()
    }
}

/// Renders the graph as a YAML view document.
///
/// With seed services, a `selected` view scoped to them is emitted ahead of
/// the default `all` view. Without seeds only the default view exists.
///
/// # Errors
///
/// Returns an error if YAML serialization fails.
pub fn render_yaml<S: AsRef<str>>(graph: &ServiceGraph, seeds: &[S]) -> Result<String> {
    let nodes = graph
        .nodes()
        .iter()
        .map(|(name, info)| NodeEntry {
            id: (display_name(name, info.has_parameters), name.as_str()),
            style_notag: node_style(info.service_type),
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|edge| EdgeEntry {
            link: (edge.source.as_str(), edge.target.as_str()),
            style: edge_style(edge.kind),
        })
        .collect();

    let mut views = Vec::with_capacity(2);
    if !seeds.is_empty() {
        views.push(ViewEntry {
            name: SELECTED_VIEW,
            services: Some(seeds.iter().map(|s| s.as_ref()).collect()),
            expand: Some(EXPAND_OUTWARD),
            default: false,
        });
    }
    views.push(ViewEntry {
        name: ALL_VIEW,
        services: None,
        expand: None,
        default: true,
    });

    let document = ViewDocument {
        nodes,
        edges,
        views,
    };
    let out = serde_yaml::to_string(&document)?;
    tracing::debug!(bytes = out.len(), "rendered YAML view document");
    Ok(out)
}
