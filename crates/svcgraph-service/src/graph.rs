//! Service dependency graph construction.
//!
//! The graph is built in two passes over the parsed descriptors: the first
//! records every declared service, the second materializes edges. Names that
//! are referenced but never declared become `unknown` nodes so that dangling
//! references stay visible in the output.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use svcgraph_common::constants::DIRECTORY_DEP_SUFFIX;
use svcgraph_common::error::{Result, SvcgraphError};
use svcgraph_common::types::{DependencyKind, EdgeKind, ServiceType};

use crate::expand::expand_directory;
use crate::parser::{self, ast::ServiceDescriptor};

/// Per-service attributes stored on a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo {
    /// Declared type, or [`ServiceType::Unknown`] for undeclared services
    /// and unrecognized types.
    pub service_type: ServiceType,
    /// Whether the service's descriptor references positional parameters.
    pub has_parameters: bool,
    /// Whether a descriptor for the service was scanned.
    pub declared: bool,
}

impl NodeInfo {
    /// Attributes of a service that is referenced but never declared.
    pub const UNKNOWN: Self = Self {
        service_type: ServiceType::Unknown,
        has_parameters: false,
        declared: false,
    };
}

/// A directed edge: `source` depends on, or is ordered after, `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Service declaring the relationship.
    pub source: String,
    /// Service the relationship points at.
    pub target: String,
    /// Relationship kind.
    pub kind: EdgeKind,
}

impl Edge {
    /// Creates an edge.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

/// Services and their dependency relationships.
///
/// Nodes and edges are kept in ordered collections, so every traversal of
/// the graph is deterministic. Every edge endpoint is a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceGraph {
    nodes: BTreeMap<String, NodeInfo>,
    edges: BTreeSet<Edge>,
}

impl ServiceGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a declared service, replacing any previous declaration.
    ///
    /// Returns the previous attributes if the service was already present.
    pub fn declare(&mut self, name: impl Into<String>, info: NodeInfo) -> Option<NodeInfo> {
        self.nodes.insert(name.into(), info)
    }

    /// Adds an edge, inserting `unknown` nodes for endpoints not yet present.
    ///
    /// Returns `false` if the identical edge already existed.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        for endpoint in [&edge.source, &edge.target] {
            if !self.nodes.contains_key(endpoint) {
                let _ = self.nodes.insert(endpoint.clone(), NodeInfo::UNKNOWN);
            }
        }
        self.edges.insert(edge)
    }

    /// Returns all nodes, ordered by name.
    #[must_use]
    pub const fn nodes(&self) -> &BTreeMap<String, NodeInfo> {
        &self.nodes
    }

    /// Returns all edges, ordered by source, target, then kind.
    #[must_use]
    pub const fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// Returns the attributes of a service.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&NodeInfo> {
        self.nodes.get(name)
    }

    /// Whether `name` is a node.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Names of services that are referenced but have no descriptor, in
    /// order.
    pub fn undeclared_nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|(_, info)| !info.declared)
            .map(|(name, _)| name.as_str())
    }

    /// Services whose descriptors mention `name`, with the property that
    /// does, ordered by referrer.
    ///
    /// An undeclared service has no descriptor of its own, so an `after`
    /// edge leaving it can only come from a `before` in the edge's target;
    /// such edges are reported as `before` references.
    #[must_use]
    pub fn referrers_of(&self, name: &str) -> Vec<(&str, DependencyKind)> {
        let undeclared = self.node(name).is_some_and(|info| !info.declared);
        let mut referrers: Vec<(&str, DependencyKind)> = self
            .edges
            .iter()
            .filter_map(|edge| {
                if edge.target == name {
                    Some((edge.source.as_str(), DependencyKind::from(edge.kind)))
                } else if undeclared && edge.source == name && edge.kind == EdgeKind::After {
                    Some((edge.target.as_str(), DependencyKind::Before))
                } else {
                    None
                }
            })
            .collect();
        referrers.sort_unstable();
        referrers.dedup();
        referrers
    }

    /// Returns a startup order: every service appears after the services
    /// its edges point at.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph contains a cycle.
    pub fn startup_order(&self) -> Result<Vec<String>> {
        // Edges point from dependency to dependent so that toposort yields
        // dependencies first.
        let mut graph = petgraph::Graph::<&str, EdgeKind>::new();
        let index: HashMap<&str, petgraph::graph::NodeIndex> = self
            .nodes
            .keys()
            .map(|name| (name.as_str(), graph.add_node(name.as_str())))
            .collect();

        for edge in &self.edges {
            if let (Some(&from), Some(&to)) = (
                index.get(edge.target.as_str()),
                index.get(edge.source.as_str()),
            ) {
                let _ = graph.add_edge(from, to, edge.kind);
            }
        }

        match petgraph::algo::toposort(&graph, None) {
            Ok(indices) => Ok(indices
                .into_iter()
                .filter_map(|idx| graph.node_weight(idx).map(|name| (*name).to_owned()))
                .collect()),
            Err(cycle) => Err(SvcgraphError::Cycle {
                service: graph
                    .node_weight(cycle.node_id())
                    .map_or_else(String::new, |name| (*name).to_owned()),
            }),
        }
    }
}

/// Parses every file once and builds the graph from the results.
///
/// When two files derive the same service name, the one later in `files`
/// wins; callers wanting reproducible output should pass files in a stable
/// order.
#[must_use]
pub fn build_graph(files: &[PathBuf]) -> ServiceGraph {
    let descriptors: Vec<ServiceDescriptor> =
        files.iter().map(|path| parser::parse_descriptor(path)).collect();
    build_graph_from_descriptors(&descriptors)
}

/// Builds the graph from already parsed descriptors.
#[must_use]
pub fn build_graph_from_descriptors(descriptors: &[ServiceDescriptor]) -> ServiceGraph {
    let mut graph = ServiceGraph::new();

    for desc in descriptors {
        let info = NodeInfo {
            service_type: desc.service_type,
            has_parameters: desc.has_parameters,
            declared: true,
        };
        if graph.declare(desc.name.clone(), info).is_some() {
            tracing::warn!(
                service = %desc.name,
                path = %desc.path.display(),
                "service declared more than once, last declaration wins"
            );
        }
    }

    for desc in descriptors {
        add_dependency_edges(&mut graph, desc);
    }

    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built service graph"
    );
    graph
}

fn add_dependency_edges(graph: &mut ServiceGraph, desc: &ServiceDescriptor) {
    let anchor = desc.path.parent().unwrap_or_else(|| Path::new(""));

    for kind in DependencyKind::ALL {
        let edge_kind = kind.edge_kind();
        for token in desc.dependencies_of(kind) {
            match kind {
                DependencyKind::DependsOn | DependencyKind::DependsMs | DependencyKind::WaitsFor => {
                    if let Some(dir) = token.strip_suffix(DIRECTORY_DEP_SUFFIX) {
                        for name in expand_directory(Path::new(dir), anchor) {
                            let _ = graph.add_edge(Edge::new(&desc.name, name, edge_kind));
                        }
                    } else {
                        let _ = graph.add_edge(Edge::new(&desc.name, token, edge_kind));
                    }
                }
                DependencyKind::DependsOnDir
                | DependencyKind::DependsMsDir
                | DependencyKind::WaitsForDir => {
                    for name in expand_directory(Path::new(token), anchor) {
                        let _ = graph.add_edge(Edge::new(&desc.name, name, edge_kind));
                    }
                }
                DependencyKind::After => {
                    let _ = graph.add_edge(Edge::new(&desc.name, token, edge_kind));
                }
                DependencyKind::Before => {
                    let _ = graph.add_edge(Edge::new(token, &desc.name, edge_kind));
                }
            }
        }
    }
}
