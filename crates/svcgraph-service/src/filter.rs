//! Forward reachability filtering.
//!
//! Narrows a graph to a set of seed services plus everything they depend
//! on, directly or transitively. Services that depend on the seeds are left
//! out.

use std::collections::BTreeSet;

use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;

use crate::graph::ServiceGraph;

/// Computes the forward closure of `seeds` over the graph's edges.
///
/// Seeds are always part of the closure, even when they are not nodes.
#[must_use]
pub fn reachable_from<S: AsRef<str>>(graph: &ServiceGraph, seeds: &[S]) -> BTreeSet<String> {
    let mut view: DiGraphMap<&str, ()> = DiGraphMap::new();
    for edge in graph.edges() {
        let _ = view.add_edge(edge.source.as_str(), edge.target.as_str(), ());
    }

    let mut closure: BTreeSet<String> = BTreeSet::new();
    let mut dfs = Dfs::empty(&view);
    for seed in seeds {
        let seed = seed.as_ref();
        let _ = closure.insert(seed.to_owned());
        if !view.contains_node(seed) {
            continue;
        }
        dfs.move_to(seed);
        while let Some(name) = dfs.next(&view) {
            let _ = closure.insert(name.to_owned());
        }
    }
    closure
}

/// Returns a new graph restricted to the forward closure of `seeds`.
///
/// Kept nodes are those in the closure; kept edges are those with both
/// endpoints in the closure. The input graph is left untouched.
#[must_use]
pub fn filter_graph<S: AsRef<str>>(graph: &ServiceGraph, seeds: &[S]) -> ServiceGraph {
    let closure = reachable_from(graph, seeds);
    let mut filtered = ServiceGraph::new();

    for (name, info) in graph.nodes() {
        if closure.contains(name) {
            let _ = filtered.declare(name.clone(), *info);
        }
    }
    for edge in graph.edges() {
        if closure.contains(&edge.source) && closure.contains(&edge.target) {
            let _ = filtered.add_edge(edge.clone());
        }
    }

    tracing::debug!(
        seeds = seeds.len(),
        nodes = filtered.node_count(),
        edges = filtered.edge_count(),
        "filtered service graph"
    );
    filtered
}
