//! # svcgraph-render
//!
//! Serializers turning a [`ServiceGraph`](svcgraph_service::graph::ServiceGraph)
//! into text.
//!
//! - **Dot**: Graphviz digraph, one styled statement per node and edge.
//!   Apply [`filter_graph`](svcgraph_service::filter::filter_graph) first to
//!   scope it.
//! - **Yaml**: hierarchical view schema with optional scoped view.

pub mod dot;
pub mod yaml;
