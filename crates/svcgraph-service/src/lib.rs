//! # svcgraph-service
//!
//! Reads supervisor service descriptors and turns them into a dependency graph.
//!
//! Handles:
//! - **Parser**: Line-oriented lexing and parsing of descriptor files.
//! - **Expand**: Resolution of directory-valued dependencies.
//! - **Scan**: Non-recursive discovery of descriptor files.
//! - **Graph**: Two-pass graph construction and startup ordering.
//! - **Filter**: Forward reachability closure over the graph.

pub mod expand;
pub mod filter;
pub mod graph;
pub mod parser;
pub mod scan;
