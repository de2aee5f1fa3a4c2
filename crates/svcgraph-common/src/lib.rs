//! # svcgraph-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the entire svcgraph workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate and provides the service-type and dependency-kind
//! vocabulary that the parser, graph builder, and renderers share.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
