//! Parsed representation of a single service descriptor.

use std::collections::BTreeMap;
use std::path::PathBuf;

use svcgraph_common::types::{DependencyKind, ServiceType};

/// The dependency- and type-related content of one descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Service name: the file name with any instance argument removed.
    pub name: String,
    /// File the descriptor was read from.
    pub path: PathBuf,
    /// Declared service type.
    pub service_type: ServiceType,
    /// Referenced names per dependency property, in declaration order.
    /// Only properties that appeared in the file have an entry.
    pub dependencies: BTreeMap<DependencyKind, Vec<String>>,
    /// Whether the descriptor references a positional parameter.
    pub has_parameters: bool,
}

impl ServiceDescriptor {
    /// Creates a descriptor with default type and no dependencies.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            service_type: ServiceType::default(),
            dependencies: BTreeMap::new(),
            has_parameters: false,
        }
    }

    /// Returns the names listed under a dependency property.
    #[must_use]
    pub fn dependencies_of(&self, kind: DependencyKind) -> &[String] {
        self.dependencies.get(&kind).map_or(&[], Vec::as_slice)
    }
}
