//! Domain primitive types used across the svcgraph workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type of a service as declared by its `type` property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// A long-running foreground process (the supervisor's default).
    #[default]
    Process,
    /// A self-backgrounding process tracked through a pid file.
    BgProcess,
    /// A service driven by start/stop commands.
    Scripted,
    /// A service with no associated process.
    Internal,
    /// A service that starts only once externally triggered.
    Triggered,
    /// A service referenced as a dependency but never declared, or declared
    /// with a type outside the known vocabulary.
    Unknown,
}

impl ServiceType {
    /// Maps a `type` property value to a service type.
    ///
    /// Returns `None` for values the supervisor does not define.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "process" => Some(Self::Process),
            "bgprocess" => Some(Self::BgProcess),
            "scripted" => Some(Self::Scripted),
            "internal" => Some(Self::Internal),
            "triggered" => Some(Self::Triggered),
            _ => None,
        }
    }

    /// Returns the keyword used for this type in descriptor files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::BgProcess => "bgprocess",
            Self::Scripted => "scripted",
            Self::Internal => "internal",
            Self::Triggered => "triggered",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dependency property recognized in descriptor files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DependencyKind {
    /// `depends-on`: hard dependency.
    DependsOn,
    /// `depends-ms`: milestone dependency.
    DependsMs,
    /// `waits-for`: soft dependency.
    WaitsFor,
    /// `after`: ordering only.
    After,
    /// `before`: ordering only, inverse of `after`.
    Before,
    /// `depends-on.d`: directory of hard dependencies.
    DependsOnDir,
    /// `depends-ms.d`: directory of milestone dependencies.
    DependsMsDir,
    /// `waits-for.d`: directory of soft dependencies.
    WaitsForDir,
}

impl DependencyKind {
    /// Every recognized dependency property, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::DependsOn,
        Self::DependsMs,
        Self::WaitsFor,
        Self::After,
        Self::Before,
        Self::DependsOnDir,
        Self::DependsMsDir,
        Self::WaitsForDir,
    ];

    /// Maps a property name to a dependency kind, if it is one.
    #[must_use]
    pub fn from_property(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Returns the property name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DependsOn => "depends-on",
            Self::DependsMs => "depends-ms",
            Self::WaitsFor => "waits-for",
            Self::After => "after",
            Self::Before => "before",
            Self::DependsOnDir => "depends-on.d",
            Self::DependsMsDir => "depends-ms.d",
            Self::WaitsForDir => "waits-for.d",
        }
    }

    /// Returns the edge kind this property materializes as.
    ///
    /// `before` maps to [`EdgeKind::After`]; the caller is responsible for
    /// reversing the edge direction.
    #[must_use]
    pub const fn edge_kind(self) -> EdgeKind {
        match self {
            Self::DependsOn | Self::DependsOnDir => EdgeKind::DependsOn,
            Self::DependsMs | Self::DependsMsDir => EdgeKind::DependsMs,
            Self::WaitsFor | Self::WaitsForDir => EdgeKind::WaitsFor,
            Self::After | Self::Before => EdgeKind::After,
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an edge in the service graph.
///
/// There is deliberately no `Before` variant: `A before B` is stored as
/// `B after A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    /// Hard dependency.
    DependsOn,
    /// Milestone dependency.
    DependsMs,
    /// Soft dependency.
    WaitsFor,
    /// Ordering constraint.
    After,
}

impl EdgeKind {
    /// Returns the descriptor property name of this edge kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DependsOn => "depends-on",
            Self::DependsMs => "depends-ms",
            Self::WaitsFor => "waits-for",
            Self::After => "after",
        }
    }
}

impl From<EdgeKind> for DependencyKind {
    fn from(kind: EdgeKind) -> Self {
        match kind {
            EdgeKind::DependsOn => Self::DependsOn,
            EdgeKind::DependsMs => Self::DependsMs,
            EdgeKind::WaitsFor => Self::WaitsFor,
            EdgeKind::After => Self::After,
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
