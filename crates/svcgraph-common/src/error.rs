//! Unified error types for the svcgraph workspace.
//!
//! Most failure modes in this tool are deliberately non-fatal (unreadable
//! descriptors and bad scan targets degrade to diagnostics), so this enum
//! only covers the conditions that abort a command.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SvcgraphError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// The dependency graph contains a cycle, so no startup order exists.
    #[error("dependency cycle detected involving service \"{service}\"")]
    Cycle {
        /// A service that lies on the cycle.
        service: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_yaml::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SvcgraphError>;
