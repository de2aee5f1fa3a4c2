//! Configuration model for a graph run.
//!
//! A run can be described by an optional YAML file; command-line arguments
//! are layered on top with [`GraphConfig::merge_cli`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SvcgraphError};

/// Root configuration for a graph run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Directories scanned for service descriptors.
    pub directories: Vec<PathBuf>,
    /// Seed services restricting the graph. Empty means the whole graph.
    pub services: Vec<String>,
    /// Output destination. `None` or `-` means standard output.
    pub output: Option<PathBuf>,
}

impl GraphConfig {
    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    /// for this model.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path).map_err(|e| SvcgraphError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parses a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML for this model.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SvcgraphError::Config {
            message: e.to_string(),
        })
    }

    /// Overlays command-line values: non-empty lists and a present output
    /// replace what the file declared.
    #[must_use]
    pub fn merge_cli(
        mut self,
        directories: Vec<PathBuf>,
        services: Vec<String>,
        output: Option<PathBuf>,
    ) -> Self {
        if !directories.is_empty() {
            self.directories = directories;
        }
        if !services.is_empty() {
            self.services = services;
        }
        if output.is_some() {
            self.output = output;
        }
        self
    }

    /// Returns the directories to scan, falling back to the system service
    /// directories when none were configured.
    #[must_use]
    pub fn effective_directories(&self) -> Vec<PathBuf> {
        if self.directories.is_empty() {
            crate::constants::DEFAULT_SERVICE_DIRS
                .iter()
                .map(PathBuf::from)
                .collect()
        } else {
            self.directories.clone()
        }
    }

    /// Returns the output file, or `None` for standard output.
    #[must_use]
    pub fn output_file(&self) -> Option<&Path> {
        self.output
            .as_deref()
            .filter(|p| *p != Path::new(crate::constants::STDOUT_PATH))
    }
}
