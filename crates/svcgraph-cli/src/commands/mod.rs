//! CLI command definitions and dispatch.

pub mod dangling;
pub mod dot;
pub mod plan;
pub mod yaml;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use svcgraph_common::config::GraphConfig;
use svcgraph_service::graph::ServiceGraph;

/// svcgraph: render supervisor service dependency graphs.
#[derive(Parser, Debug)]
#[command(name = "svcgraph", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// YAML configuration file providing directories, services, and output.
    #[arg(long, global = true, env = "SVCGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level used when `RUST_LOG` is not set.
    #[must_use]
    pub const fn default_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the dependency graph in Graphviz DOT format.
    Dot(dot::DotArgs),
    /// Render the dependency graph as a YAML view document.
    Yaml(yaml::YamlArgs),
    /// List services in startup order, dependencies first.
    Plan(plan::PlanArgs),
    /// List referenced services that have no descriptor.
    Dangling(dangling::DanglingArgs),
}

/// Arguments shared by every command.
#[derive(Args, Debug, Default)]
pub struct GraphArgs {
    /// Directories to scan for service descriptors (non-recursive).
    #[arg(short, long = "directories", value_name = "DIR", num_args = 1..)]
    pub directories: Vec<PathBuf>,

    /// Services to focus on; only they and their dependencies are kept.
    #[arg(short, long = "services", value_name = "SERVICE", num_args = 1..)]
    pub services: Vec<String>,

    /// Output file (default: stdout, `-` also means stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GraphArgs {
    /// Resolves the effective configuration: file values overlaid with
    /// command-line values.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded.
    pub fn resolve(self, config_file: Option<&std::path::Path>) -> anyhow::Result<GraphConfig> {
        let base = match config_file {
            Some(path) => GraphConfig::from_yaml_file(path)?,
            None => GraphConfig::default(),
        };
        Ok(base.merge_cli(self.directories, self.services, self.output))
    }
}

/// Scans the configured directories and builds the full graph.
#[must_use]
pub fn load_graph(config: &GraphConfig) -> ServiceGraph {
    let directories = config.effective_directories();
    tracing::info!(directories = directories.len(), "scanning service directories");
    let files = svcgraph_service::scan::collect_service_files(&directories);
    svcgraph_service::graph::build_graph(&files)
}

/// Builds the graph and narrows it to the configured services, if any.
#[must_use]
pub fn load_filtered_graph(config: &GraphConfig) -> ServiceGraph {
    let graph = load_graph(config);
    if config.services.is_empty() {
        graph
    } else {
        svcgraph_service::filter::filter_graph(&graph, &config.services)
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config_file = cli.config.as_deref();
    match cli.command {
        Command::Dot(args) => dot::execute(args.graph.resolve(config_file)?),
        Command::Yaml(args) => yaml::execute(args.graph.resolve(config_file)?),
        Command::Plan(args) => plan::execute(args.graph.resolve(config_file)?),
        Command::Dangling(args) => dangling::execute(args.graph.resolve(config_file)?),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_multiple_directories_and_services() {
        let cli = Cli::try_parse_from([
            "svcgraph", "dot", "-d", "/etc/dinit.d", "/lib/dinit.d", "-s", "boot", "net",
        ])
        .expect("parse");
        let Command::Dot(args) = cli.command else {
            panic!("expected dot command");
        };
        assert_eq!(args.graph.directories.len(), 2);
        assert_eq!(args.graph.services, vec!["boot", "net"]);
    }

    #[test]
    fn verbosity_raises_log_level() {
        let cli = Cli::try_parse_from(["svcgraph", "-vv", "plan"]).expect("parse");
        assert_eq!(cli.default_log_level(), "debug");
    }

    #[test]
    fn config_file_is_overlaid_by_arguments() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("svcgraph.yaml");
        std::fs::write(&path, "directories: [/a]\nservices: [x]\n").expect("write");

        let args = GraphArgs {
            services: vec!["y".into()],
            ..GraphArgs::default()
        };
        let config = args.resolve(Some(&path)).expect("resolve");
        assert_eq!(config.directories, vec![PathBuf::from("/a")]);
        assert_eq!(config.services, vec!["y"]);
    }

    #[test]
    fn filtered_graph_keeps_only_closure() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("a"), "depends-on = b\n").expect("write");
        std::fs::write(dir.path().join("c"), "depends-on = a\n").expect("write");

        let config = GraphConfig {
            directories: vec![dir.path().to_path_buf()],
            services: vec!["a".into()],
            output: None,
        };
        let graph = load_filtered_graph(&config);
        assert!(graph.contains("a"));
        assert!(graph.contains("b"));
        assert!(!graph.contains("c"));
    }
}
