//! End-to-end tests: descriptor files on disk through scanning, graph
//! construction, filtering, and both renderers.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use svcgraph_common::types::{EdgeKind, ServiceType};
use svcgraph_render::dot::render_dot;
use svcgraph_render::yaml::render_yaml;
use svcgraph_service::filter::filter_graph;
use svcgraph_service::graph::{Edge, NodeInfo, ServiceGraph, build_graph};
use svcgraph_service::scan::collect_service_files;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write descriptor");
}

fn load(dir: &Path) -> ServiceGraph {
    let files = collect_service_files(&[dir.to_path_buf()]);
    build_graph(&files)
}

// ── Scenario A: direct dependency ───────────────────────────────────

#[test]
fn direct_dependency_between_two_services() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "foo", "type = process\ndepends-on = bar\n");
    write(dir.path(), "bar", "type = scripted\n");

    let graph = load(dir.path());
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(
        graph
            .edges()
            .contains(&Edge::new("foo", "bar", EdgeKind::DependsOn))
    );

    let dot = render_dot(&graph);
    assert!(dot.contains("\"foo\" -> \"bar\" [arrowhead=\"normal\"];"));
    assert!(dot.contains("\"bar\" [label=\"bar\", fillcolor=\"lightyellow\""));
}

// ── Scenario B: directory dependency ────────────────────────────────

#[test]
fn directory_dependency_expands_to_unknown_nodes() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "foo", "depends-on.d = deps.d\n");
    let deps = dir.path().join("deps.d");
    std::fs::create_dir(&deps).expect("mkdir");
    write(&deps, "a", "");
    write(&deps, "b", "");

    let graph = load(dir.path());
    assert!(
        graph
            .edges()
            .contains(&Edge::new("foo", "a", EdgeKind::DependsOn))
    );
    assert!(
        graph
            .edges()
            .contains(&Edge::new("foo", "b", EdgeKind::DependsOn))
    );
    assert_eq!(graph.node("a"), Some(&NodeInfo::UNKNOWN));
    assert_eq!(graph.node("b"), Some(&NodeInfo::UNKNOWN));
    // The subdirectory itself is not a descriptor.
    assert!(!graph.contains("deps.d"));
}

// ── Scenario C: before edges and filtering ──────────────────────────

#[test]
fn before_edge_is_reversed_and_followed_by_filter() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "foo", "before = bar\n");
    write(dir.path(), "bar", "type = internal\n");
    write(dir.path(), "unrelated", "depends-on = bar\n");

    let graph = load(dir.path());
    assert!(
        graph
            .edges()
            .contains(&Edge::new("bar", "foo", EdgeKind::After))
    );

    let filtered = filter_graph(&graph, &["bar"]);
    let names: Vec<&str> = filtered.nodes().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["bar", "foo"]);

    let dot = render_dot(&filtered);
    assert!(dot.contains("\"bar\" -> \"foo\" [arrowhead=\"tee\"];"));
    assert!(!dot.contains("unrelated"));
}

// ── Scenario D: parametric services ─────────────────────────────────

#[test]
fn parametric_service_display_label() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "foo@", "command = /bin/run $1\nwaits-for = bar\n");
    write(dir.path(), "bar", "type = bgprocess\n");

    let graph = load(dir.path());
    assert_eq!(graph.node("foo").map(|n| n.has_parameters), Some(true));
    assert_eq!(
        graph.node("bar").map(|n| n.service_type),
        Some(ServiceType::BgProcess)
    );

    let yaml = render_yaml(&graph, &["foo"]).expect("render");
    let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).expect("valid yaml");

    let foo = doc["nodes"]
        .as_sequence()
        .expect("nodes")
        .iter()
        .find(|n| n["id"][1].as_str() == Some("foo"))
        .expect("foo node");
    assert_eq!(foo["id"][0].as_str(), Some("foo@"));

    let link = &doc["edges"][0]["link"];
    assert_eq!(link[0].as_str(), Some("foo"));
    assert_eq!(link[1].as_str(), Some("bar"));
    assert_eq!(doc["views"].as_sequence().map(Vec::len), Some(2));
}

// ── Properties ──────────────────────────────────────────────────────

#[test]
fn no_edge_references_a_missing_node() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "boot",
        "type = internal\ndepends-on = system-init\nwaits-for = tty@1 net.d\nbefore = login\n",
    );
    write(dir.path(), "system-init", "type = scripted\nafter = early\n");
    let net = dir.path().join("net");
    std::fs::create_dir(&net).expect("mkdir");
    write(&net, "dhcpcd@eth0", "");
    write(&net, ".hidden", "");

    let graph = load(dir.path());
    for edge in graph.edges() {
        assert!(graph.contains(&edge.source));
        assert!(graph.contains(&edge.target));
    }
    assert!(
        graph
            .edges()
            .contains(&Edge::new("boot", "dhcpcd", EdgeKind::WaitsFor))
    );
    assert!(
        graph
            .edges()
            .contains(&Edge::new("boot", "tty", EdgeKind::WaitsFor))
    );
    assert!(!graph.contains(".hidden"));
}

#[test]
fn rendering_twice_is_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "a", "depends-on = b c\nwaits-for = d\n");
    write(dir.path(), "b", "depends-ms = c\nbefore = a\n");
    write(dir.path(), "c", "after = d\n");

    let graph = load(dir.path());
    assert_eq!(render_dot(&graph), render_dot(&graph));
    assert_eq!(
        render_yaml(&graph, &["a"]).expect("yaml"),
        render_yaml(&graph, &["a"]).expect("yaml")
    );
}

#[test]
fn unreadable_descriptor_still_appears_as_node() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("binary"), [0xc3, 0x28, 0xff]).expect("write");
    write(dir.path(), "ok", "depends-on = binary\n");

    let graph = load(dir.path());
    assert_eq!(
        graph.node("binary").map(|n| n.service_type),
        Some(ServiceType::Process)
    );
    assert_eq!(graph.edge_count(), 1);
}
