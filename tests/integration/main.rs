//! Integration tests for Netfog
//!
//! These tests drive the crates together and run the compiled binary.

use std::fs;
use std::path::Path;
use std::process::Command;

use netfog_core::{Canvas, CircularLayout, Graph, RandomLayout};
use netfog_io::{read_graph, write_graph};
use netfog_render::{render_graph, HtmlDocument, RenderConfig};
use tempfile::TempDir;

const MIXED_NET: &str = "\
*vertices 4
1 \"node1\"
2 \"node2\"
3 \"node3\"
4 \"node4\"
*edges
1 2 2
4 1 5.5
2 3 1.6
*arcs
3 4 4
3 2 1.2
";

fn netfog(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_netfog"))
        .args(args)
        .output()
        .expect("Failed to execute netfog")
}

fn write_fixture(dir: &Path) -> String {
    let path = dir.join("mixed.net");
    fs::write(&path, MIXED_NET).unwrap();
    path.to_string_lossy().into_owned()
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = netfog(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Weighted graph metrics and SVG rendering"));
    assert!(stdout.contains("render"));
    assert!(stdout.contains("from-matrix"));
}

#[test]
fn test_file_to_svg_pipeline() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path());

    let mut graph = read_graph(&input).unwrap();
    assert_eq!(graph.edge_count(), 5);
    assert!((graph.density(false).unwrap() - 5.0 / 12.0).abs() < 1e-9);

    let svg = render_graph(&mut graph, &CircularLayout, false, &RenderConfig::default()).unwrap();
    assert_eq!(svg.matches("<circle").count(), 4);
    assert_eq!(svg.matches("<line").count(), 7);
    assert_eq!(svg.matches("<text").count(), 4);

    let page = HtmlDocument::new(svg).render().unwrap();
    assert!(page.contains("<svg"));
    assert!(page.contains("<script>"));
}

#[test]
fn test_positions_survive_net_and_json() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path());
    let canvas = Canvas::default();

    let mut graph = read_graph(&input).unwrap();
    let net_path = dir.path().join("laid_out.net");
    write_graph(&mut graph, &net_path, &RandomLayout::seeded(5), &canvas).unwrap();

    let mut from_net = read_graph(&net_path).unwrap();
    let json_path = dir.path().join("laid_out.json");
    write_graph(&mut from_net, &json_path, &CircularLayout, &canvas).unwrap();

    let mut from_json = read_graph(&json_path).unwrap();
    assert_eq!(from_json.get_connections(), graph.get_connections());

    // cached coordinates win over the layout argument
    let expected = graph.resolve_positions(&CircularLayout, &canvas, false);
    let actual = from_json.resolve_positions(&CircularLayout, &canvas, false);
    for (label, position) in &expected {
        assert!((position.x - actual[label].x).abs() < 1e-6);
        assert!((position.y - actual[label].y).abs() < 1e-6);
        assert_eq!(position.index, actual[label].index);
    }
}

#[test]
fn test_matrix_graph_metrics() {
    let graph = Graph::from_adjacency_matrix(
        &[vec![0.0, 1.0], vec![1.0, 0.0]],
        false,
        Some(vec!["one".to_string(), "two".to_string()]),
    )
    .unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.compute_degrees("one").unwrap().undirected_degree, 2);
    assert_eq!(graph.density(true).unwrap(), 2.0 * graph.density(false).unwrap());
}

#[test]
fn test_cli_render_svg_and_html() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path());
    let svg_path = dir.path().join("out.svg");
    let html_path = dir.path().join("out.html");

    let output = netfog(&["render", &input, "-o", svg_path.to_str().unwrap(), "--layout", "circular"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("viewBox=\"20 20 1480 680\""));
    assert!(svg.contains("<marker id=\"marker\""));

    let output = netfog(&["render", &input, "-o", html_path.to_str().unwrap(), "--seed", "9"]);
    assert!(output.status.success());
    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>mixed</title>"));
}

#[test]
fn test_cli_render_with_config() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path());
    let config = dir.path().join("netfog.toml");
    fs::write(&config, "[style.node]\nfill_color = \"teal\"\n").unwrap();
    let svg_path = dir.path().join("out.svg");

    let output = netfog(&[
        "render",
        &input,
        "-o",
        svg_path.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&svg_path).unwrap().matches("fill=\"teal\"").count(), 4);
}

#[test]
fn test_cli_stats_json() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path());

    let output = netfog(&["stats", &input, "--json"]);
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["node_count"], 4);
    assert_eq!(summary["edge_count"], 5);
    let density = summary["density"].as_f64().unwrap();
    assert!((density - 5.0 / 12.0).abs() < 1e-9);
    let out_skewness = summary["degree_skewness"]["out_skewness"].as_f64().unwrap();
    assert!((out_skewness - 2.0 / 3.0_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_cli_stats_table() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path());

    let output = netfog(&["stats", &input]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("nodes              4"));
    assert!(stdout.contains("degree skewness"));
    assert!(stdout.contains("node3"));
}

#[test]
fn test_cli_convert_and_from_matrix() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path());
    let json_path = dir.path().join("mixed.json");

    let output = netfog(&["convert", &input, json_path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(read_graph(&json_path).unwrap().edge_count(), 5);

    let matrix = dir.path().join("matrix.json");
    fs::write(&matrix, "[[0, 2, 0], [0, 0, 3], [1, 0, 0]]").unwrap();
    let net_path = dir.path().join("cycle.net");
    let output = netfog(&[
        "from-matrix",
        matrix.to_str().unwrap(),
        "-o",
        net_path.to_str().unwrap(),
        "--directed",
        "--labels",
        "a,b,c",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let graph = read_graph(&net_path).unwrap();
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.get_connections().iter().all(|c| c.directed));
    assert_eq!(graph.compute_degrees("a").unwrap().out_degree, 1);
    assert!(graph.positions().is_some());
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = netfog(&["stats", dir.path().join("absent.net").to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read graph"));
}

#[test]
fn test_cli_rejects_unknown_layout() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path());
    let svg_path = dir.path().join("out.svg");

    let output = netfog(&["render", &input, "-o", svg_path.to_str().unwrap(), "--layout", "spring"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown layout: spring"));
    assert!(!svg_path.exists());
}

#[test]
fn test_cli_rejects_inverted_canvas() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path());
    let config = dir.path().join("netfog.toml");
    fs::write(&config, "[canvas]\nmin_x = 20.0\nmax_x = 10.0\n").unwrap();
    let svg_path = dir.path().join("out.svg");

    let output = netfog(&[
        "render",
        &input,
        "-o",
        svg_path.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid canvas"));
}
