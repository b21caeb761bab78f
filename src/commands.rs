//! CLI command implementations

use anyhow::Context;
use netfog_core::{Graph, LayoutKind};
use netfog_io::{read_graph, read_matrix, write_artifact, write_graph};
use netfog_render::{render_graph, HtmlDocument, RenderConfig};
use std::path::{Path, PathBuf};

pub struct RenderArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: LayoutKind,
    pub seed: Option<u64>,
    pub override_positions: bool,
    pub config: Option<PathBuf>,
    pub open: bool,
}

fn load(path: &Path) -> anyhow::Result<Graph> {
    let graph = read_graph(path).with_context(|| format!("failed to read graph {}", path.display()))?;
    tracing::info!(
        "Loaded {}: {} nodes, {} connections",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}

pub fn render(args: RenderArgs) -> anyhow::Result<()> {
    let mut graph = load(&args.input)?;

    let config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load render config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    let layout = args.layout.build(args.seed);
    let svg = render_graph(&mut graph, layout.as_ref(), args.override_positions, &config)?;

    let contents = if is_html(&args.output) {
        let title = args
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("netfog");
        HtmlDocument::new(svg).with_title(title).render()?
    } else {
        svg
    };

    write_artifact(&args.output, &contents)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!("Rendered {}", args.output.display());

    if args.open {
        open::that(&args.output).with_context(|| format!("failed to open {}", args.output.display()))?;
    }
    Ok(())
}

pub fn stats(input: &Path, json: bool) -> anyhow::Result<()> {
    let graph = load(input)?;
    let summary = graph.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let ratio = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"));

    println!("nodes              {}", summary.node_count);
    println!("connections        {}", summary.edge_count);
    println!("total weight       {:.4}", summary.total_weight);
    println!("mean weight        {}", ratio(summary.mean_weight));
    println!("density            {}", ratio(summary.density));
    println!("directed density   {}", ratio(summary.directed_density));
    println!("average degree     {}", ratio(summary.average_degree));
    println!("directed avg deg   {}", ratio(summary.directed_average_degree));
    println!(
        "degree entropy     in {:.4}  out {:.4}  undirected {:.4}",
        summary.degree_entropy.in_entropy,
        summary.degree_entropy.out_entropy,
        summary.degree_entropy.undirected_entropy
    );

    if let Some(skewness) = summary.degree_skewness {
        println!(
            "degree skewness    in {:.4}  out {:.4}  undirected {:.4}",
            skewness.in_skewness, skewness.out_skewness, skewness.undirected_skewness
        );
    }

    if summary.node_count > 0 {
        println!();
        println!("{:<20} {:>4} {:>4} {:>6} {:>10}", "node", "in", "out", "total", "undirected");
        for (label, degrees) in graph.all_degrees() {
            println!(
                "{:<20} {:>4} {:>4} {:>6} {:>10}",
                label, degrees.in_degree, degrees.out_degree, degrees.total_degree, degrees.undirected_degree
            );
        }
    }
    Ok(())
}

pub fn convert(input: &Path, output: &Path, layout: LayoutKind, seed: Option<u64>) -> anyhow::Result<()> {
    let mut graph = load(input)?;
    let config = RenderConfig::default();

    write_graph(&mut graph, output, layout.build(seed).as_ref(), &config.canvas)
        .with_context(|| format!("failed to write graph {}", output.display()))?;
    tracing::info!("Converted {} -> {}", input.display(), output.display());
    Ok(())
}

pub fn from_matrix(
    matrix_path: &Path,
    output: &Path,
    directed: bool,
    labels: Option<Vec<String>>,
) -> anyhow::Result<()> {
    let matrix = read_matrix(matrix_path)
        .with_context(|| format!("failed to read matrix {}", matrix_path.display()))?;
    let mut graph = Graph::from_adjacency_matrix(&matrix, directed, labels)?;
    tracing::info!(
        "Built graph with {} nodes, {} connections",
        graph.node_count(),
        graph.edge_count()
    );

    let config = RenderConfig::default();
    write_graph(&mut graph, output, LayoutKind::default().build(None).as_ref(), &config.canvas)
        .with_context(|| format!("failed to write graph {}", output.display()))?;
    Ok(())
}
