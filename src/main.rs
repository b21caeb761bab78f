//! Netfog CLI entry point

use clap::{Parser, Subcommand};
use netfog_core::LayoutKind;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "netfog")]
#[command(about = "Weighted graph metrics and SVG rendering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a graph file as SVG, or as an interactive HTML page
    Render {
        /// Graph file (.net or .json)
        input: PathBuf,

        /// Output file (.svg or .html)
        #[arg(short, long)]
        output: PathBuf,

        /// Layout used when the graph has no coordinates (random, circular)
        #[arg(short, long, default_value = "random")]
        layout: LayoutKind,

        /// Seed for the random layout
        #[arg(long)]
        seed: Option<u64>,

        /// Ignore coordinates stored in the input
        #[arg(long)]
        override_positions: bool,

        /// Render config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Open the result in the default viewer
        #[arg(long)]
        open: bool,
    },
    /// Print graph metrics
    Stats {
        /// Graph file (.net or .json)
        input: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Convert between .net and .json
    Convert {
        input: PathBuf,
        output: PathBuf,

        /// Layout used when the target format needs coordinates (random, circular)
        #[arg(short, long, default_value = "random")]
        layout: LayoutKind,

        #[arg(long)]
        seed: Option<u64>,
    },
    /// Build a graph from a JSON adjacency matrix
    FromMatrix {
        /// JSON array of rows
        matrix: PathBuf,

        /// Output graph file (.net or .json)
        #[arg(short, long)]
        output: PathBuf,

        /// Treat every nonzero cell as an arc
        #[arg(long)]
        directed: bool,

        /// Comma-separated node labels, one per row
        #[arg(long, value_delimiter = ',')]
        labels: Option<Vec<String>>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "netfog={log_level},netfog_core={log_level},netfog_render={log_level},netfog_io={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Netfog v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Render {
            input,
            output,
            layout,
            seed,
            override_positions,
            config,
            open,
        } => commands::render(commands::RenderArgs {
            input,
            output,
            layout,
            seed,
            override_positions,
            config,
            open,
        }),
        Commands::Stats { input, json } => commands::stats(&input, json),
        Commands::Convert {
            input,
            output,
            layout,
            seed,
        } => commands::convert(&input, &output, layout, seed),
        Commands::FromMatrix {
            matrix,
            output,
            directed,
            labels,
        } => commands::from_matrix(&matrix, &output, directed, labels),
    }
}
