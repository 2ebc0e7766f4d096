use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bioforce::category::{Category, classify};
use bioforce::engine::NetworkEngine;
use bioforce::filter::FilterThresholds;
use bioforce::graph::NetworkGraph;
use bioforce::parser::load_graph;
use bioforce::simulation::SimulationConfig;

/// A force-directed layout engine for biological interaction networks.
#[derive(Parser)]
#[command(name = "bioforce")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a graph description: counts, degrees, categories
    Stats {
        /// Input graph description file
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Run the simulation to convergence and export the scene as JSON
    Layout {
        /// Input graph description file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the scene JSON (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum edge weight kept visible (inclusive)
        #[arg(long, default_value_t = 0.0)]
        weight_threshold: f32,

        /// Nodes must exceed this degree to stay visible
        #[arg(long, default_value_t = 0)]
        degree_threshold: i32,

        /// Canvas width in pixels
        #[arg(long, default_value_t = 960.0)]
        width: f32,

        /// Canvas height in pixels
        #[arg(long, default_value_t = 600.0)]
        height: f32,

        /// Safety cap on simulation steps
        #[arg(long, default_value_t = 1000)]
        max_steps: usize,

        /// Include the label sub-layer in the export
        #[arg(long)]
        show_labels: bool,
    },
}

fn stats(input: &Path) -> anyhow::Result<()> {
    let graph = load_graph(input)
        .with_context(|| format!("loading graph description {}", input.display()))?;

    println!("nodes: {}", graph.nodes.len());
    println!("edges: {}", graph.edges.len());

    if let Some(hub) = graph.nodes.iter().max_by_key(|n| n.degree) {
        println!("highest degree: {} ({})", hub.degree, hub.id);
    }

    let mut counts: HashMap<Category, usize> = HashMap::new();
    for node in &graph.nodes {
        *counts.entry(classify(&node.id)).or_insert(0) += 1;
    }
    println!("categories:");
    for category in Category::ALL {
        let count = counts.get(&category).copied().unwrap_or(0);
        println!("  {:<22} {}", category.name(), count);
    }
    Ok(())
}

fn layout(
    input: &Path,
    output: Option<&Path>,
    thresholds: FilterThresholds,
    config: SimulationConfig,
    max_steps: usize,
    show_labels: bool,
) -> anyhow::Result<()> {
    let graph: NetworkGraph = load_graph(input)
        .with_context(|| format!("loading graph description {}", input.display()))?;

    let mut engine = NetworkEngine::new(graph, thresholds, config);
    engine.set_show_labels(show_labels);
    let steps = engine.run_to_convergence(max_steps);
    let scene = engine.scene();

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(file), &scene)?;
            println!(
                "Laid out {} nodes and {} edges in {} steps into {}",
                scene.nodes.len(),
                scene.edges.len(),
                steps,
                path.display()
            );
        }
        None => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &scene)?;
            println!();
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Stats { input } => stats(&input)?,
        Commands::Layout {
            input,
            output,
            weight_threshold,
            degree_threshold,
            width,
            height,
            max_steps,
            show_labels,
        } => {
            let thresholds = FilterThresholds {
                weight_threshold,
                degree_threshold,
            };
            let config = SimulationConfig {
                width,
                height,
                ..SimulationConfig::default()
            };
            layout(
                &input,
                output.as_deref(),
                thresholds,
                config,
                max_steps,
                show_labels,
            )?;
        }
    }
    Ok(())
}
