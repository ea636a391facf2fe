// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Adjacency Graph CLI
//!
//! Loads a graph description (the five-node example graph by default), then
//! explores it from a vertex or labels its connected components.

use adj_graph::{connected_components, explore_with, GraphConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Explore an unweighted undirected graph and count its connected components."
)]
struct Args {
    /// YAML graph description (`nodes` and `edges`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra edge, may be repeated: --edge 2 4
    #[arg(long = "edge", num_args = 2, value_names = ["I", "J"])]
    edges: Vec<usize>,

    /// Debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print which vertices are reachable from a start vertex
    Explore {
        #[arg(long, default_value_t = 0usize)]
        start: usize,

        /// Print the visited array after each vertex reached from the start,
        /// then the final array
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Print the component id of every vertex
    Components,
    /// Print the adjacency matrix
    Show,
    /// Print A^k, whose entry [i, j] counts the walks of length k from i to j
    Walks {
        #[arg(long, allow_negative_numbers = true)]
        length: i64,
    },
}

fn setup_simple_tracing(log_level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn as_flags(visited: &[bool]) -> Vec<u8> {
    visited.iter().map(|&v| u8::from(v)).collect()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    setup_simple_tracing(if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    });

    let extra: Vec<(usize, usize)> = args.edges.chunks(2).map(|e| (e[0], e[1])).collect();
    let config = GraphConfig::load(args.config.as_deref())
        .context("Could not load graph description")?
        .with_edges(extra);
    let graph = config.build().context("Could not build graph")?;
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "graph ready");

    match args.command {
        Command::Explore { start, trace } => {
            let mut visited = vec![false; graph.node_count()];
            let mut steps = Vec::new();
            explore_with(&graph, start, &mut visited, |v| steps.push(v))
                .with_context(|| format!("Could not explore from vertex {start}"))?;

            if trace {
                // The start vertex is marked without printing a row.
                let mut partial = vec![false; graph.node_count()];
                partial[start] = true;
                for &v in steps.iter().skip(1) {
                    partial[v] = true;
                    println!("{:?}", as_flags(&partial));
                }
            }
            println!("{:?}", as_flags(&visited));
        }
        Command::Components => {
            let components = connected_components(&graph)?;
            println!("{:?}", components.labels());
            info!(count = components.count(), "components labeled");
        }
        Command::Show => print!("{graph}"),
        Command::Walks { length } => {
            let walks = graph
                .adjacency()
                .map(u64::from)
                .try_checked_pow(length)
                .context("Could not count walks")?;
            print!("{walks}");
        }
    }

    Ok(())
}
