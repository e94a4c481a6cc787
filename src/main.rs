//! Larmor demo: build, fill, and persist a histogram and a graph.

use anyhow::Result;
use clap::Parser;
use larmor::engine::{Axis, FileMode};
use larmor::{Graph, HistKind, Histogram};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "larmor")]
#[command(about = "Build and persist a sample histogram and graph", long_about = None)]
struct Args {
    /// Directory to write the output containers into
    #[arg(default_value = ".")]
    out_dir: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Larmor");
    }

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    if args.log.is_some() {
        tracing::info!("Larmor exited");
    }

    Ok(())
}

fn run(args: &Args) -> Result<()> {
    // Create a 1D histogram and fill it
    let mut h1 = Histogram::new(
        HistKind::OneDimensional,
        "h1",
        "Sample Histogram",
        Axis::new(50, 0.0, 10.0),
        None,
    )?;
    for i in 0..100 {
        h1.fill(f64::from(i) / 10.0);
    }
    h1.save_to_file(args.out_dir.join("hist.json"), FileMode::Recreate)?;

    // Create a basic graph
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];

    let mut graph = Graph::new(x, y)?;
    graph.set_title("Linear Graph");
    graph.set_axis_titles("X", "Y");
    graph.save_to_file(args.out_dir.join("graph.json"), FileMode::Recreate)?;

    println!("Histogram and Graph saved successfully.");

    Ok(())
}
