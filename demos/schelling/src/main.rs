//! schelling — command-line runner for the Schelling segregation simulator.
//!
//! Loads a text grid, reports the index of dissimilarity, runs the
//! simulation to convergence or the iteration cap, reports the index again,
//! and prints a subregion of the final grid.
//!
//! ```text
//! cargo run -p schelling -- demos/schelling/data/town.txt 0 0 3 5 0.5 --seed 7
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use sg_core::{Bounds, SimConfig, SimRng};
use sg_io::{LineTrim, LoadOptions, load_grid_path, write_grid, write_subregion};
use sg_output::{CsvWriter, SimOutputObserver};
use sg_sim::{NoopObserver, SimBuilder, SimOutcome, index_of_dissimilarity};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "schelling",
    version,
    about = "Run a Schelling segregation simulation over a text grid"
)]
struct Cli {
    /// Path to the data grid file ('X', 'O', and ' ' cells, one row per line).
    file_path: PathBuf,
    /// Start row of the subregion printed after the simulation.
    start_row: usize,
    /// Start column of the subregion.
    start_col: usize,
    /// End row of the subregion (inclusive).
    end_row: usize,
    /// End column of the subregion (inclusive).
    end_col: usize,
    /// Minimum fraction of same-type neighbors for an agent to be satisfied.
    similarity_threshold: f64,

    /// RNG seed.  A random seed is drawn (and logged) when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the iteration cap (default: rows × columns).
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Reject ragged grids, unknown symbols, and thresholds outside [0, 1].
    #[arg(long)]
    strict: bool,

    /// Strip leading/trailing whitespace from each input line.
    #[arg(long)]
    trim_whitespace: bool,

    /// Directory for per-iteration CSV output.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Write a JSON run summary to this file.
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

// ── Run summary ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RunSummary {
    config:               SimConfig,
    rows:                 usize,
    columns:              usize,
    dissimilarity_before: f64,
    dissimilarity_after:  f64,
    outcome:              SimOutcome,
    elapsed_secs:         f64,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut out = io::stdout().lock();

    // 1. Load the grid.
    println!("START: Loading data grid.");
    let options = LoadOptions {
        trim:   if cli.trim_whitespace { LineTrim::Whitespace } else { LineTrim::Terminator },
        strict: cli.strict,
    };
    let grid = load_grid_path(&cli.file_path, &options)
        .with_context(|| format!("loading grid from {}", cli.file_path.display()))?;
    println!("DONE: Loading data grid.\n");

    let (rows, columns) = grid.dimensions();
    println!("Grid dimensions:");
    println!(" > Row count: {rows}");
    println!(" > Column count: {columns}\n");

    println!("START: Printing data contents.");
    write_grid(&mut out, &grid)?;
    println!("DONE: Printing data contents.\n");

    // 2. Metric before.
    println!("START: Computing Index of Dissimilarity.");
    let before = index_of_dissimilarity(&grid);
    println!("Index of Dissimilarity = {before}");
    println!("DONE: Computing Index of Dissimilarity.\n");

    // 3. Build the sim.
    let seed = cli.seed.unwrap_or_else(|| SimRng::from_entropy().gen_range(0..u64::MAX));
    let config = SimConfig {
        threshold:      cli.similarity_threshold,
        seed,
        max_iterations: cli.max_iterations,
    };
    info!(seed, threshold = config.threshold, "configured run");

    let mut sim = SimBuilder::new(config.clone(), grid)
        .strict(cli.strict)
        .build()?;

    // 4. Run.
    println!("START: Simulation of Schelling segregation.");
    let t0 = Instant::now();
    let outcome = match &cli.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
            let outcome = sim.run(&mut obs);
            if let Some(e) = obs.take_error() {
                warn!(error = %e, "iteration output incomplete");
            }
            outcome
        }
        None => sim.run(&mut NoopObserver),
    };
    let elapsed = t0.elapsed();
    write_grid(&mut out, &sim.grid)?;
    println!("DONE: Simulation of Schelling segregation.\n");

    println!(
        "{:?} after {} relocation passes ({} moves, {} stalled) in {:.3} s\n",
        outcome.termination,
        outcome.relocation_passes,
        outcome.moves,
        outcome.stalled_moves,
        elapsed.as_secs_f64(),
    );

    // 5. Metric after.
    let after = sim.dissimilarity();
    println!("Index of Dissimilarity:");
    println!("Index of Dissimilarity = {after}\n");

    // 6. Final subregion.
    println!("START: Printing final subregion.");
    let bounds = Bounds::new(cli.start_row, cli.start_col, cli.end_row, cli.end_col);
    write_subregion(&mut out, &sim.grid, bounds)?;
    println!("DONE: Printing final subregion.");

    // 7. Optional JSON summary.
    if let Some(path) = &cli.summary_json {
        let summary = RunSummary {
            config,
            rows,
            columns,
            dissimilarity_before: before,
            dissimilarity_after:  after,
            outcome,
            elapsed_secs:         elapsed.as_secs_f64(),
        };
        let file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &summary)?;
        info!(path = %path.display(), "wrote run summary");
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
