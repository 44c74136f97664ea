//! Rope knot simulator
//!
//! Reads `R/L/U/D <count>` motion commands, drives a chain of knots and
//! prints how many distinct cells the last knot visited.
//!
//! Usage:
//!     rope_knots input.txt
//!     rope_knots input.txt --knots 10 --render
//!     rope_knots input.txt --both

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

use rope_knots::config::Config;
use rope_knots::grid::{render_chain, render_visited};
use rope_knots::run::read_lines;
use rope_knots::steps::parse_commands;
use rope_knots::{Chain, Result, RunReport, LONG_CHAIN, SHORT_CHAIN};

#[derive(Parser, Debug)]
#[command(name = "rope_knots")]
#[command(version)]
#[command(about = "Count the cells visited by the last knot of a rope", long_about = None)]
struct Cli {
    /// Command file, one "<R|L|U|D> <count>" per line (defaults to [input].path)
    input: Option<PathBuf>,

    /// Number of knots, head included (defaults to [simulation].knots)
    #[arg(short, long)]
    knots: Option<usize>,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Draw the chain after every command
    #[arg(long)]
    render: bool,

    /// Side length of the render window
    #[arg(long)]
    render_size: Option<u32>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print results for both the 2-knot and the 10-knot rope
    #[arg(long, conflicts_with = "knots")]
    both: bool,
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Command-line flags override the file
    if let Some(input) = cli.input {
        config.input.path = input;
    }
    if let Some(knots) = cli.knots {
        config.simulation.knots = knots;
    }
    if cli.render {
        config.render.enabled = true;
    }
    if let Some(size) = cli.render_size {
        config.render.size = size;
    }
    if let Some(report) = cli.report {
        config.report.enabled = true;
        config.report.path = report;
    }

    let lines = read_lines(&config.input.path)?;
    let commands = parse_commands(&lines)?;
    info!(path = %config.input.path.display(), commands = commands.len(), "commands loaded");

    let knot_counts = if cli.both {
        vec![SHORT_CHAIN, LONG_CHAIN]
    } else {
        vec![config.simulation.knots]
    };

    for knots in knot_counts {
        let start = config.simulation.start();
        let mut chain = Chain::new(knots, start)?;

        for command in &commands {
            chain.apply_steps(command.steps());
            if config.render.enabled {
                debug!(?command, "rendering");
                eprintln!("== {:?} {} ==", command.direction, command.count);
                eprintln!("{}", render_chain(&chain, start, config.render.size)?);
            }
        }
        if config.render.enabled {
            // Fitted window grows with the run, so refusal only skips the picture
            match render_visited(&chain, start) {
                Ok(picture) => eprintln!("== visited ==\n{picture}"),
                Err(e) => warn!("skipping visited render: {e}"),
            }
        }

        let visits = chain.count_tail_visits();
        info!(knots, steps = chain.steps_applied(), visits, "simulation finished");

        if cli.both {
            println!("{knots} knots: {visits}");
        } else {
            println!("{visits}");
        }

        if config.report.enabled {
            let report = RunReport::from_chain(&chain, start);
            let path = if cli.both {
                config.report.path.with_extension(format!("{knots}.json"))
            } else {
                config.report.path.clone()
            };
            report.save_to_file(&path)?;
            info!(path = %path.display(), "run report written");
        }
    }

    Ok(())
}
