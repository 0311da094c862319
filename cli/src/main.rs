//! warpmaze — solve and sample teleport-link mazes.

mod cli;
mod error;
mod logging;

use std::fs;

use clap::Parser;
use warpmaze_core::Coord;
use warpmaze_lab::{PointReport, SampleConfig, Sampler, trials};
use warpmaze_paths::LogTrace;

use cli::{Cli, Command, SampleArgs, SolveArgs};
use error::CliError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let verbose = matches!(&cli.command, Command::Solve(args) if args.trace);
    logging::init(verbose);

    match cli.command {
        Command::Solve(args) => solve(&args)?,
        Command::Sample(args) => sample(&args)?,
    }
    Ok(())
}

fn solve(args: &SolveArgs) -> Result<(), CliError> {
    let config = args.to_config();
    let trial = if args.trace {
        trials::solve_traced(&config, &mut LogTrace)?
    } else {
        trials::solve(&config)?
    };
    let maze = &trial.maze;
    let links = &trial.plan.links;

    print!("{maze}");
    println!("teleportation links {links}");

    let Some(path) = &trial.search.path else {
        return Err(CliError::NoSolution {
            steps: trial.search.steps,
        });
    };

    println!();
    print!("{}", maze.render_overlay(path, links.iter()));
    println!();
    print_path(path);
    println!(
        "steps: {}  moves: {}  baseline moves: {}",
        trial.search.steps,
        path.len() - 1,
        trial.plan.baseline.len().saturating_sub(1)
    );
    Ok(())
}

fn print_path(path: &[Coord]) {
    for c in path {
        println!("{c}");
    }
}

fn load_config(args: &SampleArgs) -> Result<SampleConfig, CliError> {
    let Some(path) = &args.config else {
        return Ok(args.apply(SampleConfig::default()));
    };
    let text = fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
        path: path.clone(),
        source,
    })?;
    let base: SampleConfig =
        serde_json::from_str(&text).map_err(|source| CliError::ConfigJson {
            path: path.clone(),
            source,
        })?;
    Ok(args.apply(base))
}

fn sample(args: &SampleArgs) -> Result<(), CliError> {
    let config = load_config(args)?;
    let sampler = Sampler::new(config)?;
    log::info!(
        "sampling {} points x {} trials (seed {})",
        sampler.config().points().len(),
        sampler.config().repetitions,
        sampler.config().seed
    );
    let reports = sampler.run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", format_report(report));
        }
    }
    Ok(())
}

fn format_report(r: &PointReport) -> String {
    let head = format!(
        "n={:<4} t={:<3} trials={} skipped={} unreachable={}",
        r.size, r.links, r.trials, r.skipped, r.unreachable
    );
    match &r.summary {
        Some(s) => format!("{head}  {s}"),
        None => format!("{head}  no samples"),
    }
}
