use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use warpmaze_lab::{Entrances, SampleConfig, SolveConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths through mazes with one-way teleportation links.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one maze, place links, and print the solution.
    Solve(SolveArgs),
    /// Run randomized trials and summarise step counts per sweep point.
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Maze size n; the maze has n/2 x n/2 logical cells.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub size: usize,

    /// Number of teleportation links t.
    #[arg(short = 't', long, default_value_t = 2)]
    pub links: usize,

    /// Seed for a reproducible maze; random when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Place start and end inside the maze instead of in the outer wall.
    #[arg(long)]
    pub inner_entrances: bool,

    /// Log every frontier push and pop at debug level.
    #[arg(long)]
    pub trace: bool,
}

impl SolveArgs {
    pub fn to_config(&self) -> SolveConfig {
        SolveConfig {
            size: self.size,
            links: self.links,
            seed: self.seed,
            entrances: entrances(self.inner_entrances),
        }
    }
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// JSON file with a sample configuration; flags override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maze sizes to sweep, comma separated.
    #[arg(short = 'n', long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Link counts to sweep, comma separated.
    #[arg(short = 't', long, value_delimiter = ',')]
    pub links: Option<Vec<usize>>,

    /// Trials per sweep point.
    #[arg(short, long)]
    pub reps: Option<usize>,

    /// Base seed.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Run trials on the current thread only.
    #[arg(long)]
    pub sequential: bool,

    #[arg(long)]
    pub inner_entrances: bool,

    /// Print reports as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl SampleArgs {
    /// Apply command-line overrides on top of `base`.
    pub fn apply(&self, mut base: SampleConfig) -> SampleConfig {
        if let Some(sizes) = &self.sizes {
            base.sizes = sizes.clone();
        }
        if let Some(links) = &self.links {
            base.links = links.clone();
        }
        if let Some(reps) = self.reps {
            base.repetitions = reps;
        }
        if let Some(seed) = self.seed {
            base.seed = seed;
        }
        if self.sequential {
            base.parallel = false;
        }
        if self.inner_entrances {
            base.entrances = entrances(true);
        }
        base
    }
}

fn entrances(inner: bool) -> Entrances {
    Entrances {
        start_outer: !inner,
        end_outer: !inner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_solve() {
        let cli = Cli::parse_from(["warpmaze", "solve", "-n", "20", "-t", "3", "--seed", "5"]);
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        let cfg = args.to_config();
        assert_eq!((cfg.size, cfg.links, cfg.seed), (20, 3, Some(5)));
        assert!(cfg.entrances.start_outer);
    }

    #[test]
    fn sample_flags_override_config() {
        let cli = Cli::parse_from([
            "warpmaze",
            "sample",
            "--sizes",
            "8,16",
            "--reps",
            "3",
            "--sequential",
        ]);
        let Command::Sample(args) = cli.command else {
            panic!("expected sample");
        };
        let cfg = args.apply(SampleConfig::default());
        assert_eq!(cfg.sizes, vec![8, 16]);
        assert_eq!(cfg.links, SampleConfig::default().links);
        assert_eq!(cfg.repetitions, 3);
        assert!(!cfg.parallel);
    }
}
