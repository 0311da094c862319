//! Randomized trials: generate a maze, plan links, search, record steps.
//!
//! Every trial owns its random generator, derived from the sweep's base
//! seed and the trial's position in the sweep. Results therefore do not
//! depend on how trials are scheduled, and a parallel sweep reproduces a
//! sequential one exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use warpmaze_core::{Bounds, Maze};
use warpmaze_paths::{LinkedMaze, NoTrace, PathRange, Search, SearchTrace};

use crate::config::{SampleConfig, SolveConfig};
use crate::error::{LabError, Result};
use crate::mapgen::{Entrances, MapGen};
use crate::planner::{LinkPlan, plan_links};
use crate::stats::Summary;

/// Everything produced by one trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    pub maze: Maze,
    pub plan: LinkPlan,
    pub search: Search,
}

impl Trial {
    pub fn outcome(&self) -> TrialOutcome {
        match self.search.moves() {
            Some(moves) => TrialOutcome::Solved {
                steps: self.search.steps,
                moves,
            },
            None => TrialOutcome::Unreachable {
                steps: self.search.steps,
            },
        }
    }
}

/// What a sweep records for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrialOutcome {
    Solved { steps: usize, moves: usize },
    /// The search exhausted its frontier. Kept out of the summary.
    Unreachable { steps: usize },
    /// Generation or planning failed; the trial produced no sample.
    Skipped,
}

/// Generate a maze of size `size`, place `links` links and solve it.
pub fn run_trial<R: Rng + ?Sized>(
    pr: &mut PathRange,
    size: usize,
    links: usize,
    entrances: Entrances,
    rng: &mut R,
) -> Result<Trial> {
    run_trial_traced(pr, size, links, entrances, rng, &mut NoTrace)
}

/// [`run_trial`] with the final linked search reported to `trace`. The
/// planner's baseline search is not traced.
pub fn run_trial_traced<R, T>(
    pr: &mut PathRange,
    size: usize,
    links: usize,
    entrances: Entrances,
    rng: &mut R,
    trace: &mut T,
) -> Result<Trial>
where
    R: Rng + ?Sized,
    T: SearchTrace + ?Sized,
{
    let maze = MapGen::new(&mut *rng).sized(size, entrances)?;
    let plan = plan_links(pr, &maze, links, rng)?;
    let search = pr.bfs_path_traced(
        &LinkedMaze::new(&maze, &plan.links),
        maze.start(),
        maze.end(),
        trace,
    );
    Ok(Trial { maze, plan, search })
}

/// Run the single trial described by `config`.
pub fn solve(config: &SolveConfig) -> Result<Trial> {
    solve_traced(config, &mut NoTrace)
}

/// [`solve`] with the final search reported to `trace`.
pub fn solve_traced<T>(config: &SolveConfig, trace: &mut T) -> Result<Trial>
where
    T: SearchTrace + ?Sized,
{
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let mut pr = PathRange::new(Bounds::default());
    run_trial_traced(
        &mut pr,
        config.size,
        config.links,
        config.entrances,
        &mut rng,
        trace,
    )
}

/// Seed for trial `rep` of sweep point `point` (SplitMix64 finaliser over
/// the combined inputs).
pub fn trial_seed(base: u64, point: usize, rep: usize) -> u64 {
    let mut z = base
        ^ (point as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)
        ^ (rep as u64).wrapping_mul(0xc2b2_ae3d_27d4_eb4f);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Aggregated results for one `(size, links)` sweep point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointReport {
    pub size: usize,
    pub links: usize,
    pub trials: usize,
    pub skipped: usize,
    pub unreachable: usize,
    /// Step counts of solved trials, in trial order.
    pub samples: Vec<usize>,
    pub summary: Option<Summary>,
}

impl PointReport {
    fn from_outcomes(size: usize, links: usize, outcomes: &[TrialOutcome]) -> Self {
        let mut samples = Vec::with_capacity(outcomes.len());
        let (mut skipped, mut unreachable) = (0, 0);
        for outcome in outcomes {
            match *outcome {
                TrialOutcome::Solved { steps, .. } => samples.push(steps),
                TrialOutcome::Unreachable { .. } => unreachable += 1,
                TrialOutcome::Skipped => skipped += 1,
            }
        }
        Self {
            size,
            links,
            trials: outcomes.len(),
            skipped,
            unreachable,
            summary: Summary::from_samples(&samples),
            samples,
        }
    }
}

/// Runs a validated [`SampleConfig`] sweep.
pub struct Sampler {
    config: SampleConfig,
}

impl Sampler {
    /// Validate `config` before any maze is generated.
    pub fn new(config: SampleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Run every sweep point in order.
    pub fn run(&self) -> Vec<PointReport> {
        self.config
            .points()
            .into_iter()
            .enumerate()
            .map(|(i, (size, links))| self.run_point(i, size, links))
            .collect()
    }

    /// Run all repetitions of sweep point number `point`.
    pub fn run_point(&self, point: usize, size: usize, links: usize) -> PointReport {
        let reps = self.config.repetitions;
        let outcomes: Vec<TrialOutcome> = if self.config.parallel {
            (0..reps)
                .into_par_iter()
                .map_init(
                    || PathRange::new(Bounds::default()),
                    |pr, rep| self.sample(pr, point, rep, size, links),
                )
                .collect()
        } else {
            let mut pr = PathRange::new(Bounds::default());
            (0..reps)
                .map(|rep| self.sample(&mut pr, point, rep, size, links))
                .collect()
        };
        let report = PointReport::from_outcomes(size, links, &outcomes);
        log::info!(
            "n={size} t={links}: {} solved, {} unreachable, {} skipped",
            report.samples.len(),
            report.unreachable,
            report.skipped
        );
        report
    }

    fn sample(
        &self,
        pr: &mut PathRange,
        point: usize,
        rep: usize,
        size: usize,
        links: usize,
    ) -> TrialOutcome {
        let mut rng = StdRng::seed_from_u64(trial_seed(self.config.seed, point, rep));
        match run_trial(pr, size, links, self.config.entrances, &mut rng) {
            Ok(trial) => {
                let outcome = trial.outcome();
                log::debug!("n={size} t={links} rep={rep}: {outcome:?}");
                outcome
            }
            Err(e @ LabError::InsufficientCells { .. }) => {
                log::warn!("n={size} t={links} rep={rep}: skipped: {e}");
                TrialOutcome::Skipped
            }
            Err(e) => {
                log::error!("n={size} t={links} rep={rep}: trial failed: {e}");
                TrialOutcome::Skipped
            }
        }
    }
}
