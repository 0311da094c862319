//! Experiment utilities for teleport-link mazes: maze generation, link
//! planning, randomized trials and their statistics.

pub mod config;
pub mod error;
pub mod mapgen;
pub mod planner;
pub mod stats;
pub mod trials;

pub use config::{SampleConfig, SolveConfig};
pub use error::{LabError, Result};
pub use mapgen::{Entrances, MAX_SIZE, MapGen};
pub use planner::{LinkPlan, plan_links};
pub use stats::Summary;
pub use trials::{
    PointReport, Sampler, Trial, TrialOutcome, run_trial, run_trial_traced, solve, solve_traced,
};
