//! Run configuration for single solves and sampling sweeps.

use crate::error::{LabError, Result};
use crate::mapgen::{Entrances, check_size};

/// Configuration for a parameter sweep.
///
/// Every `(size, links)` combination is one sweep point; each point runs
/// `repetitions` independent trials.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SampleConfig {
    /// Maze sizes `n`; each maze has `n/2 × n/2` logical cells.
    pub sizes: Vec<usize>,
    /// Link counts `t`.
    pub links: Vec<usize>,
    pub repetitions: usize,
    /// Base seed; every trial derives its own generator from it.
    pub seed: u64,
    /// Spread trials over the rayon thread pool.
    pub parallel: bool,
    pub entrances: Entrances,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 20, 40],
            links: vec![0, 2],
            repetitions: 100,
            seed: 0,
            parallel: true,
            entrances: Entrances::default(),
        }
    }
}

impl SampleConfig {
    /// Reject configurations that would fail before any maze is generated.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() || self.links.is_empty() {
            return Err(LabError::InvalidDimensions(
                "sweep needs at least one size and one link count".into(),
            ));
        }
        self.sizes.iter().try_for_each(|&n| check_size(n))?;
        if self.repetitions == 0 {
            return Err(LabError::InvalidDimensions(
                "repetitions must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Sweep points in size-major order.
    pub fn points(&self) -> Vec<(usize, usize)> {
        self.sizes
            .iter()
            .flat_map(|&n| self.links.iter().map(move |&t| (n, t)))
            .collect()
    }
}

/// Configuration for one maze, solved once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveConfig {
    pub size: usize,
    pub links: usize,
    /// `None` seeds from the thread-local generator.
    pub seed: Option<u64>,
    pub entrances: Entrances,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            size: 10,
            links: 2,
            seed: None,
            entrances: Entrances::default(),
        }
    }
}

impl SolveConfig {
    pub fn validate(&self) -> Result<()> {
        check_size(self.size)
    }
}
