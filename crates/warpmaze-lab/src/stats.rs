//! Five-number summaries of step-count samples.

use std::fmt;

/// Minimum, quartiles and maximum of a sample.
///
/// Quartiles interpolate linearly between order statistics: the `p`
/// quantile of `n` sorted values sits at position `p * (n - 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl Summary {
    /// Summarise `samples`. Returns `None` for an empty slice.
    pub fn from_samples(samples: &[usize]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        Some(Self {
            count: sorted.len(),
            min: sorted[0] as f64,
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1] as f64,
        })
    }
}

/// Linear-interpolated quantile of a non-empty sorted slice.
fn quantile(sorted: &[usize], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] as f64 + (sorted[hi] as f64 - sorted[lo] as f64) * frac
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min {:.1}  q1 {:.1}  median {:.1}  q3 {:.1}  max {:.1}",
            self.min, self.q1, self.median, self.q3, self.max
        )
    }
}
