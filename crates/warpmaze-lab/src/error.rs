use warpmaze_core::GridError;

/// Errors raised while generating mazes, planning links or running trials.
///
/// An unreachable end is *not* an error: searches report it as an absent
/// path.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// Fewer than `needed` open cells lie off the baseline shortest path.
    #[error("need {needed} open cells off the shortest path, only {available} available")]
    InsufficientCells { needed: usize, available: usize },
    /// The maze has no path from start to end even without links.
    #[error("maze has no path from start to end")]
    Unsolvable,
    /// A size, link count or repetition count was rejected up front.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, LabError>;
