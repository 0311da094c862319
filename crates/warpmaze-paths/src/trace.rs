//! Observation hooks for a running search.

use warpmaze_core::Coord;

/// Callbacks invoked by [`PathRange::bfs_path_traced`](crate::PathRange::bfs_path_traced).
///
/// Every method has an empty default body, so an implementation only
/// overrides what it cares about.
pub trait SearchTrace {
    /// `at` was enqueued, reached from `from` (`None` for the root).
    fn on_enqueue(&mut self, _at: Coord, _from: Option<Coord>) {}

    /// `at` was popped from the frontier; `step` counts pops from 1.
    fn on_pop(&mut self, _at: Coord, _step: usize) {}

    /// The search terminated.
    fn on_finish(&mut self, _path: Option<&[Coord]>, _steps: usize) {}
}

/// A trace that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl SearchTrace for NoTrace {}

/// One recorded search event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceEvent {
    Enqueue { at: Coord, from: Option<Coord> },
    Pop { at: Coord, step: usize },
    Finish { found: bool, steps: usize },
}

/// A trace that stores every event, for tests and offline inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingTrace {
    pub events: Vec<TraceEvent>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Popped cells in pop order.
    pub fn pops(&self) -> Vec<Coord> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Pop { at, .. } => Some(*at),
                _ => None,
            })
            .collect()
    }
}

impl SearchTrace for RecordingTrace {
    fn on_enqueue(&mut self, at: Coord, from: Option<Coord>) {
        self.events.push(TraceEvent::Enqueue { at, from });
    }

    fn on_pop(&mut self, at: Coord, step: usize) {
        self.events.push(TraceEvent::Pop { at, step });
    }

    fn on_finish(&mut self, path: Option<&[Coord]>, steps: usize) {
        self.events.push(TraceEvent::Finish {
            found: path.is_some(),
            steps,
        });
    }
}

/// A trace that forwards events to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl SearchTrace for LogTrace {
    fn on_enqueue(&mut self, at: Coord, from: Option<Coord>) {
        match from {
            Some(from) => log::debug!("enqueue {at} from {from}"),
            None => log::debug!("enqueue {at} (root)"),
        }
    }

    fn on_pop(&mut self, at: Coord, step: usize) {
        log::debug!("pop #{step} {at}");
    }

    fn on_finish(&mut self, path: Option<&[Coord]>, steps: usize) {
        match path {
            Some(p) => log::debug!("found path of {} cells after {steps} pops", p.len()),
            None => log::debug!("frontier exhausted after {steps} pops"),
        }
    }
}
