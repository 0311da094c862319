use warpmaze_core::Coord;

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `c` into `buf`. The caller clears `buf` before calling.
    ///
    /// Implementations must be deterministic: the same `c` always yields the
    /// same neighbors in the same order.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}
