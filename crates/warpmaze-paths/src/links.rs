use std::collections::BTreeMap;
use std::fmt;

use warpmaze_core::Coord;

/// One-way teleportation links: a mapping from entrance to exit.
///
/// Entrances are unique. Several entrances may share an exit, and an exit
/// may sit next to another link's entrance; neither case needs special
/// handling because a link is applied at most once per neighbor lookup.
///
/// Iteration is ordered by entrance (row-major), so printing and
/// serialising a `Links` value is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<(Coord, Coord)>", into = "Vec<(Coord, Coord)>")
)]
pub struct Links {
    map: BTreeMap<Coord, Coord>,
}

impl Links {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link. Returns the previous exit if `entrance` was already
    /// linked.
    pub fn insert(&mut self, entrance: Coord, exit: Coord) -> Option<Coord> {
        self.map.insert(entrance, exit)
    }

    /// The exit for `entrance`, if it is one.
    #[inline]
    pub fn exit_of(&self, entrance: Coord) -> Option<Coord> {
        self.map.get(&entrance).copied()
    }

    /// `c` rewritten through its link, or `c` itself.
    #[inline]
    pub fn resolve(&self, c: Coord) -> Coord {
        self.exit_of(c).unwrap_or(c)
    }

    #[inline]
    pub fn is_entrance(&self, c: Coord) -> bool {
        self.map.contains_key(&c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// `(entrance, exit)` pairs ordered by entrance.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.map.iter().map(|(&a, &b)| (a, b))
    }

    pub fn entrances(&self) -> impl Iterator<Item = Coord> + '_ {
        self.map.keys().copied()
    }
}

impl FromIterator<(Coord, Coord)> for Links {
    fn from_iter<I: IntoIterator<Item = (Coord, Coord)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(Coord, Coord)>> for Links {
    fn from(pairs: Vec<(Coord, Coord)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<Links> for Vec<(Coord, Coord)> {
    fn from(links: Links) -> Self {
        links.map.into_iter().collect()
    }
}

impl fmt::Display for Links {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (a, b)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{a} -> {b}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_rewrites_entrances_only() {
        let mut links = Links::new();
        links.insert(Coord::new(1, 1), Coord::new(4, 4));
        assert_eq!(links.resolve(Coord::new(1, 1)), Coord::new(4, 4));
        assert_eq!(links.resolve(Coord::new(4, 4)), Coord::new(4, 4));
        assert!(links.is_entrance(Coord::new(1, 1)));
        assert!(!links.is_entrance(Coord::new(4, 4)));
    }

    #[test]
    fn insert_replaces_existing_entrance() {
        let mut links = Links::new();
        assert_eq!(links.insert(Coord::new(0, 0), Coord::new(1, 1)), None);
        assert_eq!(
            links.insert(Coord::new(0, 0), Coord::new(2, 2)),
            Some(Coord::new(1, 1))
        );
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn shared_exits_are_allowed() {
        let links: Links = [
            (Coord::new(0, 0), Coord::new(5, 5)),
            (Coord::new(1, 0), Coord::new(5, 5)),
        ]
        .into_iter()
        .collect();
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn display_is_ordered() {
        let links: Links = [
            (Coord::new(2, 0), Coord::new(0, 0)),
            (Coord::new(0, 1), Coord::new(3, 3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(links.to_string(), "{(0, 1) -> (3, 3), (2, 0) -> (0, 0)}");
        assert_eq!(Links::new().to_string(), "{}");
    }
}
