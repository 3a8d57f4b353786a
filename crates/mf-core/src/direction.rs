//! Cardinal directions shared by the mesh resolver, the network builder and
//! the flow aggregator.

/// One of the four sides of a grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Boundary order used for node layout: N, S, E, W.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Position of this side within [`Direction::ALL`].
    #[inline]
    pub fn ordinal(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East  => 2,
            Direction::West  => 3,
        }
    }

    /// The side facing this one across a shared cell edge.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East  => Direction::West,
            Direction::West  => Direction::East,
        }
    }

    /// Unit step `(dy, dx)` on the mesh axes.  North and east are positive.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East  => (0, 1),
            Direction::West  => (0, -1),
        }
    }

    /// Lower-case single-letter label (`n`, `s`, `e`, `w`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East  => "e",
            Direction::West  => "w",
        }
    }

    /// Label of the cell edge this side sits on, as seen on a map.
    pub fn edge_label(self) -> &'static str {
        match self {
            Direction::North => "top",
            Direction::South => "bottom",
            Direction::East  => "right",
            Direction::West  => "left",
        }
    }

    /// Inverse of [`as_str`](Self::as_str).  Lowercase only.
    pub fn from_letter(s: &str) -> Option<Direction> {
        match s {
            "n" => Some(Direction::North),
            "s" => Some(Direction::South),
            "e" => Some(Direction::East),
            "w" => Some(Direction::West),
            _ => None,
        }
    }

    /// Inverse of [`edge_label`](Self::edge_label).
    pub fn from_edge_label(s: &str) -> Option<Direction> {
        match s {
            "top"    => Some(Direction::North),
            "bottom" => Some(Direction::South),
            "right"  => Some(Direction::East),
            "left"   => Some(Direction::West),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
