//! Travel direction along a line.

use std::fmt;

/// Direction of travel along a subway line.
///
/// Line sequences are stored north to south, so the two directions map
/// onto opposite ways of stepping through a sequence. That mapping lives
/// in [`crate::lines::LineTopology::adjacent`]; this type only names the
/// two headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Northbound,
    Southbound,
}

impl Direction {
    /// Both directions, in the order responses list them (N first).
    pub const BOTH: [Direction; 2] = [Direction::Northbound, Direction::Southbound];

    /// The opposite heading.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Northbound => Direction::Southbound,
            Direction::Southbound => Direction::Northbound,
        }
    }

    /// Single-letter code used in the wire format (`"N"` / `"S"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Northbound => "N",
            Direction::Southbound => "S",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
