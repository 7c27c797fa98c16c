use std::fmt;

use serde::Serialize;

use crate::Point;

/// One of the two coordinate axes.
///
/// An adjacency on axis `X` lies on a line of constant x (a vertical
/// edge); one on axis `Y` lies on a line of constant y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Builds the point at `line` on this axis and `along` on the
    /// perpendicular one.
    pub fn point(self, line: i32, along: i32) -> Point {
        match self {
            Axis::X => Point::new(line, along),
            Axis::Y => Point::new(along, line),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}
