//! Border intersections between two rectangles.
//!
//! Both rectangles are axis-aligned with integer corners, so every
//! crossing of their perimeters lands on a lattice point. Each border is
//! split into its four edges and the edges are compared pairwise: two
//! perpendicular edges meet in at most one point, two collinear edges
//! share the lattice points of their common segment. The work done is
//! proportional to the number of shared points, not to the perimeters.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::{Axis, Point, Rectangle, Span};

/// How two rectangle borders relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntersectionKind {
    /// The rectangles are equal, so every border point is shared.
    AllPointsIntersect,
    /// The borders share no point.
    NonIntersecting,
    /// The borders cross or touch at a finite set of points.
    PointIntersections,
}

/// Result of [`intersect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intersections {
    pub kind: IntersectionKind,
    pub points: BTreeSet<Point>,
}

impl Intersections {
    fn none() -> Self {
        Self {
            kind: IntersectionKind::NonIntersecting,
            points: BTreeSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Finds the lattice points shared by the borders of `a` and `b`.
///
/// For equal rectangles the result holds the whole perimeter, so its size
/// grows with the rectangle. Otherwise only the shared points are
/// produced.
pub fn intersect(a: &Rectangle, b: &Rectangle) -> Intersections {
    if a == b {
        return Intersections {
            kind: IntersectionKind::AllPointsIntersect,
            points: a.boundary_lattice_points(),
        };
    }

    if !a.bounding_boxes_overlap(b) {
        return Intersections::none();
    }

    let mut points = BTreeSet::new();
    for e in edges(a) {
        for f in edges(b) {
            e.shared_points(&f, &mut points);
        }
    }

    if points.is_empty() {
        return Intersections::none();
    }

    Intersections {
        kind: IntersectionKind::PointIntersections,
        points,
    }
}

/// One side of a rectangle: the line `axis = line` covering `span` on the
/// perpendicular axis.
#[derive(Debug, Clone, Copy)]
struct Edge {
    axis: Axis,
    line: i32,
    span: Span,
}

impl Edge {
    fn shared_points(&self, other: &Edge, points: &mut BTreeSet<Point>) {
        if self.axis == other.axis {
            if self.line == other.line && self.span.touches(&other.span) {
                let common = self.span.inner(&other.span);
                let along = common.start()..=common.end();
                points.extend(along.map(|v| self.axis.point(self.line, v)));
            }
        } else if self.span.contains(other.line) && other.span.contains(self.line) {
            points.insert(self.axis.point(self.line, other.line));
        }
    }
}

fn edges(r: &Rectangle) -> [Edge; 4] {
    let (left, right, upper, lower) = r.border_lines();
    let side = |axis: Axis, line: i32| Edge {
        axis,
        line,
        span: r.span(axis.perpendicular()),
    };
    [
        side(Axis::X, left),
        side(Axis::X, right),
        side(Axis::Y, upper),
        side(Axis::Y, lower),
    ]
}

impl Rectangle {
    /// Shorthand for [`intersect`] with `self` as the first rectangle.
    pub fn intersections(&self, other: &Rectangle) -> Intersections {
        intersect(self, other)
    }
}

impl fmt::Display for IntersectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AllPointsIntersect => "all points intersect",
            Self::NonIntersecting => "non-intersecting",
            Self::PointIntersections => "point intersections",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Intersections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.points.is_empty() {
            return Ok(());
        }
        let points: Vec<String> = self.points.iter().map(Point::to_string).collect();
        write!(f, ": {}", points.join(", "))
    }
}
