//! Shared-border detection between two rectangles.
//!
//! Two rectangles are adjacent when an edge of one lies on the same line
//! as an edge of the other and the two edges share a segment of positive
//! length. Both axes run through the same routine:
//!
//! 1. Skip the axis unless the rectangles' extents along the edge
//!    direction overlap (touching at an endpoint does not count).
//! 2. Compare the edge lines of both rectangles and pick the matching
//!    ones, same-side matches first, then cross matches.
//! 3. Emit one segment per matching line, spanning the overlap of the
//!    two extents, and classify it by how those extents relate.

use std::fmt;

use serde::Serialize;

use crate::{Axis, Point, Rectangle, Span, is_fully_contained_by};

/// How much of two coinciding edges is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyKind {
    /// Both edges cover exactly the same points.
    Proper,
    /// One edge lies strictly inside the other.
    SubLine,
    /// The edges overlap, each with points outside the other.
    Partial,
}

impl AdjacencyKind {
    /// Classifies two edges by their extents along the edge direction.
    ///
    /// Anything that is neither identical nor strictly nested, including
    /// extents that share exactly one endpoint, is `Partial`.
    pub fn classify(a: &Span, b: &Span) -> AdjacencyKind {
        if a == b {
            AdjacencyKind::Proper
        } else if a.strictly_contains(b) || b.strictly_contains(a) {
            AdjacencyKind::SubLine
        } else {
            AdjacencyKind::Partial
        }
    }
}

/// A border segment shared by two rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Adjacency {
    pub kind: AdjacencyKind,
    pub axis: Axis,
    pub start: Point,
    pub end: Point,
}

impl Adjacency {
    pub fn new(kind: AdjacencyKind, axis: Axis, start: Point, end: Point) -> Self {
        Self {
            kind,
            axis,
            start,
            end,
        }
    }
}

/// Finds every border segment shared by `a` and `b`.
///
/// Segments on axis `X` come first, then axis `Y`. Rectangles that are
/// apart or strictly nested share nothing; a rectangle compared with
/// itself shares all four sides.
pub fn find_adjacencies(a: &Rectangle, b: &Rectangle) -> Vec<Adjacency> {
    if !a.bounding_boxes_overlap(b)
        || is_fully_contained_by(a, b)
        || is_fully_contained_by(b, a)
    {
        return Vec::new();
    }

    if a == b {
        return vec![
            Adjacency::new(AdjacencyKind::Proper, Axis::X, a.lower_left(), a.upper_left()),
            Adjacency::new(AdjacencyKind::Proper, Axis::X, a.lower_right(), a.upper_right()),
            Adjacency::new(AdjacencyKind::Proper, Axis::Y, a.lower_left(), a.lower_right()),
            Adjacency::new(AdjacencyKind::Proper, Axis::Y, a.upper_left(), a.upper_right()),
        ];
    }

    let mut adjacencies = axis_adjacencies(a, b, Axis::X);
    adjacencies.extend(axis_adjacencies(a, b, Axis::Y));
    adjacencies
}

impl Rectangle {
    /// Shorthand for [`find_adjacencies`] with `self` as the first
    /// rectangle.
    pub fn adjacencies_with(&self, other: &Rectangle) -> Vec<Adjacency> {
        find_adjacencies(self, other)
    }
}

/// Shared segments lying on lines of constant coordinate along `axis`.
fn axis_adjacencies(a: &Rectangle, b: &Rectangle, axis: Axis) -> Vec<Adjacency> {
    let along = axis.perpendicular();
    let (a_extent, b_extent) = (a.span(along), b.span(along));

    if !a_extent.overlaps(&b_extent) {
        return Vec::new();
    }

    let kind = AdjacencyKind::classify(&a_extent, &b_extent);
    let shared = a_extent.inner(&b_extent);

    matching_lines(edge_lines(a, axis), edge_lines(b, axis))
        .into_iter()
        .map(|line| {
            Adjacency::new(
                kind,
                axis,
                axis.point(line, shared.start()),
                axis.point(line, shared.end()),
            )
        })
        .collect()
}

/// The two edge lines of `r` on `axis`, in the order they are matched.
///
/// `X` gives `[left, right]`, `Y` gives `[upper, lower]`.
fn edge_lines(r: &Rectangle, axis: Axis) -> [i32; 2] {
    match axis {
        Axis::X => [r.left_x(), r.right_x()],
        Axis::Y => [r.upper_y(), r.lower_y()],
    }
}

/// Picks the lines of the first rectangle that coincide with a line of
/// the second.
///
/// Same-side matches win over cross matches. Both lines are returned
/// only when both sides match, which for distinct rectangles means the
/// extents along `axis` are equal. A line cannot equal both the other
/// rectangle's same-side line and its opposite one, since rectangles
/// have positive size.
fn matching_lines([a0, a1]: [i32; 2], [b0, b1]: [i32; 2]) -> Vec<i32> {
    if a0 == b0 {
        if a1 == b1 { vec![a0, a1] } else { vec![a0] }
    } else if a1 == b1 {
        vec![a1]
    } else if a0 == b1 {
        vec![a0]
    } else if a1 == b0 {
        vec![a1]
    } else {
        Vec::new()
    }
}

impl fmt::Display for AdjacencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Proper => "proper",
            Self::SubLine => "sub-line",
            Self::Partial => "partial",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} adjacency on {} axis from {} to {}",
            self.kind, self.axis, self.start, self.end
        )
    }
}
