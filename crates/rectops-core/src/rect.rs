use std::collections::BTreeSet;
use std::fmt;

use crate::{Axis, Error, Point, Result, Span};

/// An axis-aligned rectangle on the integer lattice.
///
/// Built from its upper-left and lower-right corners, with y growing
/// upwards. A constructed rectangle always has positive width and height
/// and lies in the non-negative quadrant. Two rectangles are equal when
/// their defining corners are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    upper_left: Point,
    lower_right: Point,
}

impl Rectangle {
    /// Creates a rectangle from two opposing corners.
    ///
    /// Fails with [`Error::InvalidDimensions`] when the upper-left corner
    /// is not strictly left of and above the lower-right one, or when any
    /// coordinate is negative.
    pub fn new(upper_left: Point, lower_right: Point) -> Result<Self> {
        let ordered = upper_left.x < lower_right.x && lower_right.y < upper_left.y;
        let non_negative = [upper_left.x, upper_left.y, lower_right.x, lower_right.y]
            .iter()
            .all(|&c| c >= 0);

        if !ordered || !non_negative {
            return Err(Error::InvalidDimensions {
                upper_left,
                lower_right,
            });
        }

        Ok(Self {
            upper_left,
            lower_right,
        })
    }

    pub fn upper_left(&self) -> Point {
        self.upper_left
    }

    pub fn lower_right(&self) -> Point {
        self.lower_right
    }

    pub fn upper_right(&self) -> Point {
        Point::new(self.lower_right.x, self.upper_left.y)
    }

    pub fn lower_left(&self) -> Point {
        Point::new(self.upper_left.x, self.lower_right.y)
    }

    /// Leftmost (smallest) x coordinate.
    pub fn left_x(&self) -> i32 {
        self.upper_left.x
    }

    /// Rightmost (largest) x coordinate.
    pub fn right_x(&self) -> i32 {
        self.lower_right.x
    }

    /// Uppermost (largest) y coordinate.
    pub fn upper_y(&self) -> i32 {
        self.upper_left.y
    }

    /// Lowest (smallest) y coordinate.
    pub fn lower_y(&self) -> i32 {
        self.lower_right.y
    }

    /// The four bounding lines as `(left_x, right_x, upper_y, lower_y)`.
    pub fn border_lines(&self) -> (i32, i32, i32, i32) {
        (self.left_x(), self.right_x(), self.upper_y(), self.lower_y())
    }

    pub fn width(&self) -> i32 {
        self.right_x() - self.left_x()
    }

    pub fn height(&self) -> i32 {
        self.upper_y() - self.lower_y()
    }

    /// Extent of the rectangle along the coordinate of `axis`.
    ///
    /// `X` gives `[left_x, right_x]`, `Y` gives `[lower_y, upper_y]`.
    pub fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::X => Span::new(self.left_x(), self.right_x()),
            Axis::Y => Span::new(self.lower_y(), self.upper_y()),
        }
    }

    /// Returns true if the bounding boxes share at least one point.
    ///
    /// Rectangles that only touch along an edge or at a corner count as
    /// overlapping.
    pub fn bounding_boxes_overlap(&self, other: &Rectangle) -> bool {
        self.span(Axis::X).touches(&other.span(Axis::X))
            && self.span(Axis::Y).touches(&other.span(Axis::Y))
    }

    /// Every integer point on the perimeter, each corner once.
    ///
    /// The top and bottom rows cover the full width; the side columns
    /// only cover the rows strictly between them.
    pub fn boundary_lattice_points(&self) -> BTreeSet<Point> {
        let (left, right, upper, lower) = self.border_lines();
        let mut points = BTreeSet::new();

        for x in left..=right {
            points.insert(Point::new(x, upper));
            points.insert(Point::new(x, lower));
        }

        for y in (lower + 1)..upper {
            points.insert(Point::new(left, y));
            points.insert(Point::new(right, y));
        }

        points
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.upper_left, self.lower_right)
    }
}
