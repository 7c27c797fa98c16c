use crate::{Axis, Rectangle};

/// Returns true if `inner` lies strictly inside `outer`.
///
/// Every border of `inner` must sit strictly within `outer`; a shared
/// border line is not containment. A rectangle never contains itself.
pub fn is_fully_contained_by(inner: &Rectangle, outer: &Rectangle) -> bool {
    if inner == outer {
        return false;
    }

    outer.span(Axis::X).strictly_contains(&inner.span(Axis::X))
        && outer.span(Axis::Y).strictly_contains(&inner.span(Axis::Y))
}

/// Returns true if `outer` strictly contains `inner`.
pub fn contains(outer: &Rectangle, inner: &Rectangle) -> bool {
    is_fully_contained_by(inner, outer)
}

impl Rectangle {
    /// Shorthand for [`is_fully_contained_by`] with `self` as the inner
    /// rectangle.
    pub fn is_fully_contained_by(&self, other: &Rectangle) -> bool {
        is_fully_contained_by(self, other)
    }
}
