/// A closed interval `[start, end]` along one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: i32,
    end: i32,
}

impl Span {
    /// Creates a span from two bounds in either order.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Returns true if the spans share at least one coordinate.
    pub fn touches(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn contains(&self, value: i32) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns true if the spans share a segment of positive length.
    ///
    /// Spans that only meet at an endpoint do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true if `other` lies strictly inside this span, with no
    /// shared endpoint.
    pub fn strictly_contains(&self, other: &Span) -> bool {
        self.start < other.start && other.end < self.end
    }

    /// The span between the middle two of the four bounds.
    ///
    /// For overlapping spans this is their common part.
    pub fn inner(&self, other: &Span) -> Span {
        let mut bounds = [self.start, self.end, other.start, other.end];
        bounds.sort_unstable();
        Span::new(bounds[1], bounds[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_bounds() {
        let span = Span::new(16, 12);
        assert_eq!(span.start(), 12);
        assert_eq!(span.end(), 16);
    }

    #[test]
    fn contains_includes_both_ends() {
        let span = Span::new(3, 7);
        assert!(span.contains(3));
        assert!(span.contains(7));
        assert!(!span.contains(2));
        assert!(!span.contains(8));
    }

    #[test]
    fn touching_spans_do_not_overlap() {
        let a = Span::new(0, 5);
        let b = Span::new(5, 9);
        assert!(a.touches(&b));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Span::new(12, 16);
        let b = Span::new(14, 18);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&Span::new(20, 30)));
        assert!(!a.touches(&Span::new(20, 30)));
    }

    #[test]
    fn strict_containment_rejects_shared_endpoints() {
        let outer = Span::new(5, 20);
        assert!(outer.strictly_contains(&Span::new(12, 16)));
        assert!(!outer.strictly_contains(&Span::new(5, 16)));
        assert!(!outer.strictly_contains(&outer));
    }

    #[test]
    fn inner_span_is_order_independent() {
        // Arrange
        let a = Span::new(12, 16);
        let b = Span::new(9, 15);

        // Act / Assert
        assert_eq!(a.inner(&b), Span::new(12, 15));
        assert_eq!(b.inner(&a), Span::new(12, 15));
    }

    #[test]
    fn inner_span_of_nested_spans_is_the_shorter_one() {
        let outer = Span::new(5, 20);
        let inner = Span::new(12, 16);
        assert_eq!(outer.inner(&inner), inner);
    }
}
