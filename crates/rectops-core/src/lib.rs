pub mod adjacency;
pub mod axis;
pub mod config;
pub mod containment;
pub mod error;
pub mod intersection;
pub mod log;
pub mod point;
pub mod rect;
pub mod span;

pub use adjacency::{Adjacency, AdjacencyKind, find_adjacencies};
pub use axis::Axis;
pub use config::Config;
pub use containment::{contains, is_fully_contained_by};
pub use error::{Error, Result};
pub use intersection::{IntersectionKind, Intersections, intersect};
pub use point::Point;
pub use rect::Rectangle;
pub use span::Span;
