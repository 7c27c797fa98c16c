use thiserror::Error;

use crate::Point;

/// Errors produced while building geometry from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The corners do not describe a rectangle with positive width and
    /// height in the non-negative quadrant.
    #[error(
        "invalid rectangle dimensions: upper left {upper_left} must be left of and above lower right {lower_right}, with no negative coordinates"
    )]
    InvalidDimensions {
        upper_left: Point,
        lower_right: Point,
    },

    /// A point could not be parsed from text.
    #[error("invalid point '{0}': expected \"x,y\"")]
    ParsePoint(String),
}

pub type Result<T> = std::result::Result<T, Error>;
