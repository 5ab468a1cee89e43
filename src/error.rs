use crate::location::Coord;
use thiserror::Error;

/// Errors raised by grid and view access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The requested cell or rectangle lies outside the addressed view.
    #[error("region {top_left}..{bottom_right} is out of range for a {width}x{height} view")]
    OutOfRange {
        top_left: Coord,
        bottom_right: Coord,
        width: i32,
        height: i32,
    },

    /// `cast_until` left the view before the predicate held.
    #[error("no matching cell from {start} stepping by {direction}")]
    NotFound { start: Coord, direction: Coord },

    #[error("invalid grid size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    /// `TileGrid::from_ascii` met a character that names no tile.
    #[error("unknown tile glyph {glyph:?} at {at}")]
    UnknownGlyph { glyph: char, at: Coord },
}

impl GridError {
    pub(crate) fn out_of_range(top_left: Coord, bottom_right: Coord, width: i32, height: i32) -> Self {
        GridError::OutOfRange {
            top_left,
            bottom_right,
            width,
            height,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GridError::NotFound { .. })
    }
}

/// A configuration value that cannot produce a level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
