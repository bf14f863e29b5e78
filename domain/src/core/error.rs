//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Grid {width}x{height} exceeds the limit of {max_cells} cells")]
    GridTooLarge {
        width: usize,
        height: usize,
        max_cells: usize,
    },

    #[error("Start position ({x}, {y}) lies outside the {width}x{height} grid")]
    StartOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Agent would leave the {width}x{height} grid at ({x}, {y})")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("Invalid heading: {0} degrees")]
    InvalidHeading(i32),
}

impl DomainError {
    /// Check if this error was raised by an agent move leaving the grid
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, DomainError::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let error = DomainError::OutOfBounds {
            x: -1,
            y: 4,
            width: 120,
            height: 100,
        };
        assert_eq!(
            error.to_string(),
            "Agent would leave the 120x100 grid at (-1, 4)"
        );
    }

    #[test]
    fn test_is_out_of_bounds_check() {
        assert!(
            DomainError::OutOfBounds {
                x: 0,
                y: -1,
                width: 1,
                height: 1
            }
            .is_out_of_bounds()
        );
        assert!(
            !DomainError::InvalidDimensions {
                width: 0,
                height: 3
            }
            .is_out_of_bounds()
        );
        assert!(!DomainError::InvalidHeading(45).is_out_of_bounds());
    }
}
