//! What happens when a move would take the agent off the grid

use super::position::Position;
use crate::core::error::DomainError;
use crate::grid::GridDimensions;
use serde::{Deserialize, Serialize};

/// Edge handling for agent moves
///
/// - `Wrap`: leave one edge, re-enter on the opposite one (default)
/// - `Clamp`: stay on the edge cell
/// - `Fail`: reject the move with [`DomainError::OutOfBounds`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    #[default]
    Wrap,
    Clamp,
    Fail,
}

impl BoundaryPolicy {
    /// Resolve the destination of a move by `(dx, dy)` from `from`
    pub fn advance(
        &self,
        from: Position,
        (dx, dy): (i64, i64),
        dims: GridDimensions,
    ) -> Result<Position, DomainError> {
        let width = dims.width as i64;
        let height = dims.height as i64;
        let x = from.x as i64 + dx;
        let y = from.y as i64 + dy;

        if (0..width).contains(&x) && (0..height).contains(&y) {
            return Ok(Position::new(x as usize, y as usize));
        }

        match self {
            BoundaryPolicy::Wrap => Ok(Position::new(
                x.rem_euclid(width) as usize,
                y.rem_euclid(height) as usize,
            )),
            BoundaryPolicy::Clamp => Ok(Position::new(
                x.clamp(0, width - 1) as usize,
                y.clamp(0, height - 1) as usize,
            )),
            BoundaryPolicy::Fail => Err(DomainError::OutOfBounds {
                x,
                y,
                width: dims.width,
                height: dims.height,
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryPolicy::Wrap => "wrap",
            BoundaryPolicy::Clamp => "clamp",
            BoundaryPolicy::Fail => "fail",
        }
    }
}

impl std::fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BoundaryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wrap" | "torus" => Ok(BoundaryPolicy::Wrap),
            "clamp" => Ok(BoundaryPolicy::Clamp),
            "fail" | "error" => Ok(BoundaryPolicy::Fail),
            _ => Err(format!(
                "Unknown boundary policy: {}. Valid: wrap, clamp, fail",
                s
            )),
        }
    }
}
