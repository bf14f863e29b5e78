//! Grid store
//!
//! A fixed-size 2D mapping from cell coordinates to [`Tile`] tags. Every
//! coordinate inside the dimensions holds exactly one tag; lookups outside
//! return `None` instead of panicking.

use crate::agent::position::Position;
use crate::core::error::DomainError;
use crate::tile::Tile;

/// Width and height of a grid, both at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    pub width: usize,
    pub height: usize,
}

impl GridDimensions {
    pub const DEFAULT_WIDTH: usize = 120;
    pub const DEFAULT_HEIGHT: usize = 100;
    /// Upper bound on `width * height`; one byte per cell
    pub const MAX_CELLS: usize = 1 << 26;

    pub fn new(width: usize, height: usize) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidDimensions { width, height });
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= Self::MAX_CELLS => Ok(Self { width, height }),
            _ => Err(DomainError::GridTooLarge {
                width,
                height,
                max_cells: Self::MAX_CELLS,
            }),
        }
    }

    /// Center cell, rounded toward the origin
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

impl std::fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fixed-size grid of tiles, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create a grid with every cell cleared
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Tile::Cleared; dimensions.area()],
        }
    }

    /// Create a cleared grid with a single seeded cell
    pub fn seeded(
        dimensions: GridDimensions,
        at: Position,
        tile: Tile,
    ) -> Result<Self, DomainError> {
        let mut grid = Self::new(dimensions);
        grid.set(at, tile).map_err(|_| DomainError::StartOutOfBounds {
            x: at.x,
            y: at.y,
            width: dimensions.width,
            height: dimensions.height,
        })?;
        Ok(grid)
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions
            .contains(position)
            .then(|| position.y * self.dimensions.width + position.x)
    }

    pub fn get(&self, position: Position) -> Option<Tile> {
        self.index(position).map(|i| self.cells[i])
    }

    /// Overwrite one cell, returning the tag it held before
    pub fn set(&mut self, position: Position, tile: Tile) -> Result<Tile, DomainError> {
        let index = self.index(position).ok_or(DomainError::OutOfBounds {
            x: position.x as i64,
            y: position.y as i64,
            width: self.dimensions.width,
            height: self.dimensions.height,
        })?;
        Ok(std::mem::replace(&mut self.cells[index], tile))
    }

    /// All cells that are not cleared, in row-major order
    pub fn painted(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let width = self.dimensions.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| !tile.is_cleared())
            .map(move |(i, tile)| (Position::new(i % width, i / width), *tile))
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|t| !t.is_cleared()).count()
    }

    /// Smallest rectangle `(min, max)` holding every painted cell
    pub fn painted_bounds(&self) -> Option<(Position, Position)> {
        self.painted().fold(None, |bounds, (p, _)| match bounds {
            None => Some((p, p)),
            Some((min, max)) => Some((
                Position::new(min.x.min(p.x), min.y.min(p.y)),
                Position::new(max.x.max(p.x), max.y.max(p.y)),
            )),
        })
    }
}
