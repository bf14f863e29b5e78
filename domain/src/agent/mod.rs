//! Agent domain module
//!
//! Contains the ant's state: where it stands, which way it faces, and how
//! its moves are resolved at the grid edges.

pub mod boundary;
pub mod entities;
pub mod heading;
pub mod position;

pub use boundary::BoundaryPolicy;
pub use entities::Agent;
pub use heading::{Heading, Turn};
pub use position::Position;
