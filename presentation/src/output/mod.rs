//! Text output for finished runs

pub mod console;
pub mod formatter;
