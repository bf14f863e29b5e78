//! Headless progress display

pub mod reporter;
