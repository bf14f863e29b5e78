//! Infrastructure layer for antfarm
//!
//! This crate contains configuration file discovery, merging and
//! validation, producing the domain and application setup types.

pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDisplayConfig, FileGridConfig,
    FileScheduleConfig,
};
