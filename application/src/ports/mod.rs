//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that presentation adapters must implement.

pub mod render_sink;
