//! Configuration loading and types.
//!
//! This module provides loading of reconciliation thresholds from YAML
//! configuration files.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ReconcileConfig;
