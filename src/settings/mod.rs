//! Settings module for ss2clash
//!
//! This module contains the run configuration and its loaders

pub mod settings_struct;

// Re-export settings struct
pub use settings_struct::{GenSettings, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_TEMPLATE};
