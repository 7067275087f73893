//! Configuration loading and management for the CTC engine.
//!
//! This module provides the salary scheme presets: the two built-in schemes
//! and a loader for presets stored as YAML files.
//!
//! # Example
//!
//! ```no_run
//! use ctc_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/presets").unwrap();
//! println!("Default scheme: {}", config.default_preset().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{SalaryScheme, SchemePreset};
