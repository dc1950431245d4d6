// src/config/mod.rs

//! Configuration loading and validation for morphpoem.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate it into a `ConfigFile` (`validate.rs`).
//! - Provide built-in presets (`presets.rs`).

pub mod loader;
pub mod model;
pub mod presets;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{
    CommandSection, ConfigFile, OutputSection, PhraseSection, RawConfigFile, RunSection,
};
pub use presets::Preset;
