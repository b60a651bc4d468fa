//! Configuration handling for modscaffold
//!
//! This module contains the configuration components:
//! - `types`: the validated configuration record the pipeline consumes
//! - `loader`: partial answers read from JSON/YAML and their defaults

pub mod loader;
pub mod types;


pub use loader::Answers;
pub use types::Configuration;
