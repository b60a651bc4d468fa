/// Handles argument parsing and the top-level run.
pub mod cli;

/// Configuration record and answers loading.
pub mod config;

/// Constants used throughout the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Decides which paths are never traversed or mutated.
pub mod exclusion;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Ordered stages applied to a project tree.
pub mod pipeline;

/// User input and interaction handling.
pub mod prompt;

/// File-tree mutation engine.
pub mod scaffold;

/// Answer validators
pub mod validation;
