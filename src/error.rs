use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to {action} '{path}'. Original error: {source}")]
    FileOperation {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory tree. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to parse answers as JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse answers as YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Prompt failed. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The namespace directory to relocate does not exist.
    #[error("Old group path does not exist: {path}")]
    MissingSourceError { path: String },

    /// One namespace directory lies inside the other, so a merge would delete moved files.
    #[error("Cannot relocate '{old_path}' to '{new_path}': one namespace is nested in the other")]
    NestedNamespace { old_path: String, new_path: String },

    #[error("Cannot proceed: project root '{root}' is not a directory.")]
    RootNotFound { root: String },

    #[error("{count} conflict(s) detected and --strict is set; see the notices above")]
    ConflictsDetected { count: usize },
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Wraps an I/O error with the action and path it happened on.
    pub fn file<P: AsRef<std::path::Path>>(
        action: &'static str,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Error::FileOperation { action, path: path.as_ref().display().to_string(), source }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
