//! Error handling for scaffold.
//! Defines the error type shared by every pipeline stage and the handler used
//! by the binary to turn unrecoverable errors into an exit status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving, materializing or finishing a project.
///
/// Materialization errors propagate to the driver and are fatal. Errors raised
/// inside the post-generation steps are logged by the orchestrator and never
/// leave it.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A filesystem operation failed on a known path.
    #[error("Filesystem error at '{}': {source}.", .path.display())]
    FilesystemError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed while walking a template layer or the destination.
    #[error("Directory traversal error: {0}.")]
    WalkDirError(#[from] walkdir::Error),

    /// User input was rejected (project name, template id, extras).
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The user aborted an interactive prompt.
    #[error("Operation cancelled by user.")]
    UserCancelled,

    /// The template root, its `project/` layer or a selected extra is absent.
    #[error("Template error: '{}' does not exist.", .template_dir.display())]
    TemplateMissing { template_dir: PathBuf },

    /// Preloaded answers could not be parsed.
    #[error("Failed to parse answers as JSON: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// The interactive terminal failed for a reason other than cancellation.
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// A spawned command could not be started or exited unsuccessfully.
    #[error("Command '{command}' failed: {reason}.")]
    SubprocessError { command: String, reason: String },
}

impl Error {
    /// Wraps an `io::Error` together with the path it was raised for.
    pub fn at<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> Error {
        let path = path.into();
        move |source| Error::FilesystemError { path, source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
