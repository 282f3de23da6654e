//! Error types for the LungAI core crate.
use std::path::PathBuf;

/// Reasons a submission or analysis request is refused.
///
/// A refused call does not change the workflow state. The one exception is
/// `TimerSpawn` from `submit_file`: the file has been recorded by then and
/// stays selected.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The file does not carry an `image/*` MIME type.
    #[error("{name} is not an image (type: {mime})")]
    InvalidFileType { name: String, mime: String },

    /// `start_analysis` was called with no file recorded.
    #[error("no X-ray has been selected")]
    NoFileSelected,

    /// `start_analysis` was called while a previous run is still pending.
    #[error("an analysis is already in progress")]
    AnalysisInProgress,

    /// The OS refused to spawn the timer thread.
    #[error("failed to schedule analysis timer: {0}")]
    TimerSpawn(#[from] std::io::Error),
}

/// Failure to read or parse the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to inspect a file chosen by the user.
#[derive(Debug, thiserror::Error)]
#[error("cannot read {path}: {source}")]
pub struct UploadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
