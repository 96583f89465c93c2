use std::path::PathBuf;
use thiserror::Error;

/// Fatal setup failures for a cleanup run.
///
/// Per-item outcomes (missing source, failed move) are never errors at this
/// level — they are recorded in the run log and counted, and the run keeps
/// going. Only the inability to create the backup destination or its log
/// aborts a run.
#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Failed to create backup directory {path}: {source}")]
    BackupDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create log file {path}: {source}")]
    LogCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write cleanup log: {0}")]
    LogWrite(#[from] std::io::Error),
}
