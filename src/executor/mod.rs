mod error;


pub use error::CleanupError;

use chrono::Local;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::manifest::CleanupManifest;

/// Name of the per-run log file inside the backup directory
pub const LOG_FILE_NAME: &str = "cleanup_log.txt";

/// Outcome of one executor invocation
#[derive(Debug)]
pub struct BackupRun {
    /// Timestamped directory the moved files landed in
    pub backup_dir: PathBuf,
    /// Path of the run log inside the backup directory
    pub log_path: PathBuf,
    /// Entries successfully moved
    pub moved: usize,
    /// Entries skipped (missing) or failed
    pub errors: usize,
    /// Total manifest entries processed
    pub total: usize,
}

/// Moves manifest-listed assets into a fresh timestamped backup directory,
/// mirroring their relative paths, and writes a per-entry log.
///
/// Every entry is processed independently; a missing or unmovable file is
/// logged and counted but never aborts the run. Interrupting a run mid-way
/// can leave a partially populated backup directory and a partial log —
/// recovery is a manual filesystem operation either way.
pub struct CleanupExecutor {
    config: ProjectConfig,
}

impl CleanupExecutor {
    pub fn new(config: ProjectConfig) -> Self {
        Self { config }
    }

    /// Run the backup-and-remove pass over a manifest
    pub fn run(&self, manifest: &CleanupManifest) -> Result<BackupRun, CleanupError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let backup_dir = self
            .config
            .project_root
            .join(&self.config.backup_dir)
            .join(&timestamp);

        fs::create_dir_all(&backup_dir).map_err(|source| CleanupError::BackupDir {
            path: backup_dir.clone(),
            source,
        })?;

        let log_path = backup_dir.join(LOG_FILE_NAME);
        let log_file = File::create(&log_path).map_err(|source| CleanupError::LogCreate {
            path: log_path.clone(),
            source,
        })?;
        let mut log = BufWriter::new(log_file);

        writeln!(
            log,
            "Cleanup log - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(log, "{}", "=".repeat(60))?;
        writeln!(log)?;

        let mut moved = 0;
        let mut errors = 0;

        for entry in &manifest.entries {
            let src = self.config.project_root.join(entry);
            if !src.exists() {
                writeln!(log, "Skipped (missing): {entry}")?;
                errors += 1;
                continue;
            }

            let dest = backup_dir.join(entry);
            match move_file(&src, &dest) {
                Ok(()) => {
                    writeln!(log, "Moved: {entry}")?;
                    moved += 1;
                }
                Err(e) => {
                    writeln!(log, "Failed: {entry} - {e}")?;
                    errors += 1;
                }
            }
        }

        writeln!(log)?;
        writeln!(log, "{}", "=".repeat(60))?;
        writeln!(log, "Total: {} files", manifest.len())?;
        writeln!(log, "Moved: {moved} files")?;
        writeln!(log, "Errors: {errors} files")?;
        writeln!(log, "Backup directory: {}", backup_dir.display())?;
        log.flush()?;

        Ok(BackupRun {
            backup_dir,
            log_path,
            moved,
            errors,
            total: manifest.len(),
        })
    }
}

/// Move a file, creating the mirrored parent structure first. Falls back to
/// copy + remove when rename fails (cross-device backup directories).
fn move_file(src: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(src, dest)?;
            fs::remove_file(src)
        }
    }
}
