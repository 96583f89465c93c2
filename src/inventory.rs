use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ProjectConfig;

/// A scannable source file with permissively decoded contents
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as found on disk
    pub path: PathBuf,
    /// File text; undecodable bytes are replaced, never fatal
    pub contents: String,
}

/// A non-hidden file under the assets root
#[derive(Debug, Clone)]
pub struct AssetFile {
    /// Path relative to the project root (forward-slash separated)
    pub rel_path: String,
    /// Size on disk in bytes
    pub size_bytes: u64,
}

impl AssetFile {
    /// Size in kilobytes
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Collect every scannable source file: the configured trees plus the
/// root-level app entry files.
///
/// Missing trees are skipped silently (a project without `components/` is
/// fine); unreadable files get a warning and are skipped, never aborting
/// the scan.
pub fn collect_source_files(config: &ProjectConfig) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();

    for dir in &config.source_dirs {
        let tree = config.project_root.join(dir);
        if !tree.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&tree).follow_links(false) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default();
            if !config.is_source_extension(ext) {
                continue;
            }

            if let Some(source) = read_source(path) {
                sources.push(source);
            }
        }
    }

    for name in &config.app_files {
        let path = config.project_root.join(name);
        if !path.is_file() {
            continue;
        }
        if let Some(source) = read_source(&path) {
            sources.push(source);
        }
    }

    Ok(sources)
}

/// Read a source file with lossy UTF-8 decoding so binary junk or a bad
/// encoding can't kill the run
fn read_source(path: &Path) -> Option<SourceFile> {
    match fs::read(path) {
        Ok(bytes) => Some(SourceFile {
            path: path.to_path_buf(),
            contents: String::from_utf8_lossy(&bytes).into_owned(),
        }),
        Err(e) => {
            eprintln!("[scan] Warning: Failed to read {}: {}", path.display(), e);
            None
        }
    }
}

/// Enumerate every non-hidden file under the assets root, with sizes.
///
/// Paths come back relative to the project root so they line up with the
/// references the extractor produces.
pub fn collect_assets(config: &ProjectConfig) -> Result<Vec<AssetFile>> {
    let assets_root = config.assets_root();
    let mut assets = Vec::new();

    if !assets_root.is_dir() {
        return Ok(assets);
    }

    for entry in WalkDir::new(&assets_root).follow_links(false) {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        // .DS_Store and friends never count as assets
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if hidden {
            continue;
        }

        let metadata = entry
            .metadata()
            .context(format!("Failed to get metadata for {}", path.display()))?;

        let rel_path = path
            .strip_prefix(&config.project_root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        assets.push(AssetFile {
            rel_path,
            size_bytes: metadata.len(),
        });
    }

    Ok(assets)
}
