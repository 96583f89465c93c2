use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default large-file threshold in kilobytes.
pub const DEFAULT_THRESHOLD_KB: f64 = 200.0;

/// Project layout and scan settings, passed explicitly into every component.
///
/// All fields have the documented defaults, so `ProjectConfig::default()`
/// describes a standard mini-program tree rooted at the current directory.
/// Overrides can be loaded from a JSON file via [`ProjectConfig::from_json_file`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Root of the project tree all relative paths hang off of
    pub project_root: PathBuf,
    /// Assets directory, relative to the project root
    pub assets_dir: String,
    /// Directory trees scanned for source files, relative to the project root
    pub source_dirs: Vec<String>,
    /// Root-level application entry files scanned in addition to the trees
    pub app_files: Vec<String>,
    /// Extensions (without dot) that mark a file as scannable source
    pub source_extensions: Vec<String>,
    /// Directory that receives timestamped backup runs
    pub backup_dir: String,
    /// Size threshold for the large-file report, in KB (strictly greater-than)
    pub threshold_kb: f64,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            assets_dir: "assets".to_string(),
            source_dirs: vec!["pages".to_string(), "components".to_string()],
            app_files: vec![
                "app.js".to_string(),
                "app.json".to_string(),
                "app.wxss".to_string(),
            ],
            source_extensions: vec![
                "wxml".to_string(),
                "wxss".to_string(),
                "js".to_string(),
            ],
            backup_dir: "assets_backup".to_string(),
            threshold_kb: DEFAULT_THRESHOLD_KB,
        }
    }
}

impl ProjectConfig {
    /// Default configuration rooted at the given directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: root.into(),
            ..Self::default()
        }
    }

    /// Load overrides from a JSON file; absent keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .context(format!("Failed to parse config file: {}", path.display()))
    }

    /// Absolute-ish path to the assets root
    pub fn assets_root(&self) -> PathBuf {
        self.project_root.join(&self.assets_dir)
    }

    /// Check whether an extension marks a scannable source file
    pub fn is_source_extension(&self, ext: &str) -> bool {
        self.source_extensions.iter().any(|e| e == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ProjectConfig::default();
        assert_eq!(config.assets_dir, "assets");
        assert_eq!(config.threshold_kb, 200.0);
        assert!(config.is_source_extension("wxml"));
        assert!(config.is_source_extension("js"));
        assert!(!config.is_source_extension("png"));
    }

    #[test]
    fn test_partial_json_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "threshold_kb": 512.0 }}"#).unwrap();

        let config = ProjectConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.threshold_kb, 512.0);
        // Everything else keeps its default
        assert_eq!(config.assets_dir, "assets");
        assert_eq!(config.source_dirs, vec!["pages", "components"]);
    }

    #[test]
    fn test_assets_root_joins() {
        let config = ProjectConfig::with_root("/tmp/project");
        assert_eq!(config.assets_root(), PathBuf::from("/tmp/project/assets"));
    }
}
