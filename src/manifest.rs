use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// An operator-reviewed list of asset-relative paths slated for removal.
///
/// The scanner only ever prints suggestions; the manifest is a separate
/// artifact an operator writes (typically by pasting and pruning scanner
/// output), so no destructive action happens without a human in between.
#[derive(Debug, Clone, Default)]
pub struct CleanupManifest {
    pub entries: Vec<String>,
}

impl CleanupManifest {
    /// Parse a manifest file: one path per line, `#` comments and blank
    /// lines ignored, order preserved
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read manifest: {}", path.display()))?;
        Ok(Self::parse(&contents))
    }

    /// Parse manifest text
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    /// Build a manifest directly from a path list
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let manifest = CleanupManifest::parse(
            "# reviewed 2024-03-01\n\
             assets/icons/home.png\n\
             \n\
             assets/images/bg.png\n\
             # assets/keep/this.png\n",
        );
        assert_eq!(
            manifest.entries,
            vec!["assets/icons/home.png", "assets/images/bg.png"]
        );
    }

    #[test]
    fn test_parse_preserves_order() {
        let manifest = CleanupManifest::parse("assets/z.png\nassets/a.png\n");
        assert_eq!(manifest.entries, vec!["assets/z.png", "assets/a.png"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let manifest = CleanupManifest::parse("  assets/a.png  \n");
        assert_eq!(manifest.entries, vec!["assets/a.png"]);
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = CleanupManifest::parse("# nothing to do\n");
        assert!(manifest.is_empty());
        assert_eq!(manifest.len(), 0);
    }
}
