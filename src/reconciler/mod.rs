mod report;


pub use report::{DeadAssetReport, LargeAsset, LargeAssetReport};

use std::collections::HashSet;

use crate::config::ProjectConfig;
use crate::inventory::AssetFile;

/// Canonicalizes path strings so structurally equivalent references compare
/// equal. `/assets/x.png`, `./assets/x.png`, `../../assets/x.png` and
/// `assets/x.png` all normalize to `assets/x.png`.
pub struct Normalizer {
    prefix: String,
}

impl Normalizer {
    /// Build a normalizer rooted at the given assets directory name
    pub fn new(assets_dir: &str) -> Self {
        Self {
            prefix: format!("{}/", assets_dir.trim_end_matches('/')),
        }
    }

    /// Canonical assets-rooted form of a path string.
    ///
    /// Strips any leading run of `/` and `.` characters, then re-roots the
    /// remainder at the assets prefix: paths already under it pass through,
    /// paths containing the prefix token elsewhere keep everything after
    /// its last occurrence, and paths without the token get the prefix
    /// prepended wholesale. The prepend fallback folds foreign relative
    /// paths into the assets namespace even when they point elsewhere —
    /// a known heuristic limitation of the static matcher, kept as-is.
    /// Idempotent.
    pub fn normalize(&self, path: &str) -> String {
        let trimmed = path.trim_start_matches(['/', '.']);

        if trimmed.starts_with(&self.prefix) {
            return trimmed.to_string();
        }

        match trimmed.rfind(&self.prefix) {
            Some(pos) => format!("{}{}", self.prefix, &trimmed[pos + self.prefix.len()..]),
            None => format!("{}{}", self.prefix, trimmed),
        }
    }
}

/// Compute the dead-asset and large-asset reports from the full asset
/// listing and every raw reference found across the source files.
///
/// Dead = assets whose normalized path never appears among the normalized
/// references; a plain set difference. Large = assets strictly over the
/// configured KB threshold.
pub fn reconcile(
    assets: &[AssetFile],
    references: &[String],
    config: &ProjectConfig,
) -> (DeadAssetReport, LargeAssetReport) {
    let normalizer = Normalizer::new(&config.assets_dir);

    let referenced: HashSet<String> = references
        .iter()
        .map(|r| normalizer.normalize(r))
        .collect();

    let mut dead: Vec<String> = assets
        .iter()
        .filter(|a| !referenced.contains(&normalizer.normalize(&a.rel_path)))
        .map(|a| a.rel_path.clone())
        .collect();
    dead.sort();

    let mut large: Vec<LargeAsset> = assets
        .iter()
        .filter(|a| a.size_kb() > config.threshold_kb)
        .map(|a| LargeAsset {
            rel_path: a.rel_path.clone(),
            size_kb: a.size_kb(),
        })
        .collect();
    // Stable sort keeps enumeration order on equal sizes
    large.sort_by(|a, b| b.size_kb.total_cmp(&a.size_kb));

    (
        DeadAssetReport { paths: dead },
        LargeAssetReport { entries: large },
    )
}
