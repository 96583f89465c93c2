// Public API exports
pub mod config;
pub mod executor;
pub mod extractor;
pub mod inventory;
pub mod manifest;
pub mod reconciler;

// Re-export main types for convenience
pub use config::{ProjectConfig, DEFAULT_THRESHOLD_KB};

pub use inventory::{collect_assets, collect_source_files, AssetFile, SourceFile};

pub use extractor::{clean_reference, ExtractionRule, ReferenceExtractor};

pub use reconciler::{reconcile, DeadAssetReport, LargeAsset, LargeAssetReport, Normalizer};

pub use manifest::CleanupManifest;

pub use executor::{BackupRun, CleanupError, CleanupExecutor};
