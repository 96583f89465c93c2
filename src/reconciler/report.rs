/// Asset paths with no detected reference, sorted lexicographically
#[derive(Debug, Clone, Default)]
pub struct DeadAssetReport {
    pub paths: Vec<String>,
}

impl DeadAssetReport {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// One over-threshold asset
#[derive(Debug, Clone, PartialEq)]
pub struct LargeAsset {
    pub rel_path: String,
    pub size_kb: f64,
}

/// Assets over the size threshold, sorted descending by size
/// (stable on ties)
#[derive(Debug, Clone, Default)]
pub struct LargeAssetReport {
    pub entries: Vec<LargeAsset>,
}

impl LargeAssetReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
