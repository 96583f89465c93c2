use std::fs;
use std::path::Path;

use assetsweep::{
    collect_assets, collect_source_files, reconcile, CleanupExecutor, CleanupManifest,
    ProjectConfig, ReferenceExtractor,
};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Full pipeline over a small project: one referenced asset, one dead
/// asset, one dead-and-oversized asset, then a cleanup pass driven by a
/// reviewed manifest containing a stale entry.
#[test]
fn scan_then_cleanup_scenario() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(
        root,
        "pages/index/index.js",
        br#"Page({ data: { icon: "/assets/a.png" } });"#,
    );
    write(root, "assets/a.png", b"referenced");
    write(root, "assets/b.png", b"dead");
    write(root, "assets/c.png", &vec![0u8; 250 * 1024]); // dead and oversized

    let config = ProjectConfig::with_root(root);

    // Scan phase
    let sources = collect_source_files(&config).unwrap();
    let extractor = ReferenceExtractor::new(&config.assets_dir);
    let references: Vec<String> = sources
        .iter()
        .flat_map(|s| extractor.extract(&s.contents))
        .collect();
    let assets = collect_assets(&config).unwrap();

    let (dead, large) = reconcile(&assets, &references, &config);
    assert_eq!(dead.paths, vec!["assets/b.png", "assets/c.png"]);
    assert_eq!(large.len(), 1);
    assert_eq!(large.entries[0].rel_path, "assets/c.png");
    assert_eq!(large.entries[0].size_kb, 250.0);

    // Cleanup phase, driven by an operator-reviewed manifest with one
    // entry that no longer exists
    let manifest = CleanupManifest::from_entries(vec![
        "assets/b.png".to_string(),
        "assets/c.png".to_string(),
        "assets/missing.png".to_string(),
    ]);
    let run = CleanupExecutor::new(config.clone()).run(&manifest).unwrap();

    assert_eq!(run.moved, 2);
    assert_eq!(run.errors, 1);
    assert_eq!(run.total, 3);

    // Both real files relocated with mirrored relative paths
    assert!(run.backup_dir.join("assets/b.png").is_file());
    assert!(run.backup_dir.join("assets/c.png").is_file());
    assert!(!root.join("assets/b.png").exists());
    assert!(!root.join("assets/c.png").exists());

    // The referenced asset is untouched
    assert!(root.join("assets/a.png").is_file());

    // The log records every entry plus the summary
    let log = fs::read_to_string(&run.log_path).unwrap();
    assert!(log.contains("Moved: assets/b.png"));
    assert!(log.contains("Moved: assets/c.png"));
    assert!(log.contains("Skipped (missing): assets/missing.png"));
    assert!(log.contains("Total: 3 files"));

    // A second scan now reports nothing dead besides the backup copy tree,
    // which lives outside the assets root
    let assets_after = collect_assets(&config).unwrap();
    let (dead_after, _) = reconcile(&assets_after, &references, &config);
    assert!(dead_after.is_empty());
}

/// Manifest file round-trip: the cleanup consumes exactly what the operator
/// wrote, comments and all
#[test]
fn cleanup_reads_operator_manifest_file() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(root, "assets/old.png", b"old");
    write(
        root,
        "cleanup_manifest.txt",
        b"# reviewed by hand\nassets/old.png\n",
    );

    let manifest = CleanupManifest::from_file(&root.join("cleanup_manifest.txt")).unwrap();
    assert_eq!(manifest.entries, vec!["assets/old.png"]);

    let run = CleanupExecutor::new(ProjectConfig::with_root(root))
        .run(&manifest)
        .unwrap();
    assert_eq!(run.moved, 1);
    assert_eq!(run.errors, 0);
}
