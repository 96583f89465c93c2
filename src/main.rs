use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use assetsweep::{
    collect_assets, collect_source_files, reconcile, CleanupExecutor, CleanupManifest,
    ProjectConfig, ReferenceExtractor,
};

/// Default manifest file the cleanup subcommand looks for under the
/// project root
const DEFAULT_MANIFEST: &str = "cleanup_manifest.txt";

#[derive(Parser)]
#[command(
    name = "assetsweep",
    version,
    about = "Find unused assets in a front-end project and retire them to a backup"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan source files and report dead and oversized assets
    Scan {
        /// Project root to scan (defaults to the current directory)
        #[arg(long)]
        project_root: Option<PathBuf>,
        /// Large-file threshold in KB (defaults to 200)
        #[arg(long)]
        threshold_kb: Option<f64>,
        /// Optional JSON config file with layout overrides
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Back up and remove the assets listed in a reviewed manifest
    Cleanup {
        /// Project root to operate on (defaults to the current directory)
        #[arg(long)]
        project_root: Option<PathBuf>,
        /// Manifest file (defaults to cleanup_manifest.txt under the root)
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Optional JSON config file with layout overrides
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nOperation cancelled");
        process::exit(1);
    })
    .context("Failed to install interrupt handler")?;

    let cli = Cli::parse();
    match cli.command {
        Command::Scan {
            project_root,
            threshold_kb,
            config,
        } => run_scan(project_root, threshold_kb, config),
        Command::Cleanup {
            project_root,
            manifest,
            config,
        } => run_cleanup(project_root, manifest, config),
    }
}

fn load_config(
    project_root: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<ProjectConfig> {
    let mut config = match config_file {
        Some(path) => ProjectConfig::from_json_file(&path)?,
        None => ProjectConfig::default(),
    };
    if let Some(root) = project_root {
        config.project_root = root;
    }
    Ok(config)
}

fn run_scan(
    project_root: Option<PathBuf>,
    threshold_kb: Option<f64>,
    config_file: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(project_root, config_file)?;
    if let Some(threshold) = threshold_kb {
        config.threshold_kb = threshold;
    }

    eprintln!("[scan] Scanning project files...");
    let sources = collect_source_files(&config).context("Failed to enumerate source files")?;
    eprintln!("[scan] Found {} source files", sources.len());

    let extractor = ReferenceExtractor::new(&config.assets_dir);
    let mut references = Vec::new();
    for source in &sources {
        references.extend(extractor.extract(&source.contents));
    }
    eprintln!("[scan] Extracted {} raw references", references.len());

    let assets = collect_assets(&config).context("Failed to enumerate assets")?;
    eprintln!("[scan] Found {} assets", assets.len());

    let (dead, large) = reconcile(&assets, &references, &config);

    println!("===== Unused assets =====");
    for path in &dead.paths {
        println!("- {path}");
    }
    println!("\nTotal: {} unused assets", dead.len());

    println!("\n===== Assets over {} KB =====", config.threshold_kb);
    for entry in &large.entries {
        println!("- {} ({:.2} KB)", entry.rel_path, entry.size_kb);
    }
    println!("\nTotal: {} assets over threshold", large.len());

    Ok(())
}

fn run_cleanup(
    project_root: Option<PathBuf>,
    manifest_path: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(project_root, config_file)?;
    let manifest_path =
        manifest_path.unwrap_or_else(|| config.project_root.join(DEFAULT_MANIFEST));

    let manifest = CleanupManifest::from_file(&manifest_path)?;
    eprintln!(
        "[cleanup] Loaded {} manifest entries from {}",
        manifest.len(),
        manifest_path.display()
    );
    eprintln!("[cleanup] Backing up and removing listed assets...");

    let run = CleanupExecutor::new(config)
        .run(&manifest)
        .context("Cleanup run failed")?;

    println!("Backup directory: {}", run.backup_dir.display());
    println!("Log file: {}", run.log_path.display());
    println!("\nTotal: {} files", run.total);
    println!("Moved: {} files", run.moved);
    println!("Errors: {} files", run.errors);

    Ok(())
}
