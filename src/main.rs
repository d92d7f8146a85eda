use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use version_excludes::core::Config;
use version_excludes::io::{FileReader, InputReader, StdinReader, VecReader};
use version_excludes::processing::{
    DescriptorScanner, DescriptorStatus, ExclusionSet, FileSystemValidator, PathValidator,
};
use version_excludes::report::{ReportDisplayContext, ScanReport};

#[derive(Parser)]
#[command(
    name = "version-excludes",
    about = "Lists and applies the project descriptors that version stamping must skip",
    version
)]
struct Args {
    /// Checkout root the list entries are relative to (default: current directory)
    #[arg(short = 'r', long = "root", global = true)]
    root: Option<String>,

    /// Descriptor file name to look for
    #[arg(short = 'd', long = "descriptor", global = true)]
    descriptor: Option<String>,

    /// Disable progress output
    #[arg(short = 'q', long = "quiet", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every ignored version file, one per line
    List,
    /// Report whether each path would be stamped or skipped
    Check {
        /// Paths to check (reads stdin when neither paths nor --file are given)
        paths: Vec<String>,

        /// File containing paths to check, one per line
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
    },
    /// Find descriptors under the root and show which ones get stamped
    Scan {
        /// Extra wildcard pattern to skip (repeatable)
        #[arg(short = 'x', long = "exclude")]
        exclude: Vec<String>,

        /// Only list skipped descriptors
        #[arg(short = 's', long = "summary")]
        summary: bool,
    },
    /// Report ignored entries that no longer exist under the root
    Verify {
        /// Fail when any entry is stale
        #[arg(long = "strict")]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::builder()
        .root(args.root.as_deref(), true)
        .descriptor_name(args.descriptor.as_deref(), true)
        .show_progress(!args.quiet)
        .build()?;

    let exclusions = ExclusionSet::new();

    match args.command {
        Command::List => {
            for entry in exclusions.entries() {
                println!("{}", entry);
            }
        }
        Command::Check { paths, file } => {
            let reader: Box<dyn InputReader> = match (file, paths.is_empty()) {
                (Some(file), _) => Box::new(FileReader::new(file)),
                (None, false) => Box::new(VecReader::new(paths)),
                (None, true) => Box::new(StdinReader::new()),
            };
            check_paths(reader.as_ref(), &exclusions).await?;
        }
        Command::Scan { exclude, summary } => scan(&config, &exclude, summary).await?,
        Command::Verify { strict } => verify(&config, &exclusions, strict).await?,
    }

    Ok(())
}

async fn check_paths(reader: &dyn InputReader, exclusions: &ExclusionSet) -> Result<()> {
    for path in reader.read_paths().await? {
        println!("{}\t{}", exclusions.classify(&path), path);
    }
    Ok(())
}

async fn scan(config: &Config, patterns: &[String], summary: bool) -> Result<()> {
    let exclusions = ExclusionSet::with_patterns(patterns)?;
    if config.show_progress && exclusions.pattern_count() > 0 {
        eprintln!("📝 Using {} extra exclusion patterns.", exclusions.pattern_count());
    }

    if config.show_progress {
        eprintln!(
            "🔍 Scanning {} for {} files...",
            config.root.display(),
            config.descriptor_name
        );
    }

    let scanner = DescriptorScanner::new(&exclusions, config.descriptor_name.clone());
    let descriptors = scanner
        .scan(&config.root, |descriptor| {
            if config.show_progress && descriptor.status != DescriptorStatus::Stamp {
                eprintln!("  ⏭️  {} ({})", descriptor.path, descriptor.status);
            }
        })
        .await?;

    let report = ScanReport::new(config.root.to_string_lossy(), descriptors);
    let display = if summary {
        ReportDisplayContext::with_summary_strategy()
    } else {
        ReportDisplayContext::with_detailed_strategy()
    };
    display.display(&report);

    Ok(())
}

async fn verify(config: &Config, exclusions: &ExclusionSet, strict: bool) -> Result<()> {
    let validator = FileSystemValidator::new();
    if config.show_progress {
        eprintln!(
            "🔎 Checking {} entries under {} ({})",
            exclusions.len(),
            config.root.display(),
            validator.description()
        );
    }

    let stale = validator
        .stale_entries(&config.root, exclusions.entries())
        .await?;

    if stale.is_empty() {
        println!("✅ All {} ignored version files exist.", exclusions.len());
        return Ok(());
    }

    println!("⚠️  {} ignored version files are missing:", stale.len());
    for entry in &stale {
        println!("    - {}", entry);
    }

    if strict {
        bail!("{} stale entries in the ignored version files list", stale.len());
    }
    Ok(())
}
