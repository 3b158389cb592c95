use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use demoji_core::{
    FileConfig, FileOutcome, FileProcessor, FileScanner, Mode, ProcessConfig, RunSummary,
    ScanConfig, Target, WriteStrategy,
};

#[derive(Parser, Debug)]
#[command(name = "demoji")]
#[command(about = "Detect and optionally remove emojis from markdown files")]
#[command(version)]
pub struct Cli {
    /// File or directory to process
    pub target: PathBuf,

    /// Remove emojis (default: detect only)
    #[arg(long)]
    pub remove: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Load scan and write options from a TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File extension matched in directory mode
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Maximum directory depth to scan
    #[arg(short, long)]
    pub max_depth: Option<usize>,

    /// Follow symlinks while scanning directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Respect .gitignore files while scanning directories
    #[arg(long)]
    pub respect_gitignore: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    pub skip_hidden: bool,

    /// Paths to ignore (can be specified multiple times)
    #[arg(short = 'i', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore_paths: Vec<PathBuf>,

    /// Replace files atomically through a temporary file
    #[arg(long)]
    pub atomic: bool,

    /// Keep processing remaining files after a read or write error
    #[arg(long)]
    pub keep_going: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.remove { Mode::Remove } else { Mode::Detect }
    }
}

pub fn run_cli() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 设置日志级别
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    // 日志输出到 stderr，stdout 只保留结果
    tracing_subscriber::fmt()
        .with_env_filter(format!("demoji_core={log_level},demoji_cli={log_level}"))
        .with_writer(std::io::stderr)
        .init();

    run(cli)
}

/// 执行一次完整的检测或删除
pub fn run(cli: Cli) -> Result<ExitCode> {
    let target = match Target::resolve(&cli.target) {
        Ok(target) => target,
        Err(e) => {
            println!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let (scan_config, process_config) = build_configs(&cli)?;
    if target.is_directory() {
        debug!("扫描目录 {:?}，扩展名 .{}", target.path(), scan_config.extension);
    } else {
        debug!("处理单个文件 {:?}", target.path());
    }
    debug!("扫描配置: {:?}", scan_config);

    let scanner = FileScanner::new(scan_config);
    let files = scanner.collect(&target)?;

    let processor = FileProcessor::new(process_config);
    let mode = processor.mode();
    let summary =
        processor.process_files_with_progress(&files, |outcome| display_outcome(mode, outcome))?;

    display_summary(&summary);

    if summary.exit_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// 合并配置文件和命令行参数，命令行优先
fn build_configs(cli: &Cli) -> Result<(ScanConfig, ProcessConfig)> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let mut process_config = file_config.process_config(cli.mode());
    let mut scan_config = file_config.into_scan_config();

    if let Some(extension) = &cli.extension {
        scan_config.extension = extension.trim_start_matches('.').to_string();
    }
    if cli.max_depth.is_some() {
        scan_config.max_depth = cli.max_depth;
    }
    scan_config.follow_links |= cli.follow_symlinks;
    scan_config.respect_gitignore |= cli.respect_gitignore;
    scan_config.ignore_hidden |= cli.skip_hidden;
    scan_config.ignore_paths.extend(cli.ignore_paths.iter().cloned());

    if cli.atomic {
        process_config.write_strategy = WriteStrategy::Atomic;
    }
    process_config.keep_going |= cli.keep_going;

    Ok((scan_config, process_config))
}

fn display_outcome(mode: Mode, outcome: &FileOutcome) {
    if !outcome.matched {
        return;
    }

    match mode {
        Mode::Detect => println!("Found emojis: {}", outcome.path.display()),
        Mode::Remove => println!("Removed emojis: {}", outcome.path.display()),
    }
}

fn display_summary(summary: &RunSummary) {
    if !summary.failed_files.is_empty() {
        println!("\nFailed to process {} files:", summary.failed_files.len());
        for file in &summary.failed_files {
            println!("  - {file}");
        }
    }

    if summary.mode == Mode::Detect {
        if summary.found_any() {
            println!("\nEmojis detected! Run with --remove to fix automatically.");
        } else {
            println!("No emojis found.");
        }
    }
}
