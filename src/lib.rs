//! # Demoji
//!
//! Detect and strip emoji characters from markdown files.
//!
//! Emoji are matched against a fixed table of Unicode code-point ranges
//! ([`EMOJI_RANGES`]), not a full emoji database. Removal also collapses every
//! run of two or more spaces into one, across the whole file.
//!
//! ## Usage
//!
//! ### Command Line
//!
//! ```bash
//! # Report markdown files that contain emoji (exit status 1 if any)
//! demoji docs/
//!
//! # Strip emoji in place
//! demoji --remove docs/
//!
//! # A single file is processed regardless of its extension
//! demoji --remove CHANGELOG.txt
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use demoji::{FileProcessor, FileScanner, Mode, ProcessConfig, Target};
//!
//! assert_eq!(demoji::remove_emojis("Great work! \u{1F389} Ship it."), "Great work! Ship it.");
//!
//! let target = Target::resolve("src")?;
//! let files = FileScanner::default().collect(&target)?;
//! let processor = FileProcessor::new(ProcessConfig {
//!     mode: Mode::Detect,
//!     ..Default::default()
//! });
//! let summary = processor.process_files(&files)?;
//! println!("{} files contain emoji", summary.matched_files.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export core functionality
pub use demoji_core::*;

// Re-export commonly used types
pub use demoji_core::{
    FileConfig, FileOutcome, FileProcessor, FileScanner, Mode, ProcessConfig, RunSummary,
    ScanConfig, Target, TargetError, WriteStrategy,
};
