use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod classifier;
pub mod config;
pub mod error;
pub mod processor;
pub mod scanner;
pub mod target;

pub use classifier::{EMOJI_RANGES, contains_emoji, remove_emojis};
pub use config::FileConfig;
pub use error::TargetError;
pub use processor::{FileOutcome, FileProcessor, Mode, ProcessConfig, WriteStrategy};
pub use scanner::{FileScanner, ScanConfig};
pub use target::Target;

/// 运行结果统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub mode: Mode,
    pub files_processed: usize,
    /// 检测模式下为发现表情符号的文件，删除模式下为被修改的文件
    pub matched_files: Vec<PathBuf>,
    pub failed_files: Vec<String>,
    pub duration_ms: u64,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl RunSummary {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            files_processed: 0,
            matched_files: Vec::new(),
            failed_files: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn add_outcome(&mut self, outcome: &FileOutcome) {
        self.files_processed += 1;
        if outcome.matched {
            self.matched_files.push(outcome.path.clone());
        }
    }

    pub fn add_failure(&mut self, file_path: String) {
        self.failed_files.push(file_path);
    }

    pub fn found_any(&self) -> bool {
        !self.matched_files.is_empty()
    }

    /// 是否应以非零状态退出
    pub fn exit_failure(&self) -> bool {
        if !self.failed_files.is_empty() {
            return true;
        }

        match self.mode {
            Mode::Detect => self.found_any(),
            Mode::Remove => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(path: &str, matched: bool) -> FileOutcome {
        FileOutcome {
            path: PathBuf::from(path),
            matched,
            emoji_count: usize::from(matched),
        }
    }

    #[test]
    fn test_run_summary_detect() {
        let mut summary = RunSummary::new(Mode::Detect);
        assert!(!summary.exit_failure());

        summary.add_outcome(&outcome("a.md", false));
        assert_eq!(summary.files_processed, 1);
        assert!(!summary.found_any());
        assert!(!summary.exit_failure());

        summary.add_outcome(&outcome("b.md", true));
        assert!(summary.found_any());
        assert!(summary.exit_failure());
    }

    #[test]
    fn test_run_summary_remove() {
        let mut summary = RunSummary::new(Mode::Remove);
        summary.add_outcome(&outcome("a.md", true));
        assert!(summary.found_any());
        assert!(!summary.exit_failure());

        summary.add_failure("b.md".to_string());
        assert!(summary.exit_failure());
    }
}
