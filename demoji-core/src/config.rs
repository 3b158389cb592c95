use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::processor::{Mode, ProcessConfig, WriteStrategy};
use crate::scanner::ScanConfig;

/// 配置文件（TOML），所有字段均可省略
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub scan: ScanSection,
    pub write: WriteSection,
}

/// `[scan]` 段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanSection {
    pub extension: String,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub ignore: Vec<PathBuf>,
}

impl Default for ScanSection {
    fn default() -> Self {
        let scan = ScanConfig::default();
        Self {
            extension: scan.extension,
            max_depth: scan.max_depth,
            follow_links: scan.follow_links,
            respect_gitignore: scan.respect_gitignore,
            include_hidden: !scan.ignore_hidden,
            ignore: scan.ignore_paths,
        }
    }
}

/// `[write]` 段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriteSection {
    pub atomic: bool,
    pub keep_going: bool,
}

impl FileConfig {
    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        info!("已加载配置文件: {:?}", path);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_scan_config(self) -> ScanConfig {
        let extension = self.scan.extension.trim_start_matches('.').to_string();
        ScanConfig {
            extension,
            max_depth: self.scan.max_depth,
            follow_links: self.scan.follow_links,
            respect_gitignore: self.scan.respect_gitignore,
            ignore_hidden: !self.scan.include_hidden,
            ignore_paths: self.scan.ignore,
        }
    }

    pub fn process_config(&self, mode: Mode) -> ProcessConfig {
        ProcessConfig {
            mode,
            write_strategy: if self.write.atomic {
                WriteStrategy::Atomic
            } else {
                WriteStrategy::InPlace
            },
            keep_going: self.write.keep_going,
        }
    }
}
