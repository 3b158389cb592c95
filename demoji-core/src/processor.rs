use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};

use crate::RunSummary;
use crate::classifier;

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    /// 只检测，不修改文件
    #[default]
    Detect,
    /// 删除表情符号并写回文件
    Remove,
}

/// 写回策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WriteStrategy {
    /// 直接覆盖原文件
    #[default]
    InPlace,
    /// 先写入同目录临时文件，再替换原文件
    Atomic,
}

/// 处理器配置
#[derive(Debug, Clone, Default)]
pub struct ProcessConfig {
    pub mode: Mode,
    pub write_strategy: WriteStrategy,
    /// 单个文件出错时记录并继续，而不是中止整个运行
    pub keep_going: bool,
}

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// 检测模式下表示发现表情符号，删除模式下表示文件被修改
    pub matched: bool,
    pub emoji_count: usize,
}

/// 文件处理器
pub struct FileProcessor {
    config: ProcessConfig,
}

impl FileProcessor {
    /// 创建新的处理器
    pub fn new(config: ProcessConfig) -> Self {
        Self { config }
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// 处理单个文件
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        match self.config.mode {
            Mode::Detect => self.detect_file(path),
            Mode::Remove => self.remove_from_file(path),
        }
    }

    /// 批量处理文件
    pub fn process_files(&self, files: &[PathBuf]) -> Result<RunSummary> {
        self.process_files_with_progress(files, |_| {})
    }

    /// 批量处理文件（带进度回调）
    ///
    /// 每个文件处理完成后立即回调，文件严格按顺序逐个处理。
    pub fn process_files_with_progress<F>(
        &self,
        files: &[PathBuf],
        mut progress_callback: F,
    ) -> Result<RunSummary>
    where
        F: FnMut(&FileOutcome),
    {
        let start_time = Instant::now();
        let mut summary = RunSummary::new(self.config.mode);

        info!("开始处理 {} 个文件", files.len());

        for path in files {
            match self.process_file(path) {
                Ok(outcome) => {
                    progress_callback(&outcome);
                    summary.add_outcome(&outcome);
                }
                Err(e) if self.config.keep_going => {
                    error!("处理文件失败 {:?}: {:#}", path, e);
                    summary.add_failure(path.to_string_lossy().to_string());
                }
                Err(e) => return Err(e),
            }
        }

        summary.duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            "处理完成: 共 {} 个文件，命中 {} 个，失败 {} 个，耗时 {}ms",
            summary.files_processed,
            summary.matched_files.len(),
            summary.failed_files.len(),
            summary.duration_ms
        );

        Ok(summary)
    }

    /// 检测模式
    fn detect_file(&self, path: &Path) -> Result<FileOutcome> {
        let content = read_text(path)?;
        let matched = classifier::contains_emoji(&content);

        let emoji_count = if matched {
            let count = classifier::count_emojis(&content);
            debug!("文件 {:?} 中发现 {} 个表情符号", path, count);
            count
        } else {
            0
        };

        Ok(FileOutcome {
            path: path.to_path_buf(),
            matched,
            emoji_count,
        })
    }

    /// 删除模式：内容未变化时不写文件
    fn remove_from_file(&self, path: &Path) -> Result<FileOutcome> {
        let content = read_text(path)?;
        let cleaned = classifier::remove_emojis(&content);

        if cleaned == content {
            debug!("文件 {:?} 无需修改", path);
            return Ok(FileOutcome {
                path: path.to_path_buf(),
                matched: false,
                emoji_count: 0,
            });
        }

        let emoji_count = classifier::count_emojis(&content);
        match self.config.write_strategy {
            WriteStrategy::InPlace => write_in_place(path, &cleaned)?,
            WriteStrategy::Atomic => write_atomic(path, &cleaned)?,
        }
        info!("已写回文件 {:?}，删除 {} 个表情符号", path, emoji_count);

        Ok(FileOutcome {
            path: path.to_path_buf(),
            matched: true,
            emoji_count,
        })
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new(ProcessConfig::default())
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("读取文件失败: {}", path.display()))
}

fn write_in_place(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("写入文件失败: {}", path.display()))
}

/// 写入临时文件后替换原文件，保留原文件权限
///
/// 符号链接先解析到真实文件，替换的是链接指向的文件而不是链接本身。
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let real_path = fs::canonicalize(path)
        .with_context(|| format!("解析文件路径失败: {}", path.display()))?;
    let dir = match real_path.parent() {
        Some(parent) => parent,
        None => anyhow::bail!("文件没有父目录: {}", real_path.display()),
    };

    let metadata = fs::metadata(&real_path)
        .with_context(|| format!("获取文件元数据失败: {}", real_path.display()))?;

    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("创建临时文件失败: {}", dir.display()))?;
    temp.write_all(content.as_bytes())
        .context("写入临时文件失败")?;
    temp.as_file().sync_all().context("同步临时文件失败")?;
    fs::set_permissions(temp.path(), metadata.permissions())
        .context("设置临时文件权限失败")?;
    preserve_owner(temp.path(), &metadata);

    temp.persist(&real_path)
        .map_err(|e| e.error)
        .with_context(|| format!("替换文件失败: {}", real_path.display()))?;

    Ok(())
}

/// 尽量保留原文件的属主和属组，没有权限时保持临时文件的属主
#[cfg(unix)]
fn preserve_owner(temp_path: &Path, metadata: &fs::Metadata) {
    use std::os::unix::fs::MetadataExt;

    let owner = std::os::unix::fs::chown(temp_path, Some(metadata.uid()), Some(metadata.gid()));
    if let Err(e) = owner {
        debug!("无法保留文件属主 {:?}: {}", temp_path, e);
    }
}

#[cfg(not(unix))]
fn preserve_owner(_temp_path: &Path, _metadata: &fs::Metadata) {}
