use anyhow::Result;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::target::Target;

/// 文件扫描器配置
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 目录模式下匹配的扩展名（不含点）
    pub extension: String,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub respect_gitignore: bool,
    pub ignore_hidden: bool,
    /// 忽略的路径列表（绝对路径或相对路径）
    pub ignore_paths: Vec<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            max_depth: None,
            follow_links: false,
            // 默认与普通的递归 glob 一致：不读取忽略文件，包含隐藏文件
            respect_gitignore: false,
            ignore_hidden: false,
            ignore_paths: Vec::new(),
        }
    }
}

/// 目标文件扫描器
pub struct FileScanner {
    config: ScanConfig,
    ignore_roots: Vec<PathBuf>,
}

impl FileScanner {
    /// 创建新的扫描器
    pub fn new(config: ScanConfig) -> Self {
        let ignore_roots = config
            .ignore_paths
            .iter()
            .map(|p| p.canonicalize().unwrap_or_else(|_| p.clone()))
            .collect();

        Self {
            config,
            ignore_roots,
        }
    }

    /// 收集目标下需要处理的文件
    ///
    /// 单个文件直接返回，不检查扩展名；目录则递归查找匹配扩展名的文件。
    pub fn collect(&self, target: &Target) -> Result<Vec<PathBuf>> {
        match target {
            Target::File(path) => Ok(vec![path.clone()]),
            Target::Directory(root) => self.scan_directory(root),
        }
    }

    /// 递归扫描目录
    fn scan_directory(&self, root_path: &Path) -> Result<Vec<PathBuf>> {
        info!("开始扫描路径: {:?}", root_path);

        let mut builder = WalkBuilder::new(root_path);
        builder
            .standard_filters(false)
            .follow_links(self.config.follow_links)
            .git_ignore(self.config.respect_gitignore)
            .git_exclude(self.config.respect_gitignore)
            .hidden(self.config.ignore_hidden)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        let files: Vec<PathBuf> = builder
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => self.process_entry(entry),
                Err(e) => {
                    warn!("扫描错误: {}", e);
                    None
                }
            })
            .collect();

        info!("找到 {} 个 .{} 文件", files.len(), self.config.extension);

        Ok(files)
    }

    /// 处理单个目录条目
    fn process_entry(&self, entry: DirEntry) -> Option<PathBuf> {
        let path = entry.path();

        if !self.matches_extension(path) {
            return None;
        }

        // 跟随符号链接判断，名为 x.md 的目录不处理
        if !path.is_file() {
            debug!("跳过非普通文件: {:?}", path);
            return None;
        }

        if self.is_ignored(path) {
            debug!("文件在忽略路径中，跳过: {:?}", path);
            return None;
        }

        debug!("发现文件: {:?}", path);
        Some(path.to_path_buf())
    }

    /// 文件名是否以 `.{extension}` 结尾
    fn matches_extension(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.config.extension);
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&suffix))
    }

    /// 检查路径是否在忽略路径下
    fn is_ignored(&self, path: &Path) -> bool {
        if self.ignore_roots.is_empty() {
            return false;
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.ignore_roots.iter().any(|root| canonical.starts_with(root))
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}
