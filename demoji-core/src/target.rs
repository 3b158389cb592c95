use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::TargetError;

/// 待处理的目标路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

impl Target {
    /// 解析并校验目标路径（会跟随符号链接）
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Self, TargetError> {
        let path = path.as_ref();

        // 悬空的符号链接同样视为不存在
        if !path.exists() {
            return Err(TargetError::NotFound(path.to_path_buf()));
        }

        if path.is_file() {
            debug!("目标是文件: {:?}", path);
            Ok(Self::File(path.to_path_buf()))
        } else if path.is_dir() {
            debug!("目标是目录: {:?}", path);
            Ok(Self::Directory(path.to_path_buf()))
        } else {
            Err(TargetError::NotFileOrDirectory(path.to_path_buf()))
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::File(path) | Self::Directory(path) => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}
