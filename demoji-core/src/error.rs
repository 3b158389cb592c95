use std::path::PathBuf;
use thiserror::Error;

/// 目标路径校验失败
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a file or directory", .0.display())]
    NotFileOrDirectory(PathBuf),
}
