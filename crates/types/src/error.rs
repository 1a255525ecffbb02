use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// 存储层错误
///
/// `Corrupt` 与 "文件不存在" 严格区分：后者返回空集合，不是错误。
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("memory file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode memories: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("memory {0} already exists")]
    DuplicateId(Uuid),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
