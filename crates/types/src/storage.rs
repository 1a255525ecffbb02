use std::path::PathBuf;

use tracing::warn;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::Memory;

/// 记忆存储的统一接口
///
/// 整个集合一次读出、一次写回。实现必须在 `add` / `update_by_id` /
/// `toggle_like` 的 "读-改-写" 过程中持有互斥锁，避免同进程内丢失更新。
pub trait MemoryStore: Send + Sync {
    /// 读取全部记忆（磁盘顺序，最新的在前）
    ///
    /// 文件不存在返回空集合；文件损坏返回 `StoreError::Corrupt`。
    fn load_all(&self) -> Result<Vec<Memory>, StoreError>;

    /// 覆盖写入全部记忆（原子替换）
    fn save_all(&self, memories: &[Memory]) -> Result<(), StoreError>;

    /// 插入一条新记忆到最前面
    fn add(&self, memory: Memory) -> Result<(), StoreError>;

    /// 按 ID 更新可变字段，返回是否找到
    fn update_by_id(&self, memory: &Memory) -> Result<bool, StoreError>;

    /// 切换喜欢状态，返回更新后的记忆
    fn toggle_like(&self, id: Uuid) -> Result<Option<Memory>, StoreError>;

    /// 根据 ID 查找
    fn find_by_id(&self, id: Uuid) -> Result<Option<Memory>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|memory| memory.id == id))
    }

    /// 读取全部记忆，任何错误都降级为空集合
    fn load_or_empty(&self) -> Vec<Memory> {
        match self.load_all() {
            Ok(memories) => memories,
            Err(error) => {
                warn!(%error, "failed to load memories, treating as empty");
                Vec::new()
            }
        }
    }
}

/// 存储配置
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub dir: PathBuf,
    pub file_name: String,
}

impl StorageConfig {
    pub const DEFAULT_FILE_NAME: &'static str = "memories.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: Self::DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// 插入到最前面，ID 重复时拒绝
pub fn prepend_unique(memories: &mut Vec<Memory>, memory: Memory) -> Result<(), StoreError> {
    if memories.iter().any(|existing| existing.id == memory.id) {
        return Err(StoreError::DuplicateId(memory.id));
    }
    memories.insert(0, memory);
    Ok(())
}

/// 只覆盖可变字段（`is_liked`），其余字段保持原样
pub fn apply_update(memories: &mut [Memory], update: &Memory) -> bool {
    match memories.iter_mut().find(|existing| existing.id == update.id) {
        Some(existing) => {
            existing.is_liked = update.is_liked;
            true
        }
        None => false,
    }
}

pub fn toggle_like_in_place(memories: &mut [Memory], id: Uuid) -> Option<Memory> {
    let existing = memories.iter_mut().find(|memory| memory.id == id)?;
    existing.is_liked = !existing.is_liked;
    Some(existing.clone())
}
