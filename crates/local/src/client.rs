use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::Builder;
use tracing::{debug, error, info};
use uuid::Uuid;

use pocket_types::{
    apply_update, prepend_unique, toggle_like_in_place, Memory, MemoryStore, StorageConfig,
    StoreError,
};

/// 单文件 JSON 本地存储
///
/// 每次修改都读出整个数组、修改、再整体写回。
/// 写回通过同目录临时文件 + rename 完成，每次写入使用独立的临时文件名。
pub struct JsonMemoryStore {
    dir: PathBuf,
    path: PathBuf,
    tmp_prefix: String,
    // 保护 "读-改-写" 序列和所有写入
    write_lock: Mutex<()>,
}

impl JsonMemoryStore {
    /// 打开存储（目录不存在时自动创建，文件按需创建）
    pub fn open(config: &StorageConfig) -> Result<Self, StoreError> {
        fs::create_dir_all(&config.dir).map_err(|e| StoreError::io(&config.dir, e))?;

        let path = config.file_path();
        let tmp_prefix = format!(".{}.", config.file_name);
        debug!(path = %path.display(), "opened memory store");

        Ok(Self {
            dir: config.dir.clone(),
            path,
            tmp_prefix,
            write_lock: Mutex::new(()),
        })
    }

    /// 数据文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 获取记录总数
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.load_all()?.len())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 持锁执行一次 "读-改-写"，闭包返回 `(结果, 是否需要写回)`
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Vec<Memory>) -> Result<(T, bool), StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self.lock();
        let mut memories = self.load_all()?;
        let (value, dirty) = f(&mut memories)?;
        if dirty {
            self.save_locked(&memories)?;
        }
        Ok(value)
    }

    /// 编码并原子替换数据文件，调用方必须已持有 `write_lock`
    fn save_locked(&self, memories: &[Memory]) -> Result<(), StoreError> {
        // 先完整编码，编码失败时不触碰磁盘
        let bytes = serde_json::to_vec_pretty(memories).map_err(|e| {
            error!(error = %e, "failed to encode memories");
            StoreError::Encode(e)
        })?;

        self.write_replace(&bytes).map_err(|e| {
            error!(error = %e, "failed to save memories");
            e
        })?;

        info!(path = %self.path.display(), count = memories.len(), "saved memories");
        Ok(())
    }

    fn write_replace(&self, bytes: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        let mut tmp = Builder::new()
            .prefix(&self.tmp_prefix)
            .suffix(".tmp")
            .tempfile_in(&self.dir)
            .map_err(|e| StoreError::io(&self.dir, e))?;
        tmp.write_all(bytes)
            .and_then(|_| tmp.flush())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(tmp.path(), e))?;

        // persist 失败时 PersistError 被丢弃，临时文件随之删除
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;
        Ok(())
    }
}

impl MemoryStore for JsonMemoryStore {
    fn load_all(&self) -> Result<Vec<Memory>, StoreError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        serde_json::from_slice(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save_all(&self, memories: &[Memory]) -> Result<(), StoreError> {
        let _guard = self.lock();
        self.save_locked(memories)
    }

    fn add(&self, memory: Memory) -> Result<(), StoreError> {
        self.mutate(|memories| {
            prepend_unique(memories, memory)?;
            Ok(((), true))
        })
    }

    fn update_by_id(&self, memory: &Memory) -> Result<bool, StoreError> {
        self.mutate(|memories| {
            let found = apply_update(memories, memory);
            if !found {
                debug!(id = %memory.id, "update skipped, memory not found");
            }
            Ok((found, found))
        })
    }

    fn toggle_like(&self, id: Uuid) -> Result<Option<Memory>, StoreError> {
        self.mutate(|memories| {
            let updated = toggle_like_in_place(memories, id);
            let dirty = updated.is_some();
            Ok((updated, dirty))
        })
    }
}
