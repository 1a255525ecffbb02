pub mod activity;
pub mod add;
pub mod init;
pub mod like;
pub mod list;
pub mod question;
pub mod show;

use anyhow::{Context, Result};
use pocket_local::JsonMemoryStore;

use crate::config::AppConfig;

/// 按作用域打开的记忆存储
pub(crate) struct ScopedStore {
    pub config: AppConfig,
    pub scope: &'static str,
    pub store: JsonMemoryStore,
}

/// 加载配置并打开对应作用域的存储
pub(crate) fn open_store(force_local: bool, force_global: bool) -> Result<ScopedStore> {
    let config = AppConfig::load_with_scope(force_local, force_global)?;
    let scope = AppConfig::get_scope_name(force_local, force_global);

    let storage_config = config.storage_config();
    let store = JsonMemoryStore::open(&storage_config).with_context(|| {
        format!(
            "Failed to open memory store in {}",
            storage_config.dir.display()
        )
    })?;

    Ok(ScopedStore {
        config,
        scope,
        store,
    })
}
