use anyhow::Result;

use crate::config::AppConfig;
use crate::ui::Output;
use pocket_local::JsonMemoryStore;

/// 显式初始化（带用户反馈）
/// local: true 表示在本地目录初始化，false 表示在全局目录初始化
pub fn initialize(local: bool) -> Result<()> {
    let output = Output::new();
    let scope_dir = AppConfig::get_pocket_dir(local);
    let config_path = scope_dir.join("config.toml");
    let location = if local { "local" } else { "global" };

    if config_path.exists() {
        output.resource_action("Found", "config", &config_path);
    } else {
        let path = AppConfig::default().save_to(&scope_dir)?;
        output.resource_action("Creating", "config", &path);
    }

    // 加载配置并确保数据目录存在
    let config = AppConfig::load_scope_dir(&scope_dir)?;
    config.ensure_dirs()?;

    let store = JsonMemoryStore::open(&config.storage_config())?;
    let action = if store.path().exists() { "Found" } else { "Using" };
    output.resource_action(action, "store", store.path());

    output.finish("initialization", location);

    Ok(())
}
