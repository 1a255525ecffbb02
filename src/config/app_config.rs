use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pocket_types::StorageConfig;

const CONFIG_FILE: &str = "config.toml";
const DATA_DIR: &str = "data";

/// 配置作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Auto,
    Local,
    Global,
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 数据目录（可选，默认: ~/.pocket/data 或 ./.pocket/data，支持 `~`）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// 记忆数据文件名（默认: memories.json）
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// 列表默认显示数量（默认: 10）
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_file_name() -> String {
    StorageConfig::DEFAULT_FILE_NAME.to_string()
}

fn default_list_limit() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            file_name: default_file_name(),
            list_limit: default_list_limit(),
        }
    }
}

impl AppConfig {
    /// 全局 .pocket 目录：~/.pocket/
    pub fn global_pocket_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pocket")
    }

    /// 本地 .pocket 目录：./.pocket/
    pub fn local_pocket_dir() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".pocket")
    }

    /// 检查本地配置是否存在
    /// 注意：如果当前目录是用户主目录，则不认为是本地配置
    pub fn has_local_config() -> bool {
        let current_dir = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(_) => return false,
        };

        let global_parent = Self::global_pocket_dir().parent().map(|p| p.to_path_buf());

        if let Some(home) = global_parent {
            let current_canonical = current_dir.canonicalize().unwrap_or(current_dir.clone());
            let home_canonical = home.canonicalize().unwrap_or(home);

            if current_canonical == home_canonical {
                return false;
            }
        }

        Self::local_pocket_dir().join(CONFIG_FILE).exists()
    }

    /// 验证作用域标志（不能同时指定 local 和 global）
    pub fn validate_scope_flags(local: bool, global: bool) -> Result<()> {
        if local && global {
            anyhow::bail!("Cannot specify both --local and --global, please choose one");
        }
        Ok(())
    }

    /// 获取当前作用域名称
    /// 返回 "local" 或 "global"
    pub fn get_scope_name(force_local: bool, force_global: bool) -> &'static str {
        if force_local {
            "local"
        } else if force_global {
            "global"
        } else if Self::has_local_config() {
            "local"
        } else {
            "global"
        }
    }

    /// 根据 local 标志获取配置目录
    pub fn get_pocket_dir(local: bool) -> PathBuf {
        if local {
            Self::local_pocket_dir()
        } else {
            Self::global_pocket_dir()
        }
    }

    /// 加载配置：根据 local/global 标志或优先级加载
    /// - local = true: 强制使用本地配置
    /// - global = true: 强制使用全局配置
    /// - 两者都为 false: 优先本地配置，其次全局配置，最后默认配置
    pub fn load_with_scope(force_local: bool, force_global: bool) -> Result<Self> {
        Self::validate_scope_flags(force_local, force_global)?;

        let scope = if force_local {
            ConfigScope::Local
        } else if force_global {
            ConfigScope::Global
        } else {
            ConfigScope::Auto
        };

        match scope {
            ConfigScope::Auto if Self::has_local_config() => {
                Self::load_scope_dir(&Self::local_pocket_dir())
            }
            ConfigScope::Auto | ConfigScope::Global => {
                Self::load_scope_dir(&Self::global_pocket_dir())
            }
            ConfigScope::Local => Self::load_scope_dir(&Self::local_pocket_dir()),
        }
    }

    /// 从作用域目录加载配置，配置文件不存在时使用默认配置
    ///
    /// 未显式配置 `data_dir` 时，数据目录落在作用域目录下的 `data/`。
    pub fn load_scope_dir(scope_dir: &Path) -> Result<Self> {
        let path = scope_dir.join(CONFIG_FILE);

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?;
            tracing::debug!("Loaded app config from: {}", path.display());
            config
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };

        if config.data_dir.is_none() {
            config.data_dir = Some(scope_dir.join(DATA_DIR));
        }

        Ok(config)
    }

    /// 获取数据目录（展开 `~`）
    pub fn get_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(path) => {
                let raw = path.to_string_lossy();
                PathBuf::from(shellexpand::tilde(&raw).into_owned())
            }
            None => Self::global_pocket_dir().join(DATA_DIR),
        }
    }

    /// 存储层配置
    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            dir: self.get_data_dir(),
            file_name: self.file_name.clone(),
        }
    }

    /// 确保必要的目录存在
    pub fn ensure_dirs(&self) -> Result<()> {
        let data_dir = self.get_data_dir();
        std::fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create data directory: {}", data_dir.display())
        })?;
        Ok(())
    }

    /// 保存配置到指定作用域目录
    pub fn save_to(&self, scope_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(scope_dir).with_context(|| {
            format!("Failed to create pocket directory: {}", scope_dir.display())
        })?;

        let config_path = scope_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_app_config() {
        let toml_str = r#"
data_dir = "/var/lib/pocket"
file_name = "moments.json"
list_limit = 25
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/pocket")));
        assert_eq!(config.file_name, "moments.json");
        assert_eq!(config.list_limit, 25);
    }

    #[test]
    fn test_default_values() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert!(config.data_dir.is_none());
        assert_eq!(config.file_name, "memories.json");
        assert_eq!(config.list_limit, 10);
    }

    #[test]
    fn test_load_missing_scope_dir_uses_defaults() {
        let dir = TempDir::new().unwrap();

        let config = AppConfig::load_scope_dir(dir.path()).unwrap();

        assert_eq!(config.get_data_dir(), dir.path().join("data"));
        assert_eq!(
            config.storage_config().file_path(),
            dir.path().join("data").join("memories.json")
        );
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            list_limit: 3,
            ..AppConfig::default()
        };

        let path = config.save_to(dir.path()).unwrap();
        assert!(path.ends_with("config.toml"));

        let loaded = AppConfig::load_scope_dir(dir.path()).unwrap();
        assert_eq!(loaded.list_limit, 3);
        assert_eq!(loaded.get_data_dir(), dir.path().join("data"));
    }

    #[test]
    fn test_tilde_expansion() {
        if dirs::home_dir().is_none() {
            return;
        }
        let config = AppConfig {
            data_dir: Some(PathBuf::from("~/pocket-data")),
            ..AppConfig::default()
        };

        let expanded = config.get_data_dir();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("pocket-data"));
    }

    #[test]
    fn test_conflicting_scope_flags() {
        assert!(AppConfig::validate_scope_flags(true, true).is_err());
        assert!(AppConfig::validate_scope_flags(true, false).is_ok());
    }
}
