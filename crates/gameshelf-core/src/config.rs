//! 应用配置和持久化
//!
//! 游戏目录、脚本解释器、商店清单地址等设置的存储和读取。

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogStore, SyncOptions};
use crate::remote::StoreSession;

/// 启动器设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// 游戏脚本与缩略图所在目录
    pub games_dir: PathBuf,
    /// 目录数据文件名
    pub data_file: String,
    /// 识别为游戏脚本的扩展名（不含点）
    pub script_extension: String,
    /// 运行游戏脚本的解释器
    pub interpreter: String,
    /// 商店清单地址
    pub manifest_url: String,
    /// 商店下载目录，默认与游戏目录相同
    pub download_dir: PathBuf,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            games_dir: PathBuf::from("."),
            data_file: CatalogStore::DEFAULT_FILE.to_string(),
            script_extension: "py".to_string(),
            interpreter: "python3".to_string(),
            manifest_url: crate::remote::DEFAULT_MANIFEST_URL.to_string(),
            download_dir: PathBuf::from("."),
        }
    }
}

impl LauncherSettings {
    /// 获取配置文件路径
    fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gameshelf");
        config_dir.join("settings.toml")
    }

    /// 加载设置（文件不存在或解析失败则使用默认值）
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(settings) => {
                        debug!("Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        log::warn!("Failed to parse settings: {}, using defaults", e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read settings file: {}, using defaults", e);
                }
            }
        }
        Self::default()
    }

    /// 保存设置
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// 游戏目录对应的目录存储
    pub fn catalog_store(&self) -> CatalogStore {
        CatalogStore::new(self.games_dir.join(&self.data_file))
    }

    /// 设置对应的同步选项，排除表沿用默认（启动器自身）
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            script_extension: self.script_extension.clone(),
            ..SyncOptions::default()
        }
    }

    /// 设置对应的商店会话
    pub fn store_session(&self) -> StoreSession {
        let mut session = StoreSession::new(&self.download_dir);
        if self.manifest_url != session.url() {
            session.set_url(self.manifest_url.clone());
        }
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = LauncherSettings::default();

        assert_eq!(settings.data_file, "game_data.json");
        assert_eq!(settings.script_extension, "py");
        assert_eq!(settings.interpreter, "python3");
        assert_eq!(settings.manifest_url, crate::remote::DEFAULT_MANIFEST_URL);
    }

    #[test]
    fn test_store_session_from_settings() {
        let settings = LauncherSettings {
            manifest_url: "https://mirror.example.com/games.json".to_string(),
            download_dir: PathBuf::from("/tmp/games"),
            ..Default::default()
        };

        let session = settings.store_session();
        assert_eq!(session.url(), "https://mirror.example.com/games.json");
        assert_eq!(session.download_dir(), PathBuf::from("/tmp/games").as_path());
        assert!(!session.is_default());
    }

    #[test]
    fn test_sync_options_from_settings() {
        let settings = LauncherSettings {
            script_extension: "lua".to_string(),
            ..Default::default()
        };

        assert_eq!(settings.sync_options().script_extension, "lua");
    }

    /// 验证加载容错，配置文件缺失时回退默认值
    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let settings = LauncherSettings::load_from(&dir.path().join("settings.toml"));
        assert_eq!(settings, LauncherSettings::default());
    }

    /// 验证加载容错，配置文件损坏时回退默认值而不是报错
    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "interpreter = [not toml").unwrap();

        let settings = LauncherSettings::load_from(&path);
        assert_eq!(settings, LauncherSettings::default());
    }

    #[test]
    fn test_load_reads_saved_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let saved = LauncherSettings {
            interpreter: "python3.12".to_string(),
            games_dir: PathBuf::from("/srv/games"),
            ..Default::default()
        };
        fs::write(&path, toml::to_string_pretty(&saved).unwrap()).unwrap();

        assert_eq!(LauncherSettings::load_from(&path), saved);
    }

    #[test]
    fn test_settings_toml_shape() {
        let settings = LauncherSettings {
            games_dir: PathBuf::from("/srv/games"),
            ..Default::default()
        };

        let text = toml::to_string_pretty(&settings).unwrap();
        assert!(text.contains("games_dir"));

        let parsed: LauncherSettings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
