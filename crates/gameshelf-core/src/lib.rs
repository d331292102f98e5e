//! Gameshelf 核心库
//!
//! 桌面游戏启动器的数据层，GUI 与 CLI 共用。
//!
//! # 模块
//!
//! - **catalog**: `game_data.json` 的读写、引导与目录同步
//! - **remote**: 远端商店清单的拉取、搜索与工件下载
//! - **launch**: 以外部解释器启动游戏脚本并等待退出
//! - **config**: 启动器设置的存储和读取
//!
//! # 使用示例
//!
//! ## 本地目录
//!
//! ```ignore
//! use gameshelf_core::{CatalogStore, SyncOptions, auto_add};
//!
//! // 1. 打开数据文件（不存在时引导出空目录）
//! let store = CatalogStore::in_dir(".");
//! let games = store.load()?;
//!
//! // 2. 扫描目录，把"脚本 + 同名缩略图"的新游戏补进来
//! let added = auto_add(&store, Path::new("."), &SyncOptions::default())?;
//!
//! // 3. 启动游戏并记录状态流转
//! launch("python3", Path::new("snake.py")).await?;
//! store.record_launch("snake", None)?;
//! ```
//!
//! ## 远端商店
//!
//! ```ignore
//! use gameshelf_core::{StoreClient, StoreSession};
//!
//! let client = StoreClient::new()?;
//! let session = StoreSession::default();
//!
//! // 拉取清单、搜索、下载"脚本 + 缩略图"工件对
//! let games = client.search(&session, "snake").await?;
//! let report = client.download(&session, &games[0]).await;
//! ```

pub mod catalog;
pub mod config;
pub mod launch;
pub mod remote;

// Catalog re-exports
pub use catalog::{
    CatalogDoc, CatalogError, CatalogStore, GameRecord, GameStatus, SyncOptions, auto_add,
};

// Config re-exports
pub use config::LauncherSettings;

// Launch re-exports
pub use launch::{LaunchError, launch};

// Remote re-exports
pub use remote::{
    DEFAULT_MANIFEST_URL, DownloadReport, RemoteGame, StoreClient, StoreError, StoreSession,
};
