//! 游戏目录模块
//!
//! 管理持久化的游戏目录（`game_data.json`）：
//! - **store**: 读取、引导与整文件写回
//! - **sync**: 扫描游戏目录，自动补全新发现的游戏
//!
//! 目录是唯一的持久化状态。每次变更都整读整写，没有增量更新，
//! 也没有跨进程锁：两个启动器实例同时写入时后写者胜出。

pub mod store;
pub mod sync;


use serde::{Deserialize, Serialize};
use std::fmt;

pub use store::CatalogStore;
pub use sync::{SyncOptions, auto_add};

/// 游戏状态
///
/// 状态机只有一条边：首次成功启动时 `not_started -> in_progress`。
/// 没有"已通关"之类的后续状态，也不会回退。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
}

impl GameStatus {
    /// 界面显示用的名称
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "未开始",
            GameStatus::InProgress => "进行中",
        }
    }

    /// 数据文件中的字符串形式
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "not_started",
            GameStatus::InProgress => "in_progress",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// GameRecord - 必须与既有 game_data.json 的记录字段完全一致
/// ```json
/// {
///     "name": "snake",
///     "thumbnail": "snake.png",
///     "lastPlayed": "2024-11-02",
///     "progress": "Not Started",
///     "status": "not_started"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 唯一标识；同步时靠"跳过同名"保证唯一，不做拒绝式写入
    pub name: String,
    /// 缩略图的路径或 URL
    pub thumbnail: String,
    #[serde(rename = "lastPlayed")]
    pub last_played: String,
    /// 自由文本的进度描述
    pub progress: String,
    pub status: GameStatus,
}

impl GameRecord {
    /// 同步器新发现的游戏记录
    pub fn discovered(name: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            thumbnail: thumbnail.into(),
            last_played: today(),
            progress: "Not Started".to_string(),
            status: GameStatus::NotStarted,
        }
    }
}

/// 持久化文档 `{"games": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDoc {
    pub games: Vec<GameRecord>,
}

/// 目录操作错误
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// 当天日期，数据文件使用的 `%Y-%m-%d` 形式
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
