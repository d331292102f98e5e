//! 商店模块
//!
//! 远端游戏商店的客户端：从清单地址拉取可下载的游戏列表，
//! 按名称搜索，并把"脚本 + 缩略图"成对下载到本地。
//!
//! 清单地址放在 [`StoreSession`] 里随会话走，改源和重置都只改
//! 会话内的这一份，不存在全局可变状态。

pub mod client;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use client::{StoreClient, StoreSession};

/// 默认清单地址
pub const DEFAULT_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/drie/gameshelf-store/main/games.json";

/// RemoteGame - 必须与商店清单的描述符字段完全一致
/// ```json
/// [
///     {
///         "name": "snake",
///         "description": "经典贪吃蛇",
///         "author": "drie",
///         "python_file": "snake.py",
///         "python_file_url": "https://example.com/games/snake.py",
///         "image_url": "https://example.com/games/snake.png"
///     }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteGame {
    pub name: String,
    pub description: String,
    pub author: String,
    /// 清单声明的脚本文件名，仅展示用；落盘名取自 URL 最后一段
    pub python_file: String,
    pub python_file_url: String,
    pub image_url: String,
}

/// 商店操作错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    BadStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Malformed manifest: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Cannot derive a file name from URL: {0}")]
    BadFileName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 一次下载的逐项结果
///
/// 脚本与缩略图分别尝试、分别汇报，一项失败不会中止另一项。
#[derive(Debug)]
pub struct DownloadReport {
    pub script: Result<PathBuf, StoreError>,
    pub image: Result<PathBuf, StoreError>,
}

impl DownloadReport {
    /// 两个制品都已落盘
    pub fn is_complete(&self) -> bool {
        self.script.is_ok() && self.image.is_ok()
    }

    /// 界面提示用的结果摘要
    pub fn summary(&self, name: &str) -> String {
        match (&self.script, &self.image) {
            (Ok(_), Ok(_)) => format!("✅ {name} 下载完成"),
            (Ok(_), Err(e)) => format!("⚠️ {name} 脚本已下载，缩略图失败: {e}"),
            (Err(e), Ok(_)) => format!("⚠️ {name} 缩略图已下载，脚本失败: {e}"),
            (Err(script), Err(image)) => {
                format!("❌ {name} 下载失败。脚本: {script}；缩略图: {image}")
            }
        }
    }
}
