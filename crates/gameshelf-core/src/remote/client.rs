//! 商店客户端
//!
//! 清单拉取、搜索与游戏下载。
//!
//! # 行为
//!
//! - 清单是一个 JSON 数组，字段见 [`RemoteGame`]
//! - 搜索是大小写不敏感的名称子串匹配，空结果是正常情况
//! - 下载的两个制品并发进行、互不影响，结果逐项汇报

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};

use super::{DEFAULT_MANIFEST_URL, DownloadReport, RemoteGame, StoreError};

/// 商店会话
///
/// 持有当前清单地址与下载目录。界面上的"更换源"和"恢复默认"
/// 都只改会话里的这一份状态，不存在全局可变 URL。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSession {
    url: String,
    download_dir: PathBuf,
}

impl Default for StoreSession {
    fn default() -> Self {
        Self::new(".")
    }
}

impl StoreSession {
    /// 默认清单地址 + 指定下载目录
    ///
    /// 下载目录通常就是游戏目录，这样下载完成的游戏会被下一次
    /// 同步自动收录。
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            url: DEFAULT_MANIFEST_URL.to_string(),
            download_dir: download_dir.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// 切换清单地址
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        info!("Store manifest URL changed to {}", self.url);
    }

    /// 恢复默认清单地址
    pub fn reset(&mut self) {
        self.url = DEFAULT_MANIFEST_URL.to_string();
        info!("Store manifest URL reset to default");
    }

    pub fn is_default(&self) -> bool {
        self.url == DEFAULT_MANIFEST_URL
    }
}

/// 商店 HTTP 客户端
///
/// 只持有连接池，会话状态由调用方传入。所有方法都是异步的，
/// 调用方负责把它们放进后台任务，不要阻塞界面线程。
pub struct StoreClient {
    client: reqwest::Client,
}

impl StoreClient {
    /// 单个请求的超时
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(Self::TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// 拉取并解析清单
    pub async fn fetch(&self, session: &StoreSession) -> Result<Vec<RemoteGame>, StoreError> {
        let url = session.url();
        info!("Fetching store manifest from {url}");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(StoreError::BadStatus {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let games: Vec<RemoteGame> = serde_json::from_str(&body)?;
        debug!("Manifest lists {} game(s)", games.len());
        Ok(games)
    }

    /// 拉取清单并按名称过滤
    ///
    /// 空结果表示"没有匹配"，与拉取失败是两回事。
    pub async fn search(
        &self,
        session: &StoreSession,
        query: &str,
    ) -> Result<Vec<RemoteGame>, StoreError> {
        let games = self.fetch(session).await?;
        let hits = filter_by_name(games, query);
        debug!("search {query:?}: {} hit(s)", hits.len());
        Ok(hits)
    }

    /// 下载一个游戏的脚本与缩略图
    pub async fn download(&self, session: &StoreSession, game: &RemoteGame) -> DownloadReport {
        info!("Downloading {} from store", game.name);

        let dir = session.download_dir();
        let (script, image) = tokio::join!(
            self.download_artifact(dir, &game.python_file_url),
            self.download_artifact(dir, &game.image_url),
        );

        if let Err(e) = &script {
            warn!("Script download failed for {}: {e}", game.name);
        }
        if let Err(e) = &image {
            warn!("Image download failed for {}: {e}", game.name);
        }

        DownloadReport { script, image }
    }

    /// 下载单个文件，落盘名取 URL 路径的最后一段
    async fn download_artifact(&self, dir: &Path, url: &str) -> Result<PathBuf, StoreError> {
        let name = url_basename(url)?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(StoreError::BadStatus {
                status: response.status(),
                url: url.to_string(),
            });
        }
        let bytes = response.bytes().await?;

        let path = dir.join(&name);
        tokio::fs::write(&path, &bytes).await?;
        debug!("Saved {} byte(s) to {path:?}", bytes.len());
        Ok(path)
    }
}

/// 大小写不敏感的名称子串过滤
pub(crate) fn filter_by_name(games: Vec<RemoteGame>, query: &str) -> Vec<RemoteGame> {
    let needle = query.to_lowercase();
    games
        .into_iter()
        .filter(|g| g.name.to_lowercase().contains(&needle))
        .collect()
}

/// URL 路径的最后一段，查询串不算在内
pub(crate) fn url_basename(url: &str) -> Result<String, StoreError> {
    let parsed =
        reqwest::Url::parse(url).map_err(|_| StoreError::BadFileName(url.to_string()))?;
    parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| StoreError::BadFileName(url.to_string()))
}
