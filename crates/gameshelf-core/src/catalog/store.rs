//! 目录存储
//!
//! `game_data.json` 的读取、引导与整文件写回。
//!
//! 数据文件是单一 JSON 文档 `{"games": [...]}`，键序固定、4 空格缩进，
//! 与既有文件逐字节兼容。写入先落临时文件再重命名；没有跨进程锁，
//! 两个实例同时更新时后写者胜出。

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use super::{CatalogDoc, CatalogError, GameRecord, GameStatus};

/// 目录存储
///
/// 持有数据文件路径，所有操作围绕该文件整读整写。
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// 数据文件的默认文件名
    pub const DEFAULT_FILE: &'static str = "game_data.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 在指定目录下使用默认文件名
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::DEFAULT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载目录
    ///
    /// 文件不存在时写入空文档 `{"games": []}` 并返回空列表，
    /// 因此重复加载是幂等的。读取或解析失败返回错误，由前端
    /// 统一提示并退回空列表。
    pub fn load(&self) -> Result<Vec<GameRecord>, CatalogError> {
        if !self.path.exists() {
            debug!("Catalog {:?} missing, bootstrapping empty document", self.path);
            self.write_doc(&CatalogDoc::default())?;
            return Ok(Vec::new());
        }

        Ok(self.read_doc()?.games)
    }

    /// 更新指定游戏的进度与状态
    ///
    /// 整读整写：命中第一条同名记录并原地修改，`name` 不存在时
    /// 静默跳过。并发调用没有保护，后写者胜出。
    pub fn update(
        &self,
        name: &str,
        progress: &str,
        status: GameStatus,
    ) -> Result<(), CatalogError> {
        let mut doc = self.read_doc()?;

        if let Some(game) = doc.games.iter_mut().find(|g| g.name == name) {
            game.progress = progress.to_string();
            game.status = status;
        } else {
            debug!("update: no record named {name:?}, leaving catalog unchanged");
        }

        self.write_doc(&doc)
    }

    /// 记录一次成功启动
    ///
    /// 状态流转 `not_started -> in_progress`。进度文本只在调用方
    /// 明确给出时才替换，不给出则保持原值。`name` 不存在时静默跳过。
    pub fn record_launch(
        &self,
        name: &str,
        progress: Option<&str>,
    ) -> Result<(), CatalogError> {
        let mut doc = self.read_doc()?;

        if let Some(game) = doc.games.iter_mut().find(|g| g.name == name) {
            if let Some(text) = progress {
                game.progress = text.to_string();
            }
            game.status = GameStatus::InProgress;
        } else {
            debug!("record_launch: no record named {name:?}");
        }

        self.write_doc(&doc)
    }

    fn read_doc(&self) -> Result<CatalogDoc, CatalogError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// 以固定键序、4 空格缩进写出整个文档
    ///
    /// 先写 `.json.tmp` 再重命名到位。
    pub(crate) fn write_doc(&self, doc: &CatalogDoc) -> Result<(), CatalogError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        doc.serialize(&mut ser)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &buf)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Wrote {} record(s) to {:?}", doc.games.len(), self.path);
        Ok(())
    }
}
