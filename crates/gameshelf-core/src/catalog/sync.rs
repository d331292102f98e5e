//! 目录同步
//!
//! 扫描游戏目录，把"脚本 + 同名缩略图"成对出现的新游戏补进目录，
//! 已有记录一律不动。重复运行是幂等的。

use std::env;
use std::path::Path;

use log::{debug, info};

use super::{CatalogDoc, CatalogError, GameRecord};
use super::store::CatalogStore;

/// 同步选项
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// 识别为游戏脚本的扩展名（不含点）
    pub script_extension: String,
    /// 按文件名排除的条目，默认含启动器自身
    pub exclude: Vec<String>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            script_extension: "py".to_string(),
            exclude: launcher_file_name().into_iter().collect(),
        }
    }
}

/// 当前可执行文件的文件名，用于把启动器自己排除在扫描之外
fn launcher_file_name() -> Option<String> {
    let exe = env::current_exe().ok()?;
    Some(exe.file_name()?.to_string_lossy().into_owned())
}

/// 扫描 `dir`，把新发现的游戏追加进目录，返回新增条数
///
/// 候选条件：扩展名匹配、文件名不在排除表、名字（去扩展名）尚未
/// 入库、且旁边存在同名 `.png` 缩略图。缺图的脚本跳过，等图补齐后
/// 下次同步再收录。目录顺序按文件名排序，保证多次运行结果稳定。
///
/// 无论是否有新增都会写回一次文档；内容未变时写回等价于无操作。
pub fn auto_add(
    store: &CatalogStore,
    dir: &Path,
    options: &SyncOptions,
) -> Result<usize, CatalogError> {
    // load() 顺带完成首次引导
    let mut games = store.load()?;

    let mut entries: Vec<_> = fs_read_dir(dir)?;
    entries.sort();

    let mut added = 0usize;
    for path in entries {
        if path.extension().and_then(|e| e.to_str()) != Some(options.script_extension.as_str()) {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if options.exclude.iter().any(|e| e == file_name) {
            debug!("auto_add: skipping excluded entry {file_name:?}");
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if games.iter().any(|g| g.name == name) {
            continue;
        }

        let thumbnail = format!("{name}.png");
        if !dir.join(&thumbnail).exists() {
            debug!("auto_add: {name:?} has no thumbnail, skipping");
            continue;
        }

        info!("auto_add: discovered new game {name:?}");
        games.push(GameRecord::discovered(name, &thumbnail));
        added += 1;
    }

    store.write_doc(&CatalogDoc { games })?;
    if added > 0 {
        info!("auto_add: {added} new game(s) registered");
    }
    Ok(added)
}

fn fs_read_dir(dir: &Path) -> Result<Vec<std::path::PathBuf>, CatalogError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    Ok(paths)
}
