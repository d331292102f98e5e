//! 商店模块测试
//!
//! 覆盖清单解析、搜索过滤、URL 文件名推导与会话状态

use std::path::PathBuf;

use super::client::{filter_by_name, url_basename};
use super::*;

// ============================================================================
// 清单解析测试
// ============================================================================

/// 验证能解析商店清单的既有格式
#[test]
fn test_manifest_deserialization() {
    let json = r#"[
        {
            "name": "snake",
            "description": "经典贪吃蛇",
            "author": "drie",
            "python_file": "snake.py",
            "python_file_url": "https://example.com/games/snake.py",
            "image_url": "https://example.com/games/snake.png"
        },
        {
            "name": "tetris",
            "description": "俄罗斯方块",
            "author": "drie",
            "python_file": "tetris.py",
            "python_file_url": "https://example.com/games/tetris.py",
            "image_url": "https://example.com/games/tetris.png"
        }
    ]"#;

    let games: Vec<RemoteGame> = serde_json::from_str(json).unwrap();

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].name, "snake");
    assert_eq!(games[0].author, "drie");
    assert_eq!(games[1].python_file_url, "https://example.com/games/tetris.py");
}

/// 验证缺字段的清单条目按格式错误处理
#[test]
fn test_manifest_missing_field_is_error() {
    let json = r#"[{ "name": "snake" }]"#;
    assert!(serde_json::from_str::<Vec<RemoteGame>>(json).is_err());
}

// ============================================================================
// 搜索过滤测试
// ============================================================================

fn sample_games() -> Vec<RemoteGame> {
    ["Snake", "Tetris", "Space Invaders"]
        .into_iter()
        .map(|name| RemoteGame {
            name: name.to_string(),
            description: String::new(),
            author: "drie".to_string(),
            python_file: format!("{}.py", name.to_lowercase()),
            python_file_url: format!("https://example.com/{name}.py"),
            image_url: format!("https://example.com/{name}.png"),
        })
        .collect()
}

/// 验证搜索是大小写不敏感的子串匹配
#[test]
fn test_filter_case_insensitive() {
    let hits = filter_by_name(sample_games(), "SNAKE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Snake");

    let hits = filter_by_name(sample_games(), "s");
    assert_eq!(hits.len(), 3);
}

/// 验证无匹配时返回空集而不是错误
#[test]
fn test_filter_no_match_is_empty() {
    let hits = filter_by_name(sample_games(), "zzz_no_match");
    assert!(hits.is_empty());
}

/// 验证空查询匹配全部
#[test]
fn test_filter_empty_query_matches_all() {
    assert_eq!(filter_by_name(sample_games(), "").len(), 3);
}

// ============================================================================
// url_basename 测试
// ============================================================================

/// 验证取 URL 路径最后一段作为落盘文件名
#[test]
fn test_url_basename() {
    assert_eq!(
        url_basename("https://example.com/games/snake.py").unwrap(),
        "snake.py"
    );
    // 查询串不进文件名
    assert_eq!(
        url_basename("https://example.com/games/snake.png?raw=true").unwrap(),
        "snake.png"
    );
}

/// 验证推导不出文件名的 URL 报错
#[test]
fn test_url_basename_rejects_empty() {
    assert!(matches!(
        url_basename("https://example.com/games/"),
        Err(StoreError::BadFileName(_))
    ));
    assert!(matches!(
        url_basename("not a url"),
        Err(StoreError::BadFileName(_))
    ));
}

// ============================================================================
// StoreSession 测试
// ============================================================================

/// 验证会话地址的切换与重置
#[test]
fn test_session_url_lifecycle() {
    let mut session = StoreSession::new("/tmp/games");
    assert_eq!(session.url(), DEFAULT_MANIFEST_URL);
    assert_eq!(session.download_dir(), PathBuf::from("/tmp/games").as_path());
    assert!(session.is_default());

    session.set_url("https://mirror.example.com/games.json");
    assert_eq!(session.url(), "https://mirror.example.com/games.json");
    assert!(!session.is_default());

    session.reset();
    assert!(session.is_default());
}

// ============================================================================
// DownloadReport 测试
// ============================================================================

/// 验证逐项结果的汇总
#[test]
fn test_download_report_summary() {
    let complete = DownloadReport {
        script: Ok(PathBuf::from("snake.py")),
        image: Ok(PathBuf::from("snake.png")),
    };
    assert!(complete.is_complete());
    assert!(complete.summary("snake").contains("下载完成"));

    let partial = DownloadReport {
        script: Ok(PathBuf::from("snake.py")),
        image: Err(StoreError::BadFileName("https://example.com/".to_string())),
    };
    assert!(!partial.is_complete());
    let text = partial.summary("snake");
    assert!(text.contains("脚本已下载"));
    assert!(text.contains("缩略图失败"));
}
