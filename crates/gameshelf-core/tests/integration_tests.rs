//! 集成测试 - 商店流程与数据文件兼容性
//!
//! 在本地端口跑一个 axum 模拟服务端，验证拉取、搜索、下载
//! 与目录收录之间的衔接，以及与既有 game_data.json 的兼容性。

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;

use gameshelf_core::{
    CatalogStore, GameStatus, RemoteGame, StoreClient, StoreError, StoreSession, SyncOptions,
    auto_add,
};

/// 绑定一个本地随机端口，返回监听器和基地址
async fn bind_local() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    (listener, base)
}

/// 在后台跑起模拟服务端，未挂的路径返回 404
fn serve_local(listener: TcpListener, app: Router) {
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("stub server error: {e}");
        }
    });
}

/// 单款游戏的清单，下载地址指向同一个应答器
fn stub_manifest(base: &str) -> String {
    format!(
        r#"[
    {{
        "name": "snake",
        "description": "Classic snake game",
        "author": "drie",
        "python_file": "snake.py",
        "python_file_url": "{base}/downloads/snake.py",
        "image_url": "{base}/downloads/snake.png"
    }}
]"#
    )
}

/// 挂好清单与两个下载文件的商店服务端
fn store_app(manifest: String) -> Router {
    Router::new()
        .route(
            "/games.json",
            get(move || {
                let body = manifest.clone();
                async move { body }
            }),
        )
        .route("/downloads/snake.py", get(|| async { "print('snake')\n" }))
        .route(
            "/downloads/snake.png",
            get(|| async { vec![0x89u8, b'P', b'N', b'G'] }),
        )
}

/// 测试完整的商店流程
///
/// 拉取清单 -> 下载脚本和缩略图 -> 同步收录进本地目录
#[tokio::test]
async fn test_store_download_registers_game() {
    let dir = tempfile::tempdir().unwrap();
    let (listener, base) = bind_local().await;
    serve_local(listener, store_app(stub_manifest(&base)));

    // 1. 拉取清单
    let client = StoreClient::new().unwrap();
    let mut session = StoreSession::new(dir.path());
    session.set_url(format!("{base}/games.json"));

    let games = client.fetch(&session).await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "snake");
    assert_eq!(games[0].author, "drie");

    // 2. 下载两个文件
    let report = client.download(&session, &games[0]).await;
    assert!(report.is_complete());
    assert_eq!(
        report.script.as_ref().unwrap(),
        &dir.path().join("snake.py")
    );
    assert_eq!(
        std::fs::read(dir.path().join("snake.py")).unwrap(),
        b"print('snake')\n"
    );
    assert!(dir.path().join("snake.png").exists());

    // 3. 同步后出现在目录里
    let store = CatalogStore::in_dir(dir.path());
    let added = auto_add(&store, dir.path(), &SyncOptions::default()).unwrap();
    assert_eq!(added, 1);

    let catalog = store.load().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].name, "snake");
    assert_eq!(catalog[0].thumbnail, "snake.png");
    assert_eq!(catalog[0].status, GameStatus::NotStarted);
}

/// 服务端错误状态码要归类为 BadStatus，不能混进解析错误
#[tokio::test]
async fn test_fetch_reports_http_error() {
    let (listener, base) = bind_local().await;
    serve_local(listener, Router::new());

    let client = StoreClient::new().unwrap();
    let mut session = StoreSession::default();
    session.set_url(format!("{base}/games.json"));

    let err = client.fetch(&session).await.unwrap_err();
    assert!(matches!(err, StoreError::BadStatus { .. }), "got {err:?}");
}

/// 响应体不是合法清单时报 Malformed
#[tokio::test]
async fn test_fetch_rejects_malformed_manifest() {
    let (listener, base) = bind_local().await;
    let app = Router::new().route("/games.json", get(|| async { "not json at all" }));
    serve_local(listener, app);

    let client = StoreClient::new().unwrap();
    let mut session = StoreSession::default();
    session.set_url(format!("{base}/games.json"));

    let err = client.fetch(&session).await.unwrap_err();
    assert!(matches!(err, StoreError::Malformed(_)), "got {err:?}");
}

/// 无匹配的搜索是正常结果，不是错误
#[tokio::test]
async fn test_search_no_match_is_empty_not_error() {
    let (listener, base) = bind_local().await;
    serve_local(listener, store_app(stub_manifest(&base)));

    let client = StoreClient::new().unwrap();
    let mut session = StoreSession::default();
    session.set_url(format!("{base}/games.json"));

    let hits = client.search(&session, "zzz").await.unwrap();
    assert!(hits.is_empty());
}

/// 测试两个下载互不影响
///
/// 脚本来自正常服务端，缩略图指向无人监听的端口：
/// 脚本照常落盘，缩略图单独报错
#[tokio::test]
async fn test_download_failures_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let (listener, base) = bind_local().await;
    let app = Router::new().route("/downloads/snake.py", get(|| async { "print('snake')\n" }));
    serve_local(listener, app);

    // 先占再放，得到一个确定无人监听的端口
    let dead = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = dead.local_addr().unwrap();
    drop(dead);

    let game = RemoteGame {
        name: "snake".to_string(),
        description: "Classic snake game".to_string(),
        author: "drie".to_string(),
        python_file: "snake.py".to_string(),
        python_file_url: format!("{base}/downloads/snake.py"),
        image_url: format!("http://{dead_addr}/snake.png"),
    };

    let client = StoreClient::new().unwrap();
    let session = StoreSession::new(dir.path());
    let report = client.download(&session, &game).await;

    assert!(report.script.is_ok());
    assert!(dir.path().join("snake.py").exists());
    assert!(matches!(report.image, Err(StoreError::Http(_))));
    assert!(!report.is_complete());
}

/// 测试与既有数据文件的兼容性
///
/// 数据文件可能由旧版工具生成（4 空格缩进、camelCase 字段），
/// 必须原样读入，写回时保持同样的排版和字段名
#[test]
fn test_reads_catalog_written_by_other_tools() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game_data.json");

    let legacy = concat!(
        "{\n",
        "    \"games\": [\n",
        "        {\n",
        "            \"name\": \"snake\",\n",
        "            \"thumbnail\": \"snake.png\",\n",
        "            \"lastPlayed\": \"2024-11-02\",\n",
        "            \"progress\": \"Not Started\",\n",
        "            \"status\": \"not_started\"\n",
        "        }\n",
        "    ]\n",
        "}"
    );
    std::fs::write(&path, legacy).unwrap();

    let store = CatalogStore::new(&path);
    let games = store.load().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "snake");
    assert_eq!(games[0].last_played, "2024-11-02");
    assert_eq!(games[0].status, GameStatus::NotStarted);

    // 启动记录写回后排版不变，lastPlayed 保持建档日期
    store.record_launch("snake", Some("level 2")).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("    \"games\""));
    assert!(written.contains("\"lastPlayed\": \"2024-11-02\""));
    assert!(written.contains("\"progress\": \"level 2\""));
    assert!(written.contains("\"status\": \"in_progress\""));
}

// 注意: 这个测试访问真实清单地址，需要外网
#[tokio::test]
#[ignore = "requires network access"]
async fn test_fetch_default_manifest() {
    let client = StoreClient::new().unwrap();
    let session = StoreSession::default();

    let games = client.fetch(&session).await.unwrap();
    println!("Default manifest lists {} games", games.len());
    for game in &games {
        println!("  - {} by {}", game.name, game.author);
    }
}
