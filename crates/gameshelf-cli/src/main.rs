//! Gameshelf CLI
//!
//! 游戏目录与商店的命令行前端，与 GUI 共用同一套核心与设置

use anyhow::Result;
use clap::{Parser, Subcommand};

use gameshelf_core::{
    CatalogDoc, DEFAULT_MANIFEST_URL, LauncherSettings, RemoteGame, StoreClient, auto_add, launch,
};

#[derive(Parser)]
#[command(name = "gameshelf", version, about = "游戏启动器 - 命令行前端")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 列出目录里的游戏
    List {
        /// 以 JSON 输出（与 game_data.json 同构）
        #[arg(long)]
        json: bool,
    },
    /// 扫描游戏目录，收录新发现的游戏
    Sync,
    /// 启动一款游戏并在退出后更新状态
    Play {
        /// 游戏名（不含扩展名）
        name: String,
        /// 启动成功后写入的进度文本（不指定则保持原值）
        #[arg(short, long)]
        progress: Option<String>,
    },
    /// 游戏商店
    #[command(subcommand)]
    Store(StoreCommands),
}

#[derive(Subcommand)]
enum StoreCommands {
    /// 拉取完整清单
    Fetch,
    /// 按名称搜索（大小写不敏感）
    Search {
        /// 名称子串
        query: String,
    },
    /// 下载一款游戏（脚本 + 缩略图）并收录进目录
    Download {
        /// 清单里的游戏名
        name: String,
    },
    /// 更换清单地址并保存
    SetUrl {
        /// 新的清单 URL
        url: String,
    },
    /// 恢复默认清单地址
    ResetUrl,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = LauncherSettings::load();

    match cli.command {
        Commands::List { json } => {
            let games = settings.catalog_store().load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&CatalogDoc { games })?);
            } else if games.is_empty() {
                println!("目录里还没有游戏，先运行 gameshelf sync");
            } else {
                for game in &games {
                    println!(
                        "🎮 {:<20} [{}]  进度: {:<12} 上次游玩: {}",
                        game.name,
                        game.status.label(),
                        game.progress,
                        game.last_played
                    );
                }
            }
        }

        Commands::Sync => {
            let store = settings.catalog_store();
            let added = auto_add(&store, &settings.games_dir, &settings.sync_options())?;
            if added == 0 {
                println!("目录已是最新，没有新游戏");
            } else {
                println!("✅ 新收录 {added} 款游戏");
            }
        }

        Commands::Play { name, progress } => {
            let script = settings
                .games_dir
                .join(format!("{name}.{}", settings.script_extension));
            println!("🚀 启动 {name}...");
            launch(&settings.interpreter, &script).await?;

            settings
                .catalog_store()
                .record_launch(&name, progress.as_deref())?;
            println!("✅ {name} 已退出，状态已更新");
        }

        Commands::Store(store_cmd) => match store_cmd {
            StoreCommands::Fetch => {
                let client = StoreClient::new()?;
                let games = client.fetch(&settings.store_session()).await?;
                println!("🛒 清单共 {} 款游戏", games.len());
                print_remote_games(&games);
            }

            StoreCommands::Search { query } => {
                let client = StoreClient::new()?;
                let games = client.search(&settings.store_session(), &query).await?;
                if games.is_empty() {
                    // 无匹配是正常结果，不算错误
                    println!("没有与 {query:?} 匹配的游戏");
                } else {
                    println!("🔍 找到 {} 款游戏", games.len());
                    print_remote_games(&games);
                }
            }

            StoreCommands::Download { name } => {
                let client = StoreClient::new()?;
                let session = settings.store_session();
                let games = client.fetch(&session).await?;
                let Some(game) = games.iter().find(|g| g.name.eq_ignore_ascii_case(&name))
                else {
                    anyhow::bail!("清单里没有名为 {name:?} 的游戏");
                };

                println!("📥 下载 {}...", game.name);
                let report = client.download(&session, game).await;
                match &report.script {
                    Ok(path) => println!("   脚本: {}", path.display()),
                    Err(e) => eprintln!("   ❌ 脚本下载失败: {e}"),
                }
                match &report.image {
                    Ok(path) => println!("   缩略图: {}", path.display()),
                    Err(e) => eprintln!("   ❌ 缩略图下载失败: {e}"),
                }
                if !report.is_complete() {
                    anyhow::bail!("{} 的部分文件下载失败", game.name);
                }

                // 下载齐全的游戏立即收录
                let store = settings.catalog_store();
                let added = auto_add(&store, &settings.games_dir, &settings.sync_options())?;
                if added > 0 {
                    println!("✅ 已收录到游戏目录");
                }
            }

            StoreCommands::SetUrl { url } => {
                settings.manifest_url = url;
                settings.save()?;
                println!("🔗 清单地址已更新");
            }

            StoreCommands::ResetUrl => {
                settings.manifest_url = DEFAULT_MANIFEST_URL.to_string();
                settings.save()?;
                println!("🔗 已恢复默认清单地址");
            }
        },
    }

    Ok(())
}

fn print_remote_games(games: &[RemoteGame]) {
    for (i, game) in games.iter().enumerate() {
        println!(
            "   [{}] {} - {} (by {})",
            i, game.name, game.description, game.author
        );
    }
}
