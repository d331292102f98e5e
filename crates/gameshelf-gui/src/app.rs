//! 主应用组件

use dioxus::prelude::*;

use crate::components::{DetailPanel, GameList, Header, StorePanel, ViewSelector};
use crate::state::{AppView, LibraryStatus, StoreStatus};
use crate::styles::GLOBAL_CSS;

use gameshelf_core::{
    DEFAULT_MANIFEST_URL, GameRecord, LauncherSettings, RemoteGame, StoreClient, auto_add, launch,
};

/// 主应用
#[component]
pub fn App() -> Element {
    // 应用状态
    let mut settings = use_signal(LauncherSettings::load);
    let mut view = use_signal(AppView::default);
    let mut games = use_signal(Vec::<GameRecord>::new);
    let mut selected = use_signal(|| Option::<String>::None);
    let library_status = use_signal(|| LibraryStatus::Idle);

    // 商店状态
    let store_games = use_signal(Vec::<RemoteGame>::new);
    let store_status = use_signal(|| StoreStatus::Idle);
    let mut store_feed = use_signal(Vec::<String>::new);

    // 设置视图的草稿输入
    let mut interpreter_input = use_signal(|| settings.read().interpreter.clone());
    let mut manifest_input = use_signal(|| settings.read().manifest_url.clone());

    // 启动时同步一次游戏目录并加载列表
    use_future(move || {
        let current = settings.read().clone();
        async move { refresh_library(current, games, library_status).await }
    });

    // 事件处理器
    let on_view_change = move |new_view: AppView| {
        view.set(new_view);
        if new_view == AppView::Settings {
            // 草稿输入与当前设置对齐
            interpreter_input.set(settings.read().interpreter.clone());
            manifest_input.set(settings.read().manifest_url.clone());
        }
    };

    let on_close = move |_| {
        log::info!("Shutting down");
        dioxus::desktop::window().close();
    };

    let on_select = move |name: String| {
        selected.set(Some(name));
    };

    let on_refresh = move |_| {
        // 同步或启动进行中时忽略重复触发
        if library_status.read().is_busy() {
            return;
        }
        let current = settings.read().clone();
        spawn(async move {
            refresh_library(current, games, library_status).await;
        });
    };

    let on_play = move |name: String| {
        if library_status.read().is_busy() {
            return;
        }
        let current = settings.read().clone();
        spawn(async move {
            play_game(current, name, games, library_status).await;
        });
    };

    let on_fetch = move |_| {
        let current = settings.read().clone();
        spawn(async move {
            store_request(current, None, store_games, store_status, store_feed).await;
        });
    };

    let on_search = move |query: String| {
        let current = settings.read().clone();
        spawn(async move {
            store_request(current, Some(query), store_games, store_status, store_feed).await;
        });
    };

    let on_download = move |game: RemoteGame| {
        let current = settings.read().clone();
        spawn(async move {
            download_game(current, game, games, library_status, store_status, store_feed).await;
        });
    };

    // 商店条目的"运行"：已下载的按本地游戏启动，否则提示先下载
    let on_store_play = move |game: RemoteGame| {
        if library_status.read().is_busy() {
            return;
        }
        let installed = games.read().iter().any(|g| g.name == game.name);
        let current = settings.read().clone();
        if installed {
            spawn(async move {
                play_game(current, game.name, games, library_status).await;
            });
        } else {
            store_feed.with_mut(|log| log.push(format!("⚠️ {} 尚未下载", game.name)));
            spawn(async move {
                show_info("未下载", format!("{} 尚未下载，请先点击下载", game.name)).await;
            });
        }
    };

    let on_set_url = move |url: String| {
        if url.trim().is_empty() {
            return;
        }
        apply_manifest_url(settings, url, store_feed);
    };

    let on_reset_url = move |_| {
        apply_manifest_url(settings, DEFAULT_MANIFEST_URL.to_string(), store_feed);
    };

    let on_pick_games_dir = move |_| {
        spawn(async move {
            let Some(folder) = rfd::AsyncFileDialog::new()
                .set_title("选择游戏目录")
                .pick_folder()
                .await
            else {
                return;
            };

            let dir = folder.path().to_path_buf();
            log::info!("Games directory changed to {dir:?}");
            settings.with_mut(|s| {
                s.games_dir = dir.clone();
                s.download_dir = dir;
            });
            if let Err(e) = settings.read().save() {
                log::warn!("Failed to save settings: {e}");
            }

            let current = settings.read().clone();
            refresh_library(current, games, library_status).await;
        });
    };

    let on_save_settings = move |_| {
        settings.with_mut(|s| {
            s.interpreter = interpreter_input.read().clone();
            s.manifest_url = manifest_input.read().clone();
        });
        if let Err(e) = settings.read().save() {
            let text = format!("保存设置失败: {e}");
            spawn(async move { show_error(text).await });
        }
        view.set(AppView::Library);
    };

    // 当前选中的游戏记录
    let selected_game = selected
        .read()
        .as_ref()
        .and_then(|name| games.read().iter().find(|g| &g.name == name).cloned());

    rsx! {
        style { "{GLOBAL_CSS}" }

        div { class: "app-container",
            // 头部
            div { class: "panel-tile header-tile",
                Header {
                    view: *view.read(),
                    library: library_status.read().clone(),
                    store: store_status.read().clone(),
                    on_close: on_close,
                }
            }

            // 视图切换
            div { class: "view-tile",
                ViewSelector {
                    current: *view.read(),
                    on_change: on_view_change,
                }
            }

            // 主内容区
            match *view.read() {
                AppView::Library => rsx! {
                    // 游戏列表 (左)
                    div { class: "panel-tile main-left",
                        GameList {
                            games: games.read().clone(),
                            selected: selected.read().clone(),
                            on_select: on_select,
                            on_refresh: on_refresh,
                            is_syncing: matches!(*library_status.read(), LibraryStatus::Syncing),
                        }
                    }

                    // 详情面板 (右)
                    div { class: "panel-tile main-right",
                        DetailPanel {
                            game: selected_game,
                            games_dir: settings.read().games_dir.clone(),
                            on_play: on_play,
                            is_launching: matches!(
                                *library_status.read(),
                                LibraryStatus::Launching { .. }
                            ),
                        }
                    }
                },

                AppView::Store => rsx! {
                    div { class: "panel-tile full-width",
                        StorePanel {
                            games: store_games.read().clone(),
                            status: store_status.read().clone(),
                            current_url: settings.read().manifest_url.clone(),
                            installed: games.read().iter().map(|g| g.name.clone()).collect::<Vec<_>>(),
                            feed: store_feed.read().clone(),
                            on_fetch: on_fetch,
                            on_search: on_search,
                            on_download: on_download,
                            on_play: on_store_play,
                            on_set_url: on_set_url,
                            on_reset_url: on_reset_url,
                        }
                    }
                },

                AppView::Settings => rsx! {
                    div { class: "panel-tile full-width",
                        div { class: "card-header",
                            h2 { "⚙️ 设置" }
                        }

                        div { class: "settings-row",
                            span { class: "label", "游戏目录" }
                            span { class: "value", "{settings.read().games_dir.display()}" }
                            button { class: "btn", onclick: on_pick_games_dir, "📁 更换目录" }
                        }
                        div { class: "settings-row",
                            span { class: "label", "脚本解释器" }
                            input {
                                class: "store-input",
                                value: "{interpreter_input}",
                                oninput: move |e| interpreter_input.set(e.value()),
                            }
                        }
                        div { class: "settings-row",
                            span { class: "label", "清单地址" }
                            input {
                                class: "store-input",
                                value: "{manifest_input}",
                                oninput: move |e| manifest_input.set(e.value()),
                            }
                        }

                        button {
                            class: "btn btn-primary",
                            style: "margin-top: 24px;",
                            onclick: on_save_settings,
                            "保存并返回"
                        }
                    }
                },
            }
        }
    }
}

/// 同步游戏目录并重新加载列表
///
/// 读不动目录时弹窗提示并退回空列表，进程继续运行。
async fn refresh_library(
    settings: LauncherSettings,
    mut games: Signal<Vec<GameRecord>>,
    mut status: Signal<LibraryStatus>,
) {
    status.set(LibraryStatus::Syncing);

    let store = settings.catalog_store();
    let synced = auto_add(&store, &settings.games_dir, &settings.sync_options())
        .and_then(|added| store.load().map(|list| (added, list)));

    match synced {
        Ok((added, list)) => {
            if added > 0 {
                log::info!("Sync registered {added} new game(s)");
            }
            games.set(list);
            status.set(LibraryStatus::Idle);
        }
        Err(e) => {
            games.set(Vec::new());
            status.set(LibraryStatus::Idle);
            show_error(format!("读取游戏目录失败: {e}")).await;
        }
    }
}

/// 后台启动游戏，正常退出后记录状态流转并刷新列表
async fn play_game(
    settings: LauncherSettings,
    name: String,
    mut games: Signal<Vec<GameRecord>>,
    mut status: Signal<LibraryStatus>,
) {
    let script = settings
        .games_dir
        .join(format!("{name}.{}", settings.script_extension));

    status.set(LibraryStatus::Launching { name: name.clone() });

    match launch(&settings.interpreter, &script).await {
        Ok(()) => {
            let store = settings.catalog_store();
            // 真实的进度上报是未定的扩展点，这里只翻转状态
            if let Err(e) = store.record_launch(&name, None) {
                show_error(format!("保存 {name} 的进度失败: {e}")).await;
            }
            match store.load() {
                Ok(list) => games.set(list),
                Err(e) => {
                    games.set(Vec::new());
                    show_error(format!("重新读取目录失败: {e}")).await;
                }
            }
            status.set(LibraryStatus::Idle);
        }
        Err(e) => {
            status.set(LibraryStatus::Idle);
            show_error(format!("启动 {name} 失败: {e}")).await;
        }
    }
}

/// 拉取或搜索商店清单
async fn store_request(
    settings: LauncherSettings,
    query: Option<String>,
    mut store_games: Signal<Vec<RemoteGame>>,
    mut status: Signal<StoreStatus>,
    mut feed: Signal<Vec<String>>,
) {
    status.set(StoreStatus::Fetching);
    match &query {
        Some(q) => feed.with_mut(|log| log.push(format!("🔍 搜索 {q:?}..."))),
        None => feed.with_mut(|log| log.push("📥 获取清单...".to_string())),
    }

    let client = match StoreClient::new() {
        Ok(c) => c,
        Err(e) => {
            status.set(StoreStatus::Error(e.to_string()));
            show_error(format!("初始化商店客户端失败: {e}")).await;
            return;
        }
    };

    let session = settings.store_session();
    let result = match &query {
        Some(q) => client.search(&session, q).await,
        None => client.fetch(&session).await,
    };

    match result {
        Ok(list) => {
            if list.is_empty() && query.is_some() {
                let q = query.unwrap_or_default();
                feed.with_mut(|log| log.push(format!("没有与 {q:?} 匹配的游戏")));
                store_games.set(Vec::new());
                status.set(StoreStatus::NoResults { query: q });
            } else {
                feed.with_mut(|log| log.push(format!("✅ 清单加载完成，共 {} 款", list.len())));
                store_games.set(list);
                status.set(StoreStatus::Ready);
            }
        }
        Err(e) => {
            store_games.set(Vec::new());
            status.set(StoreStatus::Error(e.to_string()));
            feed.with_mut(|log| log.push(format!("❌ 获取失败: {e}")));
            show_error(format!("获取商店清单失败: {e}")).await;
        }
    }
}

/// 下载商店游戏的脚本与缩略图，下载齐全后同步进本地列表
async fn download_game(
    settings: LauncherSettings,
    game: RemoteGame,
    games: Signal<Vec<GameRecord>>,
    library_status: Signal<LibraryStatus>,
    mut store_status: Signal<StoreStatus>,
    mut feed: Signal<Vec<String>>,
) {
    store_status.set(StoreStatus::Downloading {
        name: game.name.clone(),
    });

    let client = match StoreClient::new() {
        Ok(c) => c,
        Err(e) => {
            store_status.set(StoreStatus::Error(e.to_string()));
            show_error(format!("初始化商店客户端失败: {e}")).await;
            return;
        }
    };

    let report = client.download(&settings.store_session(), &game).await;
    let summary = report.summary(&game.name);
    feed.with_mut(|log| log.push(summary.clone()));
    store_status.set(StoreStatus::Ready);

    if report.is_complete() {
        refresh_library(settings, games, library_status).await;
    } else {
        // 两个制品各自汇报，哪个失败提示哪个
        show_error(summary).await;
    }
}

/// 更换商店清单地址并随设置持久化
fn apply_manifest_url(
    mut settings: Signal<LauncherSettings>,
    url: String,
    mut feed: Signal<Vec<String>>,
) {
    settings.with_mut(|s| s.manifest_url = url.clone());
    feed.with_mut(|log| log.push(format!("🔗 清单源: {url}")));
    if let Err(e) = settings.read().save() {
        log::warn!("Failed to save settings: {e}");
    }
}

/// 模态错误提示
async fn show_error(text: String) {
    log::error!("{text}");
    rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("错误")
        .set_description(text)
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}

/// 模态信息提示
async fn show_info(title: &str, text: String) {
    rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(title)
        .set_description(text)
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}
