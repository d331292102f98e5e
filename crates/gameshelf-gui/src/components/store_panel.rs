//! 商店面板组件
//!
//! 搜索、换源、逐项下载/运行，以及底部的操作记录。

use dioxus::prelude::*;

use gameshelf_core::{DEFAULT_MANIFEST_URL, RemoteGame};

use crate::state::StoreStatus;

#[derive(Props, Clone, PartialEq)]
pub struct StorePanelProps {
    pub games: Vec<RemoteGame>,
    pub status: StoreStatus,
    /// 当前使用的清单地址
    pub current_url: String,
    /// 已在本地目录里的游戏名，用来标记"已安装"
    pub installed: Vec<String>,
    pub feed: Vec<String>,
    pub on_fetch: EventHandler<()>,
    pub on_search: EventHandler<String>,
    pub on_download: EventHandler<RemoteGame>,
    pub on_play: EventHandler<RemoteGame>,
    pub on_set_url: EventHandler<String>,
    pub on_reset_url: EventHandler<()>,
}

/// 商店面板
#[component]
pub fn StorePanel(props: StorePanelProps) -> Element {
    let mut query = use_signal(String::new);
    let mut url_input = use_signal(|| props.current_url.clone());
    let busy = props.status.is_busy();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { "🛒 游戏商店" }
                button {
                    class: "btn",
                    disabled: busy,
                    onclick: move |_| props.on_fetch.call(()),
                    "🔄 刷新清单"
                }
            }

            // 搜索栏
            div { class: "store-toolbar",
                input {
                    class: "store-input",
                    placeholder: "按名称搜索...",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                button {
                    class: "btn btn-primary",
                    disabled: busy,
                    onclick: move |_| props.on_search.call(query.read().clone()),
                    "🔍 搜索"
                }
            }

            // 清单源
            div { class: "store-toolbar",
                input {
                    class: "store-input",
                    placeholder: "清单地址",
                    value: "{url_input}",
                    oninput: move |e| url_input.set(e.value()),
                }
                button {
                    class: "btn",
                    onclick: move |_| props.on_set_url.call(url_input.read().clone()),
                    "更换源"
                }
                button {
                    class: "btn",
                    onclick: move |_| {
                        // 草稿输入与恢复后的地址对齐
                        url_input.set(DEFAULT_MANIFEST_URL.to_string());
                        props.on_reset_url.call(());
                    },
                    "恢复默认"
                }
            }

            // 结果列表
            match &props.status {
                StoreStatus::Idle => rsx! {
                    div { class: "empty-state",
                        div { class: "empty-state-icon", "🛍️" }
                        p { "点击刷新获取商店清单" }
                    }
                },
                StoreStatus::NoResults { query } => rsx! {
                    div { class: "empty-state",
                        div { class: "empty-state-icon", "🔍" }
                        p { "没有与 {query:?} 匹配的游戏" }
                    }
                },
                _ => rsx! {
                    if props.games.is_empty() {
                        div { class: "empty-state",
                            div { class: "empty-state-icon", "🛍️" }
                            p {
                                if busy { "请稍候..." } else { "清单里还没有游戏" }
                            }
                        }
                    } else {
                        div { class: "store-list",
                            for game in props.games.iter() {
                                StoreItem {
                                    key: "{game.name}",
                                    game: game.clone(),
                                    is_installed: props.installed.contains(&game.name),
                                    busy,
                                    on_download: props.on_download,
                                    on_play: props.on_play,
                                }
                            }
                        }
                    }
                },
            }

            // 操作记录
            h3 { style: "margin: 10px 0;", "操作记录" }
            div { class: "store-log",
                if props.feed.is_empty() {
                    p { "-" }
                } else {
                    for line in props.feed.iter().rev().take(50) {
                        p { "{line}" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StoreItemProps {
    game: RemoteGame,
    is_installed: bool,
    busy: bool,
    on_download: EventHandler<RemoteGame>,
    on_play: EventHandler<RemoteGame>,
}

#[component]
fn StoreItem(props: StoreItemProps) -> Element {
    let game_for_download = props.game.clone();
    let game_for_play = props.game.clone();

    rsx! {
        div { class: "store-item",
            div { class: "store-item-info",
                div { class: "store-item-name",
                    "{props.game.name}"
                    if props.is_installed {
                        span { class: "installed-badge", " ✔ 已安装" }
                    }
                }
                div { class: "store-item-meta",
                    "{props.game.author} · {props.game.description}"
                }
            }

            button {
                class: "btn",
                disabled: props.busy,
                onclick: move |_| props.on_download.call(game_for_download.clone()),
                "📥 下载"
            }
            button {
                class: "btn btn-primary",
                disabled: props.busy,
                onclick: move |_| props.on_play.call(game_for_play.clone()),
                "▶ 运行"
            }
        }
    }
}
