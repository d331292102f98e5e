//! 游戏列表组件

use dioxus::prelude::*;

use gameshelf_core::{GameRecord, GameStatus};

#[derive(Props, Clone, PartialEq)]
pub struct GameListProps {
    pub games: Vec<GameRecord>,
    pub selected: Option<String>,
    pub on_select: EventHandler<String>,
    pub on_refresh: EventHandler<()>,
    pub is_syncing: bool,
}

/// 本地游戏列表
#[component]
pub fn GameList(props: GameListProps) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { "🕹️ 本地游戏" }
                button {
                    class: "btn",
                    disabled: props.is_syncing,
                    onclick: move |_| props.on_refresh.call(()),
                    if props.is_syncing { "⏳" } else { "🔄" }
                }
            }

            if props.games.is_empty() {
                div { class: "empty-state",
                    div { class: "empty-state-icon", "📂" }
                    p {
                        if props.is_syncing {
                            "正在扫描游戏目录..."
                        } else {
                            "游戏目录里还没有游戏，把脚本和同名 PNG 放进去再刷新"
                        }
                    }
                }
            } else {
                div { class: "game-list",
                    for game in props.games.iter() {
                        GameItem {
                            key: "{game.name}",
                            game: game.clone(),
                            is_selected: props.selected.as_ref() == Some(&game.name),
                            on_click: props.on_select,
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct GameItemProps {
    game: GameRecord,
    is_selected: bool,
    on_click: EventHandler<String>,
}

#[component]
fn GameItem(props: GameItemProps) -> Element {
    let selected_class = if props.is_selected { "selected" } else { "" };
    let name = props.game.name.clone();

    let status_icon = match props.game.status {
        GameStatus::NotStarted => "🕹️",
        GameStatus::InProgress => "🎯",
    };

    rsx! {
        div {
            class: "game-item {selected_class}",
            onclick: move |_| props.on_click.call(name.clone()),

            div { class: "game-item-icon", "{status_icon}" }
            div { class: "game-item-name", "{props.game.name}" }
            div { class: "game-item-status", "{props.game.status.label()}" }
        }
    }
}
