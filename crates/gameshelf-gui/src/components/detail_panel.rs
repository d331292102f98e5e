//! 详情面板组件

use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use dioxus::prelude::*;

use gameshelf_core::GameRecord;

#[derive(Props, Clone, PartialEq)]
pub struct DetailPanelProps {
    pub game: Option<GameRecord>,
    /// 缩略图相对这个目录解析
    pub games_dir: std::path::PathBuf,
    pub on_play: EventHandler<String>,
    pub is_launching: bool,
}

/// 右侧详情面板：缩略图、进度、上次游玩与启动按钮
#[component]
pub fn DetailPanel(props: DetailPanelProps) -> Element {
    let Some(game) = props.game.clone() else {
        return rsx! {
            div { class: "empty-state",
                div { class: "empty-state-icon", "👈" }
                p { "从左侧选择一款游戏查看详情" }
            }
        };
    };

    let name = game.name.clone();
    let thumbnail = thumbnail_data_uri(&props.games_dir, &game.thumbnail);

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { "{game.name}" }
            }

            if let Some(uri) = thumbnail {
                img { class: "detail-thumb", src: "{uri}" }
            } else {
                div { class: "detail-thumb", style: "display: flex; align-items: center; justify-content: center; font-size: 48px;",
                    "🎮"
                }
            }

            div { class: "detail-field",
                span { class: "label", "进度" }
                span { "{game.progress}" }
            }
            div { class: "detail-field",
                span { class: "label", "上次游玩" }
                span { "{game.last_played}" }
            }
            div { class: "detail-field",
                span { class: "label", "状态" }
                span { "{game.status.label()}" }
            }

            div { style: "margin-top: 20px;",
                button {
                    class: "btn btn-primary",
                    style: "width: 100%; justify-content: center; font-size: 16px;",
                    disabled: props.is_launching,
                    onclick: move |_| props.on_play.call(name.clone()),
                    if props.is_launching { "⏳ 运行中..." } else { "▶ 开始游戏" }
                }
            }
        }
    }
}

/// 把缩略图文件编码成内联 data URI，读不到时返回 None
fn thumbnail_data_uri(dir: &Path, thumbnail: &str) -> Option<String> {
    let path = dir.join(thumbnail);
    let bytes = std::fs::read(&path).ok()?;
    Some(format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(bytes)
    ))
}
