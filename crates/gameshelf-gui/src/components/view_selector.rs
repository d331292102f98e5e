//! 视图选择器组件

use dioxus::prelude::*;

use crate::state::AppView;

/// 游戏库 / 商店 / 设置切换卡片
#[component]
pub fn ViewSelector(current: AppView, on_change: EventHandler<AppView>) -> Element {
    let views = vec![
        (AppView::Library, "🎮", "游戏库", "启动本地游戏"),
        (AppView::Store, "🛒", "游戏商店", "搜索并下载新游戏"),
        (AppView::Settings, "⚙️", "设置", "目录与解释器配置"),
    ];

    rsx! {
        for (view, icon, title, desc) in views {
            div {
                class: if current == view { "view-card active" } else { "view-card" },
                onclick: move |_| on_change.call(view),
                div { class: "view-card-icon", "{icon}" }
                div { class: "view-card-title", "{title}" }
                div { class: "view-card-desc", "{desc}" }
            }
        }
    }
}
