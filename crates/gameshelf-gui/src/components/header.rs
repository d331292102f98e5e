//! 头部组件

use dioxus::prelude::*;

use crate::state::{AppView, LibraryStatus, StoreStatus};

/// 应用头部
#[component]
pub fn Header(
    view: AppView,
    library: LibraryStatus,
    store: StoreStatus,
    on_close: EventHandler<()>,
) -> Element {
    // 状态徽章跟随当前视图
    let (status_class, status_text) = match view {
        AppView::Library | AppView::Settings => match &library {
            LibraryStatus::Idle => ("status-badge", "就绪".to_string()),
            LibraryStatus::Syncing => ("status-badge busy", "正在同步游戏目录...".to_string()),
            LibraryStatus::Launching { name } => {
                ("status-badge busy", format!("{name} 运行中..."))
            }
        },
        AppView::Store => match &store {
            StoreStatus::Idle => ("status-badge", "商店就绪".to_string()),
            StoreStatus::Fetching => ("status-badge busy", "正在获取清单...".to_string()),
            StoreStatus::Ready => ("status-badge", "清单已加载".to_string()),
            StoreStatus::NoResults { query } => {
                ("status-badge", format!("没有与 {query:?} 匹配的游戏"))
            }
            StoreStatus::Downloading { name } => {
                ("status-badge busy", format!("正在下载 {name}..."))
            }
            StoreStatus::Error(_) => ("status-badge error", "商店异常".to_string()),
        },
    };

    rsx! {
        div { class: "logo",
            h1 { "🎮 游戏启动器" }
        }

        div { style: "display: flex; align-items: center; gap: 14px;",
            div { class: "{status_class}", "{status_text}" }
            button {
                class: "btn btn-danger",
                onclick: move |_| on_close.call(()),
                "关闭"
            }
        }
    }
}
