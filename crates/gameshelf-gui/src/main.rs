//! Gameshelf GUI Application
//!
//! 基于 Dioxus 的桌面游戏启动器：左侧游戏列表、右侧详情面板，
//! 以及内置的游戏商店。
//!
//! # 架构
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Dioxus Desktop App                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │   Header    │  │   GameList  │  │   DetailPanel       │  │
//! │  │  (状态栏)    │  │  (游戏列表)  │  │   (详情 / 启动)     │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! │  ┌─────────────────────────────────────────────────────┐    │
//! │  │   StorePanel (商店：搜索 / 下载 / 换源)              │    │
//! │  └─────────────────────────────────────────────────────┘    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                       Core Logic                            │
//! │                 (gameshelf-core crate)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod components;
mod state;
mod styles;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // 初始化日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Gameshelf GUI...");

    // 启动 Dioxus 桌面应用，窗口最大化以接近全屏模式
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(WindowBuilder::new().with_title("游戏启动器").with_maximized(true)),
        )
        .launch(app::App);
}
