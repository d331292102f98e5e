//! UI 组件模块

mod detail_panel;
mod game_list;
mod header;
mod store_panel;
mod view_selector;

pub use detail_panel::DetailPanel;
pub use game_list::GameList;
pub use header::Header;
pub use store_panel::StorePanel;
pub use view_selector::ViewSelector;
