//! CSS 样式定义
//!
//! 深色主题的启动器样式

//! 主题颜色
//!
//! 这些常量保留用于未来的动态主题切换功能。
//! 当前 GLOBAL_CSS 使用硬编码值，但这些常量为未来的 Rust 端主题逻辑
//! 提供了一致的颜色定义参考。
#[expect(dead_code, reason = "reserved for future dynamic theming")]
pub mod colors {
    pub const PRIMARY: &str = "#3498DB"; // Blue
    pub const DANGER: &str = "#E74C3C"; // Red
    pub const SUCCESS: &str = "#2ECC71"; // Green
    pub const WARNING: &str = "#F1C40F"; // Yellow
    pub const BG: &str = "#2C3E50"; // Dark slate
    pub const PANEL: &str = "#34495E"; // Slate
    pub const TEXT: &str = "#ECF0F1"; // Off white
    pub const TEXT_DIM: &str = "#95A5A6"; // Gray
}

/// 全局 CSS 样式
pub const GLOBAL_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root {
    --primary: #3498DB;
    --danger: #E74C3C;
    --success: #2ECC71;
    --warning: #F1C40F;
    --bg: #2C3E50;
    --panel: #34495E;
    --panel-light: #3D566E;
    --text: #ECF0F1;
    --text-dim: #95A5A6;
    --font-main: 'Outfit', 'Inter', sans-serif;
}

body {
    font-family: var(--font-main);
    background-color: var(--bg);
    color: var(--text);
    padding: 20px;
    line-height: 1.5;
}

/* Grid Layout */
.app-container {
    max-width: 1280px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(12, 1fr);
    grid-auto-rows: minmax(80px, auto);
    gap: 16px;
}

.panel-tile {
    background: var(--panel);
    border-radius: 10px;
    padding: 20px;
    position: relative;
    overflow: hidden;
}

/* Specific Layout Roles */
.header-tile {
    grid-column: span 12;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.view-tile {
    grid-column: span 12;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 16px;
    padding: 0;
    background: transparent;
}

.main-left {
    grid-column: span 5;
    min-height: 480px;
}

.main-right {
    grid-column: span 7;
    min-height: 480px;
}

.full-width {
    grid-column: span 12;
    min-height: 520px;
}

/* Typography */
h1 { font-size: 28px; font-weight: 900; letter-spacing: -1px; }
h2 { font-size: 22px; font-weight: 800; margin-bottom: 14px; }
h3 { font-size: 16px; font-weight: 700; }

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 14px;
}

/* Buttons */
.btn {
    font-family: inherit;
    font-weight: 700;
    font-size: 14px;
    padding: 10px 20px;
    border: none;
    border-radius: 6px;
    cursor: pointer;
    background: var(--panel-light);
    color: var(--text);
    transition: filter 0.1s;
    display: inline-flex;
    align-items: center;
    gap: 8px;
}

.btn:hover { filter: brightness(1.15); }
.btn:disabled { opacity: 0.5; cursor: default; }

.btn-primary { background: var(--primary); color: white; }
.btn-danger { background: var(--danger); color: white; }

/* Status Badge */
.status-badge {
    background: var(--panel);
    border-radius: 999px;
    padding: 6px 16px;
    font-weight: 700;
    font-size: 14px;
}

.status-badge.busy { background: var(--warning); color: var(--bg); }
.status-badge.error { background: var(--danger); color: white; }

/* Game List */
.game-list {
    display: flex;
    flex-direction: column;
    gap: 10px;
    overflow-y: auto;
}

.game-item {
    border-radius: 8px;
    padding: 14px 16px;
    background: var(--panel-light);
    display: flex;
    align-items: center;
    gap: 14px;
    cursor: pointer;
    transition: background 0.15s;
}

.game-item:hover { background: #46627F; }
.game-item.selected { background: var(--primary); color: white; }

.game-item-icon { font-size: 22px; }
.game-item-name { font-weight: 700; flex: 1; }
.game-item-status { font-size: 12px; color: var(--text-dim); }
.game-item.selected .game-item-status { color: #D6EAF8; }

/* Detail Panel */
.detail-thumb {
    width: 160px;
    height: 160px;
    object-fit: cover;
    border-radius: 10px;
    display: block;
    margin: 0 auto 16px auto;
    background: var(--panel-light);
}

.detail-field {
    display: flex;
    justify-content: space-between;
    padding: 10px 0;
    border-bottom: 1px solid var(--panel-light);
    font-size: 15px;
}

.detail-field .label { color: var(--text-dim); font-weight: 600; }

/* Store */
.store-toolbar {
    display: flex;
    gap: 10px;
    margin-bottom: 16px;
    flex-wrap: wrap;
}

.store-input {
    flex: 1;
    min-width: 220px;
    padding: 10px 14px;
    border-radius: 6px;
    border: 1px solid var(--panel-light);
    background: var(--bg);
    color: var(--text);
    font-family: inherit;
    font-size: 14px;
}

.store-list {
    display: flex;
    flex-direction: column;
    gap: 10px;
    margin-bottom: 16px;
}

.store-item {
    border-radius: 8px;
    padding: 14px 16px;
    background: var(--panel-light);
    display: flex;
    align-items: center;
    gap: 14px;
}

.store-item-info { flex: 1; }
.store-item-name { font-weight: 700; }
.store-item-meta { font-size: 12px; color: var(--text-dim); }

.installed-badge {
    font-size: 12px;
    font-weight: 700;
    color: var(--success);
}

/* Activity Feed */
.store-log {
    background: #1B2A38;
    color: var(--success);
    padding: 16px;
    border-radius: 8px;
    font-family: 'Courier New', monospace;
    font-size: 13px;
    max-height: 180px;
    overflow-y: auto;
}

/* View Selection Cards */
.view-card {
    background: var(--panel);
    border-radius: 10px;
    padding: 18px;
    text-align: center;
    cursor: pointer;
    transition: background 0.15s;
}

.view-card:hover { background: var(--panel-light); }
.view-card.active { background: var(--primary); color: white; }

.view-card-icon { font-size: 32px; margin-bottom: 8px; }
.view-card-title { font-weight: 800; text-transform: uppercase; }

/* Empty state */
.empty-state { text-align: center; padding: 40px 0; color: var(--text-dim); }
.empty-state-icon { font-size: 44px; margin-bottom: 12px; }

/* Settings */
.settings-row {
    display: flex;
    align-items: center;
    gap: 14px;
    padding: 14px 0;
    border-bottom: 1px solid var(--panel-light);
}

.settings-row .label { width: 140px; color: var(--text-dim); font-weight: 600; }
.settings-row .value { flex: 1; word-break: break-all; }
"#;
