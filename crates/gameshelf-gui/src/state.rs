//! 应用状态管理
//!
//! 使用 Dioxus signals 管理应用状态

/// 应用视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Library,
    Store,
    Settings,
}

/// 游戏库状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LibraryStatus {
    #[default]
    Idle,
    Syncing,
    Launching {
        name: String,
    },
}

impl LibraryStatus {
    /// 是否有后台操作在进行
    pub fn is_busy(&self) -> bool {
        !matches!(self, LibraryStatus::Idle)
    }
}

/// 商店状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StoreStatus {
    /// 尚未拉取过清单
    #[default]
    Idle,
    Fetching,
    /// 清单已加载（列表可能为空）
    Ready,
    /// 搜索无匹配，是正常结果而不是错误
    NoResults {
        query: String,
    },
    Downloading {
        name: String,
    },
    Error(String),
}

impl StoreStatus {
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            StoreStatus::Fetching | StoreStatus::Downloading { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 验证游戏库的忙碌判定，同步和启动期间不重复触发后台任务
    #[test]
    fn test_library_busy_states() {
        assert!(!LibraryStatus::Idle.is_busy());
        assert!(LibraryStatus::Syncing.is_busy());
        assert!(
            LibraryStatus::Launching {
                name: "snake".to_string()
            }
            .is_busy()
        );
    }

    #[test]
    fn test_store_busy_states() {
        assert!(!StoreStatus::Idle.is_busy());
        assert!(!StoreStatus::Ready.is_busy());
        assert!(
            !StoreStatus::NoResults {
                query: "snake".to_string()
            }
            .is_busy()
        );
        assert!(!StoreStatus::Error("timeout".to_string()).is_busy());
        assert!(StoreStatus::Fetching.is_busy());
        assert!(
            StoreStatus::Downloading {
                name: "snake".to_string()
            }
            .is_busy()
        );
    }
}
