//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧域名编辑器
    #[default]
    Editor,
    /// 右侧日志面板
    Log,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Editor => FocusPanel::Log,
            FocusPanel::Log => FocusPanel::Editor,
        }
    }

    /// 是否是编辑器面板
    pub fn is_editor(&self) -> bool {
        matches!(self, FocusPanel::Editor)
    }

    /// 是否是日志面板
    pub fn is_log(&self) -> bool {
        matches!(self, FocusPanel::Log)
    }
}
