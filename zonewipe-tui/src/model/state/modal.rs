//! 弹窗/对话框状态

/// 确认删除弹窗的按钮焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmFocus {
    /// 默认落在取消上，避免误触回车直接删除
    #[default]
    Cancel,
    Delete,
}

impl ConfirmFocus {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Cancel => Self::Delete,
            Self::Delete => Self::Cancel,
        }
    }
}

/// 弹窗枚举：每种弹窗都是一个变体，携带该弹窗的所有数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 确认删除（列出即将删除的域名）
    ConfirmDelete {
        domains: Vec<String>,
        focus: ConfirmFocus,
    },
    /// 错误提示
    Error { title: String, message: String },
    /// 帮助
    Help,
}

/// 弹窗状态容器：管理当前活动的弹窗
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// None = 无弹窗, Some = 有弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// 显示确认删除弹窗
    pub fn show_confirm_delete(&mut self, domains: Vec<String>) {
        self.active = Some(Modal::ConfirmDelete {
            domains,
            focus: ConfirmFocus::default(),
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
