//! 主消息定义

use crate::backend::WorkerEvent;

use super::{EditorMessage, LogMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 切换焦点面板（编辑器 ↔ 日志）
    ToggleFocus,
    /// 显示帮助弹窗
    ShowHelp,
    /// 请求删除（先做预检，再弹确认框）
    RequestDelete,
    /// 编辑器子消息
    Editor(EditorMessage),
    /// 日志面板子消息
    Log(LogMessage),
    /// 弹窗子消息
    Modal(ModalMessage),
    /// 工作线程事件（由主循环排空队列后注入）
    Worker(WorkerEvent),
    /// 无操作，用于代替 Option::None
    Noop,
}
