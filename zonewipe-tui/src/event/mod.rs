//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//! 判断顺序：
//!     - 有弹窗打开时，优先交给 handle_modal_keys
//!     - 全局快捷键（Ctrl+C / Alt+q 退出、F1 帮助、Ctrl+D 删除、Tab 焦点）
//!     - 根据焦点分发到编辑器或日志面板

mod handler;

pub use handler::{handle_event, poll_event};
