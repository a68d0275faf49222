//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达：
//! Event 层把原始按键翻译成 Message，Update 层根据 Message 更新 Model。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod editor;         // 编辑器子消息
//!         mod log;            // 日志面板子消息
//!         mod modal;          // 弹窗子消息

mod app;
mod editor;
mod log;
mod modal;

pub use app::AppMessage;
pub use editor::EditorMessage;
pub use log::LogMessage;
pub use modal::ModalMessage;
