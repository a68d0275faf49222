//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每轮主循环由 `layout::render` 画出整个界面。

pub mod components;
mod layout;
pub mod theme;

pub use layout::render;
