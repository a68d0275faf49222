//! UI 组件

pub mod editor;
pub mod log;
pub mod modal;
pub mod progress;
pub mod statusbar;
