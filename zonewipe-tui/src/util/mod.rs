//! 工具模块：终端初始化和清理

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
