//! 终端会话的进入与退出
//!
//! `main` 在主循环前后各调用一次。退出时必须恢复终端，
//! 否则用户的 shell 会停留在 raw mode / 备用屏幕里。

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// zonewipe 使用的终端句柄（crossterm 后端，写 stdout）
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 进入 raw mode 并切换到备用屏幕，返回可绘制的终端句柄
pub fn init_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// 离开备用屏幕，关闭 raw mode，交还光标
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
