//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::{AppMessage, EditorMessage, LogMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    // Ctrl+C: 退出
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        return AppMessage::Quit;
    }

    // Alt+q: 退出
    if key.modifiers == KeyModifiers::ALT && key.code == KeyCode::Char('q') {
        return AppMessage::Quit;
    }

    // F1: 帮助
    if key.code == KeyCode::F(1) {
        return AppMessage::ShowHelp;
    }

    // Ctrl+D: 请求删除
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('d') {
        return AppMessage::RequestDelete;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_editor() {
        handle_editor_keys(key)
    } else {
        handle_log_keys(key)
    }
}

/// 处理编辑器面板的按键
fn handle_editor_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Editor(EditorMessage::Newline),
        KeyCode::Backspace => AppMessage::Editor(EditorMessage::Backspace),
        KeyCode::Up => AppMessage::Editor(EditorMessage::CursorUp),
        KeyCode::Down => AppMessage::Editor(EditorMessage::CursorDown),
        KeyCode::Left => AppMessage::Editor(EditorMessage::CursorLeft),
        KeyCode::Right => AppMessage::Editor(EditorMessage::CursorRight),

        // 字符输入（Shift 组合也放行，否则无法输入大写）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Editor(EditorMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理日志面板的按键
fn handle_log_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 向上滚动
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Log(LogMessage::ScrollUp),
        // ↓ 或 j: 向下滚动
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Log(LogMessage::ScrollDown),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    // 根据弹窗类型处理按键
    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Help | Modal::Error { .. } => {
            // 帮助和错误弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }

        // Enter: 确认
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}
