//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        // 纯文本提示（如 “Deleting...”）没有按键部分
        if !key.is_empty() {
            spans.push(Span::styled(*key, Styles::hint_key()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 凭证模式（或缺失警告）
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    match app.credential_mode {
        Some(mode) => {
            spans.push(Span::styled(
                format!("auth: {mode}"),
                Styles::hint_desc(),
            ));
        }
        None => {
            spans.push(Span::styled(
                "no credentials",
                Style::default().fg(Color::LightRed),
            ));
        }
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    hints.push(("Tab", "Switch Panel"));

    if app.run.is_running() {
        hints.push(("", "Deleting..."));
    } else {
        hints.push(("Ctrl+D", "Delete Zones"));
    }

    if app.focus.is_log() {
        hints.push(("↑↓", "Scroll"));
    }

    hints.push(("F1", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_line(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(app, frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..80)
            .filter_map(|x| buffer.cell((x, 0u16)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn running_hint_renders_without_key_slot() {
        let mut app = App::new(None, None);
        app.run.start(3);
        let line = render_line(&app);
        assert!(line.contains("│ Deleting... │"), "{line}");
        assert!(!line.contains("  Deleting..."), "{line}");
    }

    #[test]
    fn idle_shows_delete_shortcut() {
        let app = App::new(None, None);
        let line = render_line(&app);
        assert!(line.contains("Ctrl+D Delete Zones"), "{line}");
        assert!(line.contains("no credentials"), "{line}");
    }
}
