//! 滚动日志组件

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染日志面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_log() && !app.modal.is_open();

    let border_style = if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let block = Block::default()
        .title(" Log ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // scroll 是距底部的偏移：0 表示贴底跟随
    let height = inner.height as usize;
    let total = app.log.lines.len();
    let end = total.saturating_sub(app.log.scroll);
    let start = end.saturating_sub(height);

    let lines: Vec<Line> = app.log.lines[start..end]
        .iter()
        .map(|l| Line::styled(l.clone(), Style::default().fg(c.fg)))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
