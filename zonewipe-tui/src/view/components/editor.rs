//! 域名编辑器组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::state::MAX_BATCH;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染域名编辑器
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_editor() && !app.modal.is_open();
    let running = app.run.is_running();

    let border_style = if is_focused && !running {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let queued = app.editor.domain_count();
    let count_style = if queued > MAX_BATCH {
        Style::default().fg(c.error)
    } else {
        Style::default().fg(c.fg)
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" Domains ", Styles::title()),
            Span::styled(format!("({queued}/{MAX_BATCH} queued) "), count_style),
        ]))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 运行期间编辑器置灰，不显示光标
    let text_style = if running {
        Style::default().fg(c.muted)
    } else {
        Style::default().fg(c.fg)
    };

    let mut lines: Vec<Line> = Vec::with_capacity(app.editor.lines.len());
    for (i, line) in app.editor.lines.iter().enumerate() {
        if is_focused && !running && i == app.editor.cursor_line {
            // 在光标位置插入光标条
            let (before, after) = split_at_char(line, app.editor.cursor_col);
            lines.push(Line::from(vec![
                Span::styled(before.to_string(), text_style),
                Span::styled("▎", Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)),
                Span::styled(after.to_string(), text_style),
            ]));
        } else {
            lines.push(Line::styled(line.clone(), text_style));
        }
    }

    // 让光标所在行保持可见
    let height = inner.height as usize;
    let scroll = app.editor.cursor_line.saturating_sub(height.saturating_sub(1));

    let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, inner);
}

/// 按字符索引切分字符串（多字节安全）
fn split_at_char(s: &str, char_idx: usize) -> (&str, &str) {
    let byte_idx = s
        .char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(idx, _)| idx);
    s.split_at(byte_idx)
}
