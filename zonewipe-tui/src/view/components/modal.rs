//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::{App, ConfirmFocus, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { domains, focus } => render_confirm_delete(frame, domains, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, domains: &[String], focus: ConfirmFocus) {
    let c = colors();

    // 高度：警告(2) + 域名列表 + 空行(1) + 按钮(1) + 边框(2)
    let height = (domains.len() as u16) + 6;
    let area = centered_rect(54, height, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    lines.push(Line::styled(
        format!(
            " The following {} zone(s) will be PERMANENTLY deleted:",
            domains.len()
        ),
        Style::default().fg(c.error).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(""));

    for domain in domains {
        lines.push(Line::styled(
            format!("   • {domain}"),
            Style::default().fg(c.fg),
        ));
    }

    lines.push(Line::from(""));

    // 按钮行
    let cancel_style = if focus == ConfirmFocus::Cancel {
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let delete_style = if focus == ConfirmFocus::Delete {
        Style::default()
            .bg(c.error)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    lines.push(Line::from(vec![
        Span::raw("      "),
        Span::styled("[ Cancel ]", cancel_style),
        Span::raw("      "),
        Span::styled("[ Delete ]", delete_style),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(50, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(format!(" {message}"), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            " Press Enter or Esc to close",
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: false }), inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(52, 13, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key_style = Style::default().fg(Color::Yellow);
    let desc_style = Style::default().fg(c.fg);

    let entries: &[(&str, &str)] = &[
        ("Tab", "Switch focus between editor and log"),
        ("Ctrl+D", "Delete the listed zones (with confirm)"),
        ("↑↓", "Move cursor / scroll log"),
        ("Enter", "New line in the editor"),
        ("F1", "This help"),
        ("Alt+q / Ctrl+C", "Quit"),
    ];

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            " Enter up to 10 domains, one per line.",
            Style::default().fg(c.muted),
        ),
        Line::from(""),
    ];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!(" {key:<16}"), key_style),
            Span::styled(*desc, desc_style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
