//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 主内容区 + 进度条 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(5),    // 主内容区
            Constraint::Length(3), // 进度条
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let progress_area = main_layout[2];
    let status_area = main_layout[3];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 左右分栏：编辑器 + 日志
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // 左侧域名编辑器
            Constraint::Percentage(60), // 右侧日志
        ])
        .split(content_area);

    components::editor::render(app, frame, columns[0]);
    components::log::render(app, frame, columns[1]);

    // 渲染进度条
    components::progress::render(app, frame, progress_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(concat!(" zonewipe v", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
