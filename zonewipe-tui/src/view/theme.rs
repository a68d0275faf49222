//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 主题颜色（单一深色方案）
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

/// 获取颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors {
        fg: Color::Rgb(212, 212, 212),
        border: Color::Rgb(62, 62, 62),
        border_focused: Color::Rgb(0, 122, 204),
        highlight: Color::Rgb(0, 122, 204),
        selected_fg: Color::White,
        success: Color::Rgb(78, 201, 176),
        warning: Color::Rgb(206, 145, 120),
        error: Color::Rgb(244, 135, 113),
        muted: Color::Rgb(128, 128, 128),
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 普通边框样式
    pub fn border() -> Style {
        Style::default().fg(Color::Rgb(62, 62, 62))
    }

    /// 焦点边框样式
    pub fn border_focused() -> Style {
        Style::default().fg(Color::Rgb(0, 122, 204))
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(Color::Rgb(212, 212, 212))
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 122, 204))
            .fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
