//! 进度条组件

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
};

use crate::model::state::format_mmss;
use crate::model::{App, RunPhase};
use crate::view::theme::{Styles, colors};

/// 渲染进度条（带 ETA）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let run = &app.run;

    let label = match run.phase {
        RunPhase::Idle => "Idle".to_string(),
        RunPhase::Running => match run.eta() {
            Some(eta) => format!(
                "{}/{}  ETA {}",
                run.completed,
                run.total,
                format_mmss(eta)
            ),
            None => format!("{}/{}", run.completed, run.total),
        },
        RunPhase::Completed => format!("{}/{}  Done", run.completed, run.total),
    };

    let gauge_color = match run.phase {
        RunPhase::Idle => c.muted,
        RunPhase::Running => c.highlight,
        RunPhase::Completed => c.success,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .title_style(Styles::title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(run.ratio().clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, area);
}
