//! 滚动日志状态

/// 日志状态
#[derive(Debug, Clone, Default)]
pub struct LogState {
    /// 日志行（含时间戳前缀）
    pub lines: Vec<String>,
    /// 滚动偏移：距底部的行数，0 表示贴底（跟随最新）
    pub scroll: usize,
}

impl LogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一行日志（加 [HH:MM:SS] 时间戳），并滚回底部
    pub fn push(&mut self, message: impl AsRef<str>) {
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        self.lines.push(format!("[{timestamp}] {}", message.as_ref()));
        self.scroll = 0;
    }

    /// 清空日志
    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        if self.scroll + 1 < self.lines.len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
