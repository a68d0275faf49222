//! 运行状态：进度与 ETA

use std::time::{Duration, Instant};

/// 运行阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    /// 未开始（或上一轮已结束后回到可编辑状态）
    #[default]
    Idle,
    /// 批次进行中，编辑器和删除请求被禁用
    Running,
    /// 批次已结束
    Completed,
}

/// 运行状态
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub phase: RunPhase,
    /// 已完成的域名数
    pub completed: usize,
    /// 本批次的域名总数
    pub total: usize,
    /// 批次开始时刻
    pub started_at: Option<Instant>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始新批次
    pub fn start(&mut self, total: usize) {
        self.phase = RunPhase::Running;
        self.completed = 0;
        self.total = total;
        self.started_at = Some(Instant::now());
    }

    /// 记录一个域名完成（无论结果如何，每个域名恰好调用一次）
    pub fn record_done(&mut self) {
        self.completed = (self.completed + 1).min(self.total);
    }

    /// 批次结束
    pub fn finish(&mut self) {
        self.phase = RunPhase::Completed;
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// 进度比例，0.0 到 1.0
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    /// 估算剩余时间：平均每项耗时 × 剩余项数
    ///
    /// 完成数为 0 时无法估算，返回 `None`。
    pub fn eta(&self) -> Option<Duration> {
        let elapsed = self.started_at?.elapsed();
        eta_from(elapsed, self.completed, self.total)
    }
}

/// 纯计算部分，便于测试
fn eta_from(elapsed: Duration, completed: usize, total: usize) -> Option<Duration> {
    if completed == 0 || completed >= total {
        return None;
    }
    let per_item = elapsed / completed as u32;
    Some(per_item * (total - completed) as u32)
}

/// 格式化为 MM:SS
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_zero_total_is_zero() {
        let run = RunState::new();
        assert!((run.ratio() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_partial() {
        let mut run = RunState::new();
        run.start(10);
        run.record_done();
        run.record_done();
        run.record_done();
        assert!((run.ratio() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn record_done_never_exceeds_total() {
        let mut run = RunState::new();
        run.start(2);
        run.record_done();
        run.record_done();
        run.record_done();
        assert_eq!(run.completed, 2);
    }

    #[test]
    fn eta_unknown_before_first_completion() {
        assert_eq!(eta_from(Duration::from_secs(5), 0, 10), None);
    }

    #[test]
    fn eta_unknown_when_done() {
        assert_eq!(eta_from(Duration::from_secs(20), 10, 10), None);
    }

    #[test]
    fn eta_extrapolates_per_item_time() {
        // 4 项耗时 8 秒 → 每项 2 秒，剩余 6 项 → 12 秒
        assert_eq!(
            eta_from(Duration::from_secs(8), 4, 10),
            Some(Duration::from_secs(12))
        );
    }

    #[test]
    fn format_mmss_basic() {
        assert_eq!(format_mmss(Duration::from_secs(0)), "00:00");
        assert_eq!(format_mmss(Duration::from_secs(9)), "00:09");
        assert_eq!(format_mmss(Duration::from_secs(75)), "01:15");
        assert_eq!(format_mmss(Duration::from_secs(600)), "10:00");
    }
}
