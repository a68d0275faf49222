//! 日志面板子消息

/// 日志面板消息
#[derive(Debug, Clone, Copy)]
pub enum LogMessage {
    /// 向上滚动一行
    ScrollUp,
    /// 向下滚动一行
    ScrollDown,
}
