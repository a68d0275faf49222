//! 编辑器子消息

/// 编辑器消息（批次运行期间全部被忽略）
#[derive(Debug, Clone, Copy)]
pub enum EditorMessage {
    /// 输入字符
    Input(char),
    /// 换行
    Newline,
    /// 退格
    Backspace,
    /// 光标移动
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
}
