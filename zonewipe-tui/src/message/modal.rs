//! 弹窗子消息

/// 弹窗消息
#[derive(Debug, Clone, Copy)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 确认（按钮行为取决于弹窗类型和焦点）
    Confirm,
    /// 切换确认删除弹窗的按钮焦点（取消 ↔ 删除）
    ToggleDeleteFocus,
}
