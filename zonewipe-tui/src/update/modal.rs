//! 弹窗子消息处理

use crate::message::ModalMessage;
use crate::model::{App, ConfirmFocus, Modal};

/// 更新弹窗状态
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleDeleteFocus => {
            if let Some(Modal::ConfirmDelete { focus, .. }) = &mut app.modal.active {
                *focus = focus.toggle();
            }
        }

        ModalMessage::Confirm => confirm(app),
    }
}

/// Enter 的语义取决于弹窗类型：
/// - 确认删除：焦点在 Delete 上才真正启动批次，否则等同取消
/// - 错误 / 帮助：关闭
fn confirm(app: &mut App) {
    match app.modal.active.take() {
        Some(Modal::ConfirmDelete { domains, focus }) => {
            if focus == ConfirmFocus::Delete {
                super::start_run(app, domains);
            }
        }
        Some(Modal::Error { .. } | Modal::Help) | None => {}
    }
}
