//! 编辑器子消息处理

use crate::message::EditorMessage;
use crate::model::App;

/// 更新编辑器状态
///
/// 批次运行期间编辑器被禁用，所有消息直接丢弃。
pub fn update(app: &mut App, msg: EditorMessage) {
    if app.run.is_running() {
        return;
    }

    match msg {
        EditorMessage::Input(ch) => app.editor.insert_char(ch),
        EditorMessage::Newline => app.editor.newline(),
        EditorMessage::Backspace => app.editor.backspace(),
        EditorMessage::CursorUp => app.editor.move_up(),
        EditorMessage::CursorDown => app.editor.move_down(),
        EditorMessage::CursorLeft => app.editor.move_left(),
        EditorMessage::CursorRight => app.editor.move_right(),
    }
}
