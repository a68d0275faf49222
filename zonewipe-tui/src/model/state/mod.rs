//! 各面板的数据状态

mod editor;
mod log;
mod modal;
mod run;

pub use editor::{EditorState, MAX_BATCH};
pub use log::LogState;
pub use modal::{ConfirmFocus, Modal, ModalState};
pub use run::{RunPhase, RunState, format_mmss};
