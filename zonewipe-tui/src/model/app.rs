//! 应用主状态结构

use std::sync::Arc;
use std::sync::mpsc;

use crate::backend::{WorkerEvent, ZoneGateway};

use super::{EditorState, FocusPanel, LogState, ModalState, RunState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 域名编辑器状态
    pub editor: EditorState,

    /// 运行状态（进度 / ETA）
    pub run: RunState,

    /// 日志面板状态
    pub log: LogState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// Cloudflare 网关（凭证缺失时为 None，仍可编辑但无法删除）
    pub gateway: Option<Arc<dyn ZoneGateway>>,

    /// 凭证模式描述（显示在状态栏）
    pub credential_mode: Option<&'static str>,

    /// 当前批次的事件接收端（无批次运行时为 None）
    pub worker_rx: Option<mpsc::Receiver<WorkerEvent>>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        gateway: Option<Arc<dyn ZoneGateway>>,
        credential_mode: Option<&'static str>,
    ) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Editor,
            editor: EditorState::new(),
            run: RunState::new(),
            log: LogState::new(),
            modal: ModalState::new(),
            status_message: None,
            gateway,
            credential_mode,
            worker_rx: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 排空工作线程事件队列（非阻塞，由主循环每轮调用）
    pub fn take_worker_events(&mut self) -> Vec<WorkerEvent> {
        let Some(rx) = &self.worker_rx else {
            return Vec::new();
        };
        rx.try_iter().collect()
    }
}
