//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod editor;         // 编辑器子消息处理
//!         mod modal;          // 弹窗子消息处理
//!
//! 删除请求的预检（空列表、超过上限、缺少凭证）全部在这里完成，
//! 任何一项不通过都不会产生网络调用。

mod editor;
mod modal;

use crate::backend::{DomainOutcome, WorkerEvent, spawn_deletion};
use crate::message::{AppMessage, LogMessage};
use crate::model::state::MAX_BATCH;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::RequestDelete => {
            request_delete(app);
        }

        AppMessage::Editor(editor_msg) => {
            editor::update(app, editor_msg);
        }

        AppMessage::Log(log_msg) => match log_msg {
            LogMessage::ScrollUp => app.log.scroll_up(),
            LogMessage::ScrollDown => app.log.scroll_down(),
        },

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Worker(event) => {
            apply_worker_event(app, event);
        }

        AppMessage::Noop => {}
    }
}

/// 删除请求预检：依次检查运行状态、域名列表、凭证，
/// 全部通过后弹出确认框。任何一步失败都不会触网。
fn request_delete(app: &mut App) {
    if app.run.is_running() {
        app.set_status("A deletion run is already in progress");
        return;
    }

    let domains = app.editor.parse_domains();

    if domains.is_empty() {
        app.modal.show_error(
            "No domains",
            "Enter at least one domain to delete (one per line).",
        );
        return;
    }

    if domains.len() > MAX_BATCH {
        app.modal.show_error(
            "Too many domains",
            format!(
                "At most {MAX_BATCH} domains per run ({} given). Remove some and try again.",
                domains.len()
            ),
        );
        return;
    }

    if app.gateway.is_none() {
        app.modal.show_error(
            "Missing credentials",
            format!(
                "Set {} (or {} + {}) in the environment or a .env file, then restart.",
                zonewipe_provider::ENV_API_TOKEN,
                zonewipe_provider::ENV_EMAIL,
                zonewipe_provider::ENV_API_KEY,
            ),
        );
        return;
    }

    app.modal.show_confirm_delete(domains);
}

/// 确认后启动批次（由 update/modal.rs 在 Delete 按钮确认时调用）
pub(crate) fn start_run(app: &mut App, domains: Vec<String>) {
    let Some(gateway) = app.gateway.clone() else {
        return;
    };

    app.log.clear();
    app.log.push("Starting bulk deletion...");
    app.run.start(domains.len());
    app.set_status("Deleting...");
    app.worker_rx = Some(spawn_deletion(gateway, domains));
}

/// 把工作线程事件落到状态上
fn apply_worker_event(app: &mut App, event: WorkerEvent) {
    match event {
        WorkerEvent::Log(line) => {
            app.log.push(line);
        }

        WorkerEvent::DomainDone { outcome, .. } => {
            // 进度只按 DomainDone 递增，每个域名恰好一次
            app.run.record_done();
            match outcome {
                DomainOutcome::Deleted => app.log.push("  - Deleted successfully."),
                DomainOutcome::NotFound => app.log.push("  - Not found. Skipping."),
                DomainOutcome::Failed(msg) => app.log.push(format!("  - Failed: {msg}")),
            }
        }

        WorkerEvent::Finished => {
            app.run.finish();
            app.worker_rx = None;
            app.log.push("All done.");
            app.set_status("Completed");
        }
    }
}
