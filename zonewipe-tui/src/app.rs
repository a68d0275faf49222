//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))    // 渲染 UI
//!     if app.should_quit { break }                // 检查 APP 是否应该退出
//!     for ev in app.take_worker_events() {        // 排空工作线程发来的事件
//!         update::update(&mut app, Worker(ev))
//!     }
//!     if let Some(event) = poll_event() {         // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event, &app);    // 接收原始事件并分发消息
//!         update::update(&mut app, msg)           // 更新终端状态
//!     }
//! }
//!
//! 工作线程到 UI 的通信是单向的：工作线程只发事件，UI 只在自己的线程上
//! 通过 `try_recv` 排空队列，不存在反向通道。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 排空工作线程事件队列
        for worker_event in app.take_worker_events() {
            update::update(app, AppMessage::Worker(worker_event));
        }

        // 4. 轮询输入事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
