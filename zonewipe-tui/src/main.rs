//! zonewipe TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 删除工作线程 (`backend/`)
//!
//! 启动流程：
//!     1. 从环境变量（或 .env）加载 Cloudflare 凭证
//!     2. 初始化终端（raw mode + 备用屏幕）
//!     3. 创建 App 实例并进入主循环
//!     4. 无论成功与否，都恢复终端

use std::sync::Arc;

use anyhow::Result;
use zonewipe_provider::{CloudflareClient, Credentials};

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use backend::ZoneGateway;
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载凭证（缺失时仍然启动，请求删除时提示用户）
    let (gateway, credential_mode): (Option<Arc<dyn ZoneGateway>>, Option<&'static str>) =
        match Credentials::from_env() {
            Some(credentials) => {
                let mode = credentials.mode();
                let client = CloudflareClient::new(credentials)?;
                (Some(Arc::new(client)), Some(mode))
            }
            None => (None, None),
        };

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例
    let mut app = model::App::new(gateway, credential_mode);

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
