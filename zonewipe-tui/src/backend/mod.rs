//! Backend 层：删除工作线程
//!
//! UI 线程永远不直接调用网络。确认删除后，`spawn_deletion` 在独立线程上
//! 启动一个 current-thread tokio 运行时，逐个处理域名，并通过
//! `std::sync::mpsc` 把 [`WorkerEvent`] 单向推送给 UI。
//!
//! [`ZoneGateway`] 是对 Cloudflare 客户端的最小抽象，
//! 使得 update/worker 的测试可以注入 mock 而不发起真实请求。

mod worker;

use async_trait::async_trait;
use zonewipe_provider::{CloudflareClient, Result, Zone};

pub use worker::spawn_deletion;

/// 删除流程需要的两个操作，由 `CloudflareClient` 实现
#[async_trait]
pub trait ZoneGateway: Send + Sync {
    /// 按域名精确查找 Zone，找不到时返回 `Ok(None)`
    async fn resolve_zone(&self, domain: &str) -> Result<Option<Zone>>;

    /// 删除指定 id 的 Zone
    async fn delete_zone(&self, zone_id: &str) -> Result<()>;
}

#[async_trait]
impl ZoneGateway for CloudflareClient {
    async fn resolve_zone(&self, domain: &str) -> Result<Option<Zone>> {
        CloudflareClient::resolve_zone(self, domain).await
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        CloudflareClient::delete_zone(self, zone_id).await
    }
}

/// 单个域名的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainOutcome {
    /// Zone 已删除
    Deleted,
    /// 账户下不存在该域名的 Zone
    NotFound,
    /// 查找或删除失败（携带错误描述）
    Failed(String),
}

/// 工作线程 → UI 的事件
///
/// 每个域名无论结果如何，恰好产生一个 `DomainDone`（进度条只按它递增）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerEvent {
    /// 追加一行日志
    Log(String),
    /// 一个域名处理完毕
    DomainDone {
        domain: String,
        outcome: DomainOutcome,
    },
    /// 整个批次处理完毕
    Finished,
}
