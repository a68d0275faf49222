//! 删除工作线程
//!
//! 严格按输入顺序逐个处理域名，域名之间至少间隔一秒（含请求耗时），
//! 以避开 Cloudflare 的速率限制。单个域名失败不会中止整个批次。

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use super::{DomainOutcome, WorkerEvent, ZoneGateway};

/// 每个域名的最小耗时（墙上时间）
const PACING: Duration = Duration::from_secs(1);

/// 在后台线程上启动删除批次，返回事件接收端
///
/// 线程在发送 `Finished` 后退出。没有取消机制：一旦开始，批次会跑完
/// （进程退出时线程随之终止，在途请求被直接放弃）。
pub fn spawn_deletion(
    gateway: Arc<dyn ZoneGateway>,
    domains: Vec<String>,
) -> mpsc::Receiver<WorkerEvent> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to build worker runtime: {e}");
                let _ = tx.send(WorkerEvent::Log(format!(
                    "Failed to start worker: {e}"
                )));
                let _ = tx.send(WorkerEvent::Finished);
                return;
            }
        };

        runtime.block_on(run_deletion(gateway, domains, tx));
    });

    rx
}

/// 删除批次主体
///
/// 发送端失败说明 UI 已经退出，此时静默丢弃事件即可。
async fn run_deletion(
    gateway: Arc<dyn ZoneGateway>,
    domains: Vec<String>,
    tx: mpsc::Sender<WorkerEvent>,
) {
    let total = domains.len();

    for (idx, domain) in domains.iter().enumerate() {
        let started = tokio::time::Instant::now();

        let _ = tx.send(WorkerEvent::Log(format!(
            "[{}/{}] Looking up zone for '{}'...",
            idx + 1,
            total,
            domain
        )));

        let outcome = delete_one(gateway.as_ref(), domain, &tx).await;

        // 不变式：每个域名恰好一个 DomainDone
        let _ = tx.send(WorkerEvent::DomainDone {
            domain: domain.clone(),
            outcome,
        });

        // 速率控制：补足到至少 1 秒（最后一个域名之后不用等）
        if idx + 1 < total {
            let elapsed = started.elapsed();
            if elapsed < PACING {
                tokio::time::sleep(PACING - elapsed).await;
            }
        }
    }

    let _ = tx.send(WorkerEvent::Finished);
}

/// 处理单个域名：查找 → （找到则）删除
async fn delete_one(
    gateway: &dyn ZoneGateway,
    domain: &str,
    tx: &mpsc::Sender<WorkerEvent>,
) -> DomainOutcome {
    match gateway.resolve_zone(domain).await {
        Ok(Some(zone)) => {
            let _ = tx.send(WorkerEvent::Log(format!(
                "  - Found zone id: {}. Deleting...",
                zone.id
            )));
            match gateway.delete_zone(&zone.id).await {
                Ok(()) => DomainOutcome::Deleted,
                Err(e) => DomainOutcome::Failed(e.to_string()),
            }
        }
        Ok(None) => DomainOutcome::NotFound,
        Err(e) => DomainOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use zonewipe_provider::{CloudflareError, Zone};

    use super::*;

    /// 内存 mock：zones 映射域名 → zone id，fail_delete 中的 id 删除时报错
    struct MockGateway {
        zones: HashMap<String, String>,
        fail_delete: HashSet<String>,
        fail_resolve: HashSet<String>,
    }

    impl MockGateway {
        fn new(zones: &[(&str, &str)]) -> Self {
            Self {
                zones: zones
                    .iter()
                    .map(|(name, id)| ((*name).to_string(), (*id).to_string()))
                    .collect(),
                fail_delete: HashSet::new(),
                fail_resolve: HashSet::new(),
            }
        }

        fn with_delete_failure(mut self, zone_id: &str) -> Self {
            self.fail_delete.insert(zone_id.to_string());
            self
        }

        fn with_resolve_failure(mut self, domain: &str) -> Self {
            self.fail_resolve.insert(domain.to_string());
            self
        }
    }

    #[async_trait::async_trait]
    impl ZoneGateway for MockGateway {
        async fn resolve_zone(
            &self,
            domain: &str,
        ) -> zonewipe_provider::Result<Option<Zone>> {
            if self.fail_resolve.contains(domain) {
                return Err(CloudflareError::Network {
                    detail: "connection reset".into(),
                });
            }
            Ok(self.zones.get(domain).map(|id| Zone {
                id: id.clone(),
                name: domain.to_string(),
                status: "active".to_string(),
            }))
        }

        async fn delete_zone(&self, zone_id: &str) -> zonewipe_provider::Result<()> {
            if self.fail_delete.contains(zone_id) {
                return Err(CloudflareError::PermissionDenied {
                    raw_message: Some("token cannot delete zones".into()),
                });
            }
            Ok(())
        }
    }

    fn domain_done_events(events: &[WorkerEvent]) -> Vec<(&str, &DomainOutcome)> {
        events
            .iter()
            .filter_map(|ev| match ev {
                WorkerEvent::DomainDone { domain, outcome } => {
                    Some((domain.as_str(), outcome))
                }
                _ => None,
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn one_domain_done_per_domain_in_order() {
        let gateway = Arc::new(MockGateway::new(&[("a.com", "z1"), ("c.com", "z3")]));
        let (tx, rx) = mpsc::channel();

        run_deletion(
            gateway,
            vec!["a.com".into(), "b.com".into(), "c.com".into()],
            tx,
        )
        .await;

        let events: Vec<WorkerEvent> = rx.try_iter().collect();
        let done = domain_done_events(&events);

        assert_eq!(done.len(), 3, "exactly one DomainDone per domain");
        assert_eq!(done[0], ("a.com", &DomainOutcome::Deleted));
        assert_eq!(done[1], ("b.com", &DomainOutcome::NotFound));
        assert_eq!(done[2], ("c.com", &DomainOutcome::Deleted));
        assert_eq!(events.last(), Some(&WorkerEvent::Finished));
    }

    #[tokio::test(start_paused = true)]
    async fn delete_failure_does_not_abort_batch() {
        let gateway = Arc::new(
            MockGateway::new(&[("a.com", "z1"), ("b.com", "z2")]).with_delete_failure("z1"),
        );
        let (tx, rx) = mpsc::channel();

        run_deletion(gateway, vec!["a.com".into(), "b.com".into()], tx).await;

        let events: Vec<WorkerEvent> = rx.try_iter().collect();
        let done = domain_done_events(&events);

        assert_eq!(done.len(), 2);
        assert!(
            matches!(done[0].1, DomainOutcome::Failed(msg) if msg.contains("Permission denied")),
            "unexpected outcome: {:?}",
            done[0].1
        );
        assert_eq!(done[1], ("b.com", &DomainOutcome::Deleted));
        assert_eq!(events.last(), Some(&WorkerEvent::Finished));
    }

    #[tokio::test(start_paused = true)]
    async fn resolve_failure_is_isolated() {
        let gateway = Arc::new(
            MockGateway::new(&[("b.com", "z2")]).with_resolve_failure("a.com"),
        );
        let (tx, rx) = mpsc::channel();

        run_deletion(gateway, vec!["a.com".into(), "b.com".into()], tx).await;

        let events: Vec<WorkerEvent> = rx.try_iter().collect();
        let done = domain_done_events(&events);

        assert_eq!(done.len(), 2);
        assert!(matches!(done[0].1, DomainOutcome::Failed(_)));
        assert_eq!(done[1], ("b.com", &DomainOutcome::Deleted));
    }

    #[tokio::test(start_paused = true)]
    async fn logs_lookup_and_delete_steps() {
        let gateway = Arc::new(MockGateway::new(&[("a.com", "z1")]));
        let (tx, rx) = mpsc::channel();

        run_deletion(gateway, vec!["a.com".into()], tx).await;

        let events: Vec<WorkerEvent> = rx.try_iter().collect();
        let logs: Vec<&str> = events
            .iter()
            .filter_map(|ev| match ev {
                WorkerEvent::Log(line) => Some(line.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(logs[0], "[1/1] Looking up zone for 'a.com'...");
        assert_eq!(logs[1], "  - Found zone id: z1. Deleting...");
    }

    #[tokio::test(start_paused = true)]
    async fn finished_always_emitted() {
        let gateway = Arc::new(MockGateway::new(&[]).with_resolve_failure("a.com"));
        let (tx, rx) = mpsc::channel();

        run_deletion(gateway, vec!["a.com".into()], tx).await;

        let events: Vec<WorkerEvent> = rx.try_iter().collect();
        assert_eq!(events.last(), Some(&WorkerEvent::Finished));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_batch_only_finishes() {
        let gateway = Arc::new(MockGateway::new(&[]));
        let (tx, rx) = mpsc::channel();

        run_deletion(gateway, Vec::new(), tx).await;

        let events: Vec<WorkerEvent> = rx.try_iter().collect();
        assert_eq!(events, vec![WorkerEvent::Finished]);
    }
}
