// 목적:
// - 변환된 카탈로그를 프로세스 수명 동안 메모리에 보관한다.
//
// 설명:
// - 상태는 Empty -> Populated 두 가지뿐이다. 첫 조회 또는 명시적 reload가 전이를 일으킨다.
// - 자동 적재는 최대 한 번이다. 동시에 들어온 첫 조회들은 populate_gate에서 직렬화된다.
// - reload는 스냅샷을 통째로 교체한다(병합 없음). 읽는 쪽은 Arc 스냅샷을 잡고 있으므로
//   교체 도중의 부분 상태를 보지 않는다.
// - 동시에 진행된 reload 끼리는 나중에 기록한 쪽이 남는다. 취소는 지원하지 않는다.
//
// 디자인 패턴:
// - 소유형 캐시 객체(Owned Cache) + 스냅샷 교체(Copy-on-Replace).
//
// 참조:
// - src_rs/core/loader.rs
// - src_rs/core/adapter.rs

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::core::adapter::{adapt_records, log_skipped};
use crate::core::loader::CatalogLoader;
use crate::core::model::Item;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub repositories: usize,
    pub items: usize,
    pub skipped: usize,
}

/// 한 번의 적재 주기로 만들어진 불변 카탈로그.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    items: Arc<[Item]>,
    stats: CatalogStats,
}

impl CatalogSnapshot {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn stats(&self) -> CatalogStats {
        self.stats
    }
}

#[derive(Debug, Clone)]
enum CatalogState {
    Empty,
    Populated(CatalogSnapshot),
}

pub struct CatalogIndex {
    loader: CatalogLoader,
    state: RwLock<CatalogState>,
    populate_gate: Mutex<()>,
}

impl CatalogIndex {
    pub fn new(loader: CatalogLoader) -> Self {
        Self {
            loader,
            state: RwLock::new(CatalogState::Empty),
            populate_gate: Mutex::new(()),
        }
    }

    pub async fn is_populated(&self) -> bool {
        matches!(&*self.state.read().await, CatalogState::Populated(_))
    }

    /// 적재된 적이 없으면 None이다.
    pub async fn stats(&self) -> Option<CatalogStats> {
        match &*self.state.read().await {
            CatalogState::Empty => None,
            CatalogState::Populated(snapshot) => Some(snapshot.stats()),
        }
    }

    /// 현재 스냅샷을 반환한다. 비어 있으면 한 번 적재한다.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        if let Some(snapshot) = self.current().await {
            return snapshot;
        }

        let _gate = self.populate_gate.lock().await;
        if let Some(snapshot) = self.current().await {
            return snapshot;
        }

        let snapshot = self.build_snapshot().await;
        *self.state.write().await = CatalogState::Populated(snapshot.clone());
        snapshot
    }

    /// 무조건 다시 적재하고 기존 내용을 교체한다.
    pub async fn reload(&self) -> CatalogStats {
        let snapshot = self.build_snapshot().await;
        let stats = snapshot.stats();
        *self.state.write().await = CatalogState::Populated(snapshot);
        info!(
            repositories = stats.repositories,
            items = stats.items,
            "카탈로그 재적재 완료"
        );
        stats
    }

    async fn current(&self) -> Option<CatalogSnapshot> {
        match &*self.state.read().await {
            CatalogState::Empty => None,
            CatalogState::Populated(snapshot) => Some(snapshot.clone()),
        }
    }

    async fn build_snapshot(&self) -> CatalogSnapshot {
        let records = self.loader.load().await;
        let outcome = adapt_records(&records);
        log_skipped(&outcome.skipped);

        let stats = CatalogStats {
            repositories: records.len(),
            items: outcome.items.len(),
            skipped: outcome.skipped.len(),
        };

        CatalogSnapshot {
            items: Arc::from(outcome.items),
            stats,
        }
    }
}
