// 목적:
// - 검색 작업의 핵심 파이프라인을 실행한다.
//
// 설명:
// - 카탈로그 스냅샷 확보(필요 시 최초 적재) -> 검색어 분류 -> 카탈로그 순서 필터링 순서로 처리한다.
// - 적재 실패는 빈 카탈로그가 되고, 검색 결과도 비게 된다. 호출자에게 오류로 올리지 않는다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline).
//
// 참조:
// - src_rs/index/catalog_index.rs
// - src_rs/core/matcher.rs

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::core::matcher::{classify_query, filter_items};
use crate::core::model::Item;
use crate::index::catalog_index::{CatalogIndex, CatalogStats};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMetricsPayload {
    pub catalog_size: usize,
    pub matched_count: usize,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultPayload {
    pub query: String,
    pub mode: String,
    pub items: Vec<Item>,
    pub metrics: SearchMetricsPayload,
}

#[derive(Clone)]
pub struct SearchEngine {
    index: Arc<CatalogIndex>,
}

impl SearchEngine {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &Arc<CatalogIndex> {
        &self.index
    }

    /// 검색어에 맞는 항목을 카탈로그 순서대로 반환한다.
    pub async fn search(&self, query: &str) -> Vec<Item> {
        self.execute(query).await.items
    }

    /// 검색을 실행하고 모드/지표를 포함한 결과를 반환한다.
    pub async fn execute(&self, query: &str) -> SearchResultPayload {
        let started = Instant::now();
        let snapshot = self.index.snapshot().await;
        let mode = classify_query(query);
        let items = filter_items(snapshot.items(), &mode);

        let metrics = SearchMetricsPayload {
            catalog_size: snapshot.items().len(),
            matched_count: items.len(),
            elapsed_ms: started.elapsed().as_millis(),
        };
        debug!(
            query,
            mode = mode.label(),
            matched = metrics.matched_count,
            catalog = metrics.catalog_size,
            "검색 완료"
        );

        SearchResultPayload {
            query: query.to_string(),
            mode: mode.label().to_string(),
            items,
            metrics,
        }
    }

    pub async fn reload(&self) -> CatalogStats {
        self.index.reload().await
    }

    /// id로 항목을 찾는다. 중복 id가 있으면 카탈로그 순서상 첫 항목을 반환한다.
    pub async fn find_by_id(&self, id: &str) -> Option<Item> {
        let snapshot = self.index.snapshot().await;
        snapshot.items().iter().find(|item| item.id == id).cloned()
    }
}
