// 목적:
// - UI 계층이 호출하는 동기식 카탈로그 브릿지를 제공한다.
//
// 설명:
// - 내부에 Tokio 런타임을 하나 소유하고 비동기 검색 파이프라인을 block_on으로 실행한다.
// - 결과는 JSON 문자열로 반환한다. 검색/재적재는 실패를 오류로 올리지 않으며,
//   Err는 생성 단계(설정/런타임/HTTP 클라이언트)와 결과 직렬화에서만 발생한다.
//
// 디자인 패턴:
// - 파사드(Facade).
//
// 참조:
// - src_rs/core/search_pipeline.rs
// - src_rs/index/catalog_index.rs

use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

use crate::core::config::CatalogConfigPayload;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::fetcher::DocumentFetcher;
use crate::core::loader::CatalogLoader;
use crate::core::model::Item;
use crate::core::search_pipeline::{SearchEngine, SearchResultPayload};
use crate::core::telemetry::init_tracing;
use crate::index::catalog_index::{CatalogIndex, CatalogStats};

/// UI 계층에 노출되는 카탈로그 브릿지다.
pub struct CatalogBridge {
    runtime: Runtime,
    engine: SearchEngine,
}

impl CatalogBridge {
    /// 설정 JSON(선택)으로 HTTP 기반 브릿지를 만든다. None이면 기본 설정을 쓴다.
    pub fn new(config_json: Option<&str>) -> CoreResult<Self> {
        let config = match config_json {
            Some(payload) => CatalogConfigPayload::from_json(payload)?,
            None => CatalogConfigPayload::default(),
        };
        init_tracing(&config.log_level);

        let runtime = create_runtime()?;
        let loader = CatalogLoader::new(config)?;
        Ok(Self::assemble(runtime, loader))
    }

    pub fn with_fetcher(
        config: CatalogConfigPayload,
        fetcher: Arc<dyn DocumentFetcher>,
    ) -> CoreResult<Self> {
        let runtime = create_runtime()?;
        let loader = CatalogLoader::with_fetcher(config, fetcher)?;
        Ok(Self::assemble(runtime, loader))
    }

    fn assemble(runtime: Runtime, loader: CatalogLoader) -> Self {
        let index = Arc::new(CatalogIndex::new(loader));
        Self {
            runtime,
            engine: SearchEngine::new(index),
        }
    }

    pub fn search(&self, query: &str) -> Vec<Item> {
        self.runtime.block_on(self.engine.search(query))
    }

    pub fn execute(&self, query: &str) -> SearchResultPayload {
        self.runtime.block_on(self.engine.execute(query))
    }

    /// 검색을 실행하고 결과 JSON을 반환한다.
    pub fn execute_json(&self, query: &str) -> CoreResult<String> {
        let result = self.execute(query);
        serde_json::to_string(&result)
            .map_err(|error| CoreError::Serialization(format!("검색 결과 직렬화 실패: {}", error)))
    }

    pub fn reload(&self) -> CatalogStats {
        self.runtime.block_on(self.engine.reload())
    }

    pub fn find_by_id(&self, id: &str) -> Option<Item> {
        self.runtime.block_on(self.engine.find_by_id(id))
    }

    pub fn stats(&self) -> Option<CatalogStats> {
        self.runtime.block_on(self.engine.index().stats())
    }
}

fn create_runtime() -> CoreResult<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| CoreError::Runtime(format!("Tokio 런타임 생성 실패: {}", error)))
}
