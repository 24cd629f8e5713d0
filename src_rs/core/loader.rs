// 목적:
// - root manifest와 저장소 메타데이터 문서를 원격에서 적재한다.
//
// 설명:
// - root manifest 조회 -> 저장소 문서 병렬 조회 -> 전부 정산(settle) -> 검증 순서로 처리한다.
// - 개별 저장소 실패는 해당 슬롯만 "없음"으로 바꾸고 형제 작업을 중단하지 않는다.
// - 결과 순서는 manifest 순서를 따른다. 완료 순서와 무관하다.
// - load()는 호출자에게 오류를 올리지 않는다. 전부 실패하면 빈 목록이다.
//
// 디자인 패턴:
// - 구조적 동시성(JoinSet) + 제한 병렬 처리(Bounded Concurrency).
//
// 참조:
// - src_rs/core/fetcher.rs
// - src_rs/core/raw.rs

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::core::config::CatalogConfigPayload;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::fetcher::{resolve_repository_url, DocumentFetcher, HttpDocumentFetcher};
use crate::core::raw::{carries_identity, RepositoryRecord, RootManifest};

#[derive(Clone)]
pub struct CatalogLoader {
    fetcher: Arc<dyn DocumentFetcher>,
    config: CatalogConfigPayload,
}

impl CatalogLoader {
    /// 설정으로부터 HTTP 기반 적재기를 만든다.
    pub fn new(config: CatalogConfigPayload) -> CoreResult<Self> {
        let fetcher = HttpDocumentFetcher::new(&config)?;
        Ok(Self {
            fetcher: Arc::new(fetcher),
            config,
        })
    }

    pub fn with_fetcher(
        config: CatalogConfigPayload,
        fetcher: Arc<dyn DocumentFetcher>,
    ) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { fetcher, config })
    }

    /// 유효한 저장소 문서를 manifest 순서대로 반환한다.
    pub async fn load(&self) -> Vec<RepositoryRecord> {
        info!(root_url = %self.config.root_url, "메타데이터 적재 시작");

        let manifest = match self.fetch_manifest().await {
            Ok(manifest) => manifest,
            Err(error) => {
                warn!(
                    root_url = %self.config.root_url,
                    %error,
                    "root manifest 적재 실패, 빈 카탈로그로 진행합니다"
                );
                return Vec::new();
            }
        };

        info!(
            repositories = manifest.repository_urls.len(),
            version = manifest.version.as_deref().unwrap_or("-"),
            "root manifest 적재 완료"
        );

        let urls = manifest
            .repository_urls
            .iter()
            .map(|entry| resolve_repository_url(&self.config.root_url, entry))
            .collect::<Vec<_>>();

        let fetched = match self.fetch_repositories(&urls).await {
            Ok(fetched) => fetched,
            Err(error) => {
                warn!(%error, "저장소 병렬 적재 실패, 빈 카탈로그로 진행합니다");
                return Vec::new();
            }
        };

        let records = urls
            .iter()
            .zip(fetched)
            .filter_map(|(url, slot)| slot.and_then(|record| keep_if_valid(url, record)))
            .collect::<Vec<_>>();

        let total_items = records
            .iter()
            .map(|record| record.items.as_ref().map_or(0, Vec::len))
            .sum::<usize>();
        info!(
            repositories = records.len(),
            items = total_items,
            "유효한 저장소 적재 완료"
        );

        records
    }

    async fn fetch_manifest(&self) -> CoreResult<RootManifest> {
        let body = self.fetcher.fetch_text(&self.config.root_url).await?;
        serde_json::from_str::<RootManifest>(&body).map_err(|error| {
            CoreError::Serialization(format!("root manifest 파싱 실패: {}", error))
        })
    }

    /// 슬롯 i는 urls[i]의 결과다. 실패한 슬롯은 None이다.
    async fn fetch_repositories(
        &self,
        urls: &[String],
    ) -> CoreResult<Vec<Option<RepositoryRecord>>> {
        let semaphore = Arc::new(Semaphore::new(self.config.worker_concurrency.max(1)));
        let mut join_set = JoinSet::new();

        for (position, url) in urls.iter().enumerate() {
            let permit = semaphore.clone().acquire_owned().await.map_err(|error| {
                CoreError::Runtime(format!("적재 semaphore 획득 실패: {}", error))
            })?;
            let fetcher = self.fetcher.clone();
            let url = url.clone();

            join_set.spawn(async move {
                let _permit: OwnedSemaphorePermit = permit;
                let outcome = fetch_repository(fetcher.as_ref(), &url).await;
                (position, url, outcome)
            });
        }

        let mut slots: Vec<Option<RepositoryRecord>> = vec![None; urls.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((position, _, Ok(record))) => slots[position] = Some(record),
                Ok((_, url, Err(error))) => {
                    warn!(%url, %error, "저장소 메타데이터 적재 실패, 해당 저장소를 건너뜁니다");
                }
                Err(error) => {
                    warn!(%error, "저장소 적재 작업 조인 실패, 해당 저장소를 건너뜁니다");
                }
            }
        }

        Ok(slots)
    }
}

async fn fetch_repository(
    fetcher: &dyn DocumentFetcher,
    url: &str,
) -> CoreResult<RepositoryRecord> {
    debug!(%url, "저장소 메타데이터 요청");
    let body = fetcher.fetch_text(url).await?;
    let record = serde_json::from_str::<RepositoryRecord>(&body).map_err(|error| {
        CoreError::Serialization(format!("저장소 메타데이터 파싱 실패: {}", error))
    })?;
    debug!(
        %url,
        repository = record.name.as_deref().unwrap_or("-"),
        "저장소 메타데이터 수신"
    );
    Ok(record)
}

fn keep_if_valid(url: &str, record: RepositoryRecord) -> Option<RepositoryRecord> {
    match validate_repository(&record) {
        Ok(()) => Some(record),
        Err(error) => {
            warn!(
                %url,
                repository = record.name.as_deref().unwrap_or("-"),
                %error,
                "저장소 메타데이터 검증 실패, 해당 저장소를 제외합니다"
            );
            None
        }
    }
}

/// 저장소 문서가 집계 대상이 될 수 있는지 검사한다.
///
/// `louvores`가 비어 있지 않은 배열이어야 하고, 모든 항목이 id와 nome를 가져야 한다.
/// 항목 내부 필드의 타입 오류는 여기서 거르지 않는다. 변환 단계가 항목 단위로 건너뛴다.
pub fn validate_repository(record: &RepositoryRecord) -> CoreResult<()> {
    let items = record.items.as_ref().ok_or_else(|| {
        CoreError::InvalidInput("\"louvores\" 배열이 없습니다".to_string())
    })?;

    if items.is_empty() {
        return Err(CoreError::InvalidInput(
            "\"louvores\" 배열이 비어 있습니다".to_string(),
        ));
    }

    if let Some(position) = items.iter().position(|item| !carries_identity(item)) {
        return Err(CoreError::InvalidInput(format!(
            "id 또는 nome가 없는 louvor가 있습니다: index={}",
            position
        )));
    }

    Ok(())
}
