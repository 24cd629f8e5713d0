// 목적:
// - 원격 JSON 문서를 가져오는 경계(seam)를 정의하고 HTTP 구현을 제공한다.
//
// 설명:
// - 적재기는 DocumentFetcher 트레이트에만 의존한다. 테스트는 메모리 구현으로 대체한다.
// - HTTP 구현은 요청별 타임아웃을 강제하고 2xx 이외 상태를 실패로 본다.
//
// 디자인 패턴:
// - 어댑터(Adapter) + 트레이트 경계(Trait Seam).
//
// 참조:
// - src_rs/core/loader.rs

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::core::config::CatalogConfigPayload;
use crate::core::errors::{CoreError, CoreResult};

const ERROR_BODY_PREVIEW_CHARS: usize = 200;

#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// 주어진 URL의 본문을 문자열로 가져온다.
    async fn fetch_text(&self, url: &str) -> CoreResult<String>;
}

#[derive(Clone)]
pub struct HttpDocumentFetcher {
    client: Client,
}

impl HttpDocumentFetcher {
    pub fn new(config: &CatalogConfigPayload) -> CoreResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|error| CoreError::Http(format!("HTTP 클라이언트 생성 실패: {}", error)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch_text(&self, url: &str) -> CoreResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| CoreError::Http(format!("HTTP 요청 실패: url={}, {}", url, error)))?;

        let status = response.status();
        let body = response.text().await.map_err(|error| {
            CoreError::Http(format!("HTTP 본문 읽기 실패: url={}, {}", url, error))
        })?;

        if !status.is_success() {
            return Err(CoreError::Http(format!(
                "HTTP 상태 오류: url={}, status={}, body={}",
                url,
                status,
                truncate_body(&body)
            )));
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> &str {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_CHARS) {
        Some((cut, _)) => &body[..cut],
        None => body,
    }
}

/// manifest에 적힌 저장소 주소를 manifest 주소 기준으로 해석한다.
///
/// 절대 주소는 그대로 두고, 상대 주소는 manifest 위치에 join한다.
/// manifest 주소 자체가 URL이 아니면 원문을 그대로 돌려준다.
pub fn resolve_repository_url(root_url: &str, entry: &str) -> String {
    let trimmed = entry.trim();
    if let Ok(absolute) = Url::parse(trimmed) {
        return absolute.to_string();
    }

    match Url::parse(root_url).and_then(|base| base.join(trimmed)) {
        Ok(joined) => joined.to_string(),
        Err(_) => trimmed.to_string(),
    }
}
