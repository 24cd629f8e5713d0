// 목적:
// - 카탈로그 적재 설정 페이로드를 정의한다.
//
// 설명:
// - root manifest 주소, 요청 타임아웃, 동시 fetch 수, 로그 필터를 담는다.
// - 모든 필드는 기본값을 가지며 JSON으로 일부만 덮어쓸 수 있다.
//
// 디자인 패턴:
// - 설정 페이로드(Config Payload) + 생성 시 검증(Validate on Construct).
//
// 참조:
// - src_rs/core/fetcher.rs
// - src_rs/core/loader.rs

use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};

/// 운영 환경의 root manifest 주소다.
pub const DEFAULT_ROOT_URL: &str = "https://coletaneadigitalicm.github.io/root/root.json";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_WORKER_CONCURRENCY: usize = 8;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfigPayload {
    pub root_url: String,
    pub timeout_ms: u64,
    pub worker_concurrency: usize,
    pub log_level: String,
}

impl Default for CatalogConfigPayload {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            worker_concurrency: DEFAULT_WORKER_CONCURRENCY,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CatalogConfigPayload {
    /// JSON 문자열에서 설정을 읽고 검증한다. 누락된 필드는 기본값을 쓴다.
    pub fn from_json(payload_json: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(payload_json).map_err(|error| {
            CoreError::Serialization(format!("설정 JSON 파싱 실패: {}", error))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.root_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "root_url은 비어 있을 수 없습니다".to_string(),
            ));
        }

        if self.timeout_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "timeout_ms는 1 이상이어야 합니다".to_string(),
            ));
        }

        if self.worker_concurrency == 0 {
            return Err(CoreError::InvalidConfig(
                "worker_concurrency는 1 이상이어야 합니다".to_string(),
            ));
        }

        Ok(())
    }
}
