// 목적:
// - tracing 구독자(subscriber)를 초기화한다.
//
// 설명:
// - 필터 지시자는 설정 페이로드에서만 받는다. 환경 변수는 읽지 않는다.
// - 이미 전역 구독자가 설치되어 있으면 아무 것도 하지 않는다.
//
// 참조:
// - src_rs/core/config.rs

use tracing_subscriber::EnvFilter;

use crate::core::config::DEFAULT_LOG_LEVEL;

/// 전역 tracing 구독자를 설치한다. 두 번째 호출부터는 false를 반환한다.
pub fn init_tracing(level: &str) -> bool {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|error| {
        eprintln!(
            "로그 필터 해석 실패, 기본값({})을 사용합니다: {}",
            DEFAULT_LOG_LEVEL, error
        );
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
