// 목적:
// - 핵심 런타임 계층 모듈을 선언한다.
//
// 설명:
// - 원격 적재, 원시->정규 변환, 검색 판정, 검색 파이프라인과 공통 오류/설정 모델을 분리한다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/loader.rs
// - src_rs/core/adapter.rs
// - src_rs/core/search_pipeline.rs

pub mod adapter;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod raw;
pub mod search_pipeline;
pub mod telemetry;
