// 목적:
// - Coletanea 카탈로그 검색 코어의 진입점을 제공한다.
//
// 설명:
// - 원격 메타데이터 적재 -> 정규 엔티티 변환 -> 메모리 캐시 -> 검색 순서의 파이프라인이다.
// - 화면/뷰어 연동은 이 크레이트 밖의 책임이다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/index/text).
//
// 참조:
// - src_rs/api/catalog_bridge.rs
// - src_rs/core/search_pipeline.rs

pub mod api;
pub mod core;
pub mod index;
pub mod text;

pub use crate::api::catalog_bridge::CatalogBridge;
pub use crate::core::config::CatalogConfigPayload;
pub use crate::core::errors::{CoreError, CoreResult};
pub use crate::core::model::{Arrangement, Item, Material};
pub use crate::core::search_pipeline::{SearchEngine, SearchResultPayload};
pub use crate::index::catalog_index::{CatalogIndex, CatalogStats};
