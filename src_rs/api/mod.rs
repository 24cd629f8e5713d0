// 목적:
// - UI 계층 경계 모듈을 선언한다.
//
// 설명:
// - 동기식 브릿지 하나로 검색/재적재/단건 조회를 노출한다.
//
// 참조:
// - src_rs/api/catalog_bridge.rs

pub mod catalog_bridge;
