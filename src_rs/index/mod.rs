// 목적:
// - 메모리 카탈로그 인덱스 계층 모듈을 선언한다.
//
// 설명:
// - 적재/변환 결과를 프로세스 수명 동안 보관하는 캐시 객체를 둔다.
//
// 디자인 패턴:
// - 소유형 캐시(Owned Cache).
//
// 참조:
// - src_rs/index/catalog_index.rs

pub mod catalog_index;
