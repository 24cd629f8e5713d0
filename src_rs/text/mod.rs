// 목적:
// - 검색어/이름 정규화 계층 모듈을 선언한다.
//
// 설명:
// - 숫자 정규화와 검색 키 정규화를 분리한다. 두 모듈 모두 순수 함수만 가진다.
//
// 참조:
// - src_rs/text/numeric.rs
// - src_rs/text/normalize.rs

pub mod normalize;
pub mod numeric;
