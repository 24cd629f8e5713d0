// 목적:
// - 검색어를 분류하고 항목 일치 여부를 판정한다.
//
// 설명:
// - 공백만 있는 검색어는 전체 반환, 숫자로만 된 검색어는 숫자 모드, 나머지는 텍스트 모드다.
// - 숫자 모드는 alternate_names만 정확히 비교한다. name은 비교하지 않는다.
// - 텍스트 모드는 정규화 키 기준 부분 문자열 일치다.
// - 결과는 카탈로그 순서를 유지한다. 점수/정렬은 없다.
//
// 디자인 패턴:
// - 전략 열거형(Strategy Enum).
//
// 참조:
// - src_rs/text/numeric.rs
// - src_rs/text/normalize.rs

use crate::core::model::Item;
use crate::text::normalize::normalize_search_key;
use crate::text::numeric::parse_canonical_number;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    All,
    Numeric(u64),
    Text(String),
}

impl SearchMode {
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::All => "all",
            SearchMode::Numeric(_) => "numeric",
            SearchMode::Text(_) => "text",
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            SearchMode::All => true,
            SearchMode::Numeric(number) => item
                .alternate_names
                .iter()
                .any(|alias| parse_canonical_number(alias) == Some(*number)),
            SearchMode::Text(key) => {
                normalize_search_key(&item.name).contains(key.as_str())
                    || item
                        .alternate_names
                        .iter()
                        .any(|alias| normalize_search_key(alias).contains(key.as_str()))
            }
        }
    }
}

pub fn classify_query(query: &str) -> SearchMode {
    if query.trim().is_empty() {
        return SearchMode::All;
    }

    match parse_canonical_number(query) {
        Some(number) => SearchMode::Numeric(number),
        None => SearchMode::Text(normalize_search_key(query)),
    }
}

pub fn filter_items(items: &[Item], mode: &SearchMode) -> Vec<Item> {
    items
        .iter()
        .filter(|item| mode.matches(item))
        .cloned()
        .collect()
}
