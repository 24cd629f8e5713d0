// 목적:
// - 카탈로그의 정규(canonical) 엔티티를 정의한다.
//
// 설명:
// - Item -> Arrangement -> Material 소유 트리다. 공유 참조는 없다.
// - 적재/재적재 주기마다 어댑터가 새로 만들고 이후에는 변경하지 않는다.
//
// 참조:
// - src_rs/core/adapter.rs
// - src_rs/index/catalog_index.rs

use serde::{Deserialize, Serialize};

/// 하나의 곡(작품)이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub alternate_names: Vec<String>,
    pub arrangements: Vec<Arrangement>,
    pub source_repository: String,
    pub source_version: String,
}

/// 곡의 편곡 하나. `last_modified`는 `YYYY-MM-DD` 문자열 그대로 보관한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    pub title: String,
    pub last_modified: String,
    pub materials: Vec<Material>,
}

/// 편곡에 딸린 파일/링크 하나.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub title: String,
    pub category: String,
    pub kind: String,
    pub url: String,
}
