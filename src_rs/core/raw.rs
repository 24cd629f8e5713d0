// 목적:
// - 원격 JSON 문서(root manifest / 저장소 메타데이터)의 원시 형태를 정의한다.
//
// 설명:
// - 선택 필드는 전부 Option으로 드러내 변환 단계가 "없는 필드"를 실수로 읽지 못하게 한다.
// - louvores/arranjos 원소는 Value로 남겨 두고 변환 단계에서 하나씩 해석한다.
//   원소 하나의 타입 오류가 문서 전체를 버리게 만들지 않는다.
// - 필드명은 원격 문서 규약(포르투갈어 키)을 serde rename으로 맞춘다.
//
// 디자인 패턴:
// - 2단계 파이프라인의 1단계(Strict Raw Parse).
//
// 참조:
// - src_rs/core/loader.rs
// - src_rs/core/adapter.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ repos: [...], version: "..." }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootManifest {
    #[serde(rename = "repos")]
    pub repository_urls: Vec<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// 저장소 하나가 배포하는 메타데이터 문서.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryRecord {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "versao", default)]
    pub version: Option<String>,
    #[serde(rename = "louvores", default)]
    pub items: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "outrosNomes", default)]
    pub alternate_names: Option<Vec<String>>,
    #[serde(rename = "arranjos", default)]
    pub arrangements: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawArrangement {
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "dataUltimaAlteracao", default)]
    pub last_modified: Option<String>,
    #[serde(rename = "materiais", default)]
    pub materials: Option<Vec<RawMaterial>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawMaterial {
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RawItem {
    /// id와 nome가 모두 비어 있지 않은지 확인한다.
    pub fn has_identity(&self) -> bool {
        non_blank(self.id.as_deref()) && non_blank(self.name.as_deref())
    }
}

/// 해석 전 원소에 id와 nome가 있는지 확인한다. 값의 타입은 따지지 않는다.
pub fn carries_identity(item: &Value) -> bool {
    present(item.get("id")) && present(item.get("nome"))
}

fn present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.trim().is_empty(),
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

fn non_blank(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}
