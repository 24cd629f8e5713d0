// 목적:
// - 원시 저장소 문서를 정규 엔티티(Item/Arrangement/Material)로 변환한다.
//
// 설명:
// - 변환은 전함수(total)다. 항목/편곡 단위 실패는 건너뛰고 사유를 기록하며,
//   같은 문서의 다른 항목은 계속 처리한다.
// - 결과는 (성공 목록, 건너뜀 목록) 쌍으로 돌려준다.
//
// 디자인 패턴:
// - 2단계 파이프라인의 2단계(Raw -> Canonical) + 결과 수집(Partition).
//
// 참조:
// - src_rs/core/raw.rs
// - src_rs/core/model.rs

use serde::Deserialize;
use serde_json::Value;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

use crate::core::model::{Arrangement, Item, Material};
use crate::core::raw::{RawArrangement, RawItem, RawMaterial, RepositoryRecord};

pub const UNKNOWN_REPOSITORY: &str = "Unknown";
pub const DEFAULT_SOURCE_VERSION: &str = "0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingItems,
    MissingIdentity,
    MissingMaterials { arrangement_index: usize },
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingItems => write!(f, "\"louvores\" 배열이 없습니다"),
            SkipReason::MissingIdentity => write!(f, "id 또는 nome가 없습니다"),
            SkipReason::MissingMaterials { arrangement_index } => write!(
                f,
                "arranjos[{}]에 \"materiais\"가 없습니다",
                arrangement_index
            ),
            SkipReason::Malformed(detail) => write!(f, "필드 형식이 올바르지 않습니다: {}", detail),
        }
    }
}

/// 변환에서 제외된 레코드 하나.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub repository: String,
    pub item_id: Option<String>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdaptOutcome {
    pub items: Vec<Item>,
    pub skipped: Vec<SkippedEntry>,
}

/// 저장소 문서 목록을 정규 엔티티로 변환하고 건너뛴 항목을 진단 로그로 남긴다.
pub fn adapt(records: &[RepositoryRecord]) -> Vec<Item> {
    let outcome = adapt_records(records);
    log_skipped(&outcome.skipped);
    outcome.items
}

pub fn log_skipped(skipped: &[SkippedEntry]) {
    for entry in skipped {
        warn!(
            repository = %entry.repository,
            item_id = entry.item_id.as_deref().unwrap_or("-"),
            reason = %entry.reason,
            "레코드 변환 제외"
        );
    }
}

pub fn adapt_records(records: &[RepositoryRecord]) -> AdaptOutcome {
    let mut outcome = AdaptOutcome::default();

    for record in records {
        let repository = repository_name(record);
        let version = record
            .version
            .clone()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE_VERSION.to_string());

        let Some(raw_items) = record.items.as_ref() else {
            outcome.skipped.push(SkippedEntry {
                repository,
                item_id: None,
                reason: SkipReason::MissingItems,
            });
            continue;
        };

        for (item_index, value) in raw_items.iter().enumerate() {
            let raw = match RawItem::deserialize(value) {
                Ok(raw) => raw,
                Err(error) => {
                    outcome.skipped.push(SkippedEntry {
                        repository: repository.clone(),
                        item_id: raw_item_id(value),
                        reason: SkipReason::Malformed(format!(
                            "louvores[{}]: {}",
                            item_index, error
                        )),
                    });
                    continue;
                }
            };

            match adapt_item(&raw, &repository, &version) {
                Ok((item, mut skipped)) => {
                    outcome.items.push(item);
                    outcome.skipped.append(&mut skipped);
                }
                Err(entry) => outcome.skipped.push(entry),
            }
        }
    }

    report_id_collisions(&outcome.items);
    info!(
        repositories = records.len(),
        items = outcome.items.len(),
        skipped = outcome.skipped.len(),
        "메타데이터 변환 완료"
    );
    outcome
}

fn repository_name(record: &RepositoryRecord) -> String {
    record
        .name
        .clone()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_REPOSITORY.to_string())
}

/// 항목 하나를 변환한다. 편곡 단위로 건너뛴 내역은 성공 결과와 함께 돌려준다.
fn adapt_item(
    raw: &RawItem,
    repository: &str,
    version: &str,
) -> Result<(Item, Vec<SkippedEntry>), SkippedEntry> {
    let (id, name) = match (&raw.id, &raw.name) {
        (Some(id), Some(name)) if raw.has_identity() => (id.clone(), name.clone()),
        _ => {
            return Err(SkippedEntry {
                repository: repository.to_string(),
                item_id: raw.id.clone(),
                reason: SkipReason::MissingIdentity,
            });
        }
    };

    let mut skipped = Vec::new();
    let mut arrangements = Vec::new();
    for (arrangement_index, value) in raw.arrangements.iter().flatten().enumerate() {
        match adapt_arrangement(value, arrangement_index) {
            Ok(arrangement) => arrangements.push(arrangement),
            Err(reason) => skipped.push(SkippedEntry {
                repository: repository.to_string(),
                item_id: Some(id.clone()),
                reason,
            }),
        }
    }

    let item = Item {
        id,
        name,
        alternate_names: raw.alternate_names.clone().unwrap_or_default(),
        arrangements,
        source_repository: repository.to_string(),
        source_version: version.to_string(),
    };

    Ok((item, skipped))
}

fn adapt_arrangement(value: &Value, arrangement_index: usize) -> Result<Arrangement, SkipReason> {
    let raw = RawArrangement::deserialize(value).map_err(|error| {
        SkipReason::Malformed(format!("arranjos[{}]: {}", arrangement_index, error))
    })?;
    let materials = raw
        .materials
        .as_ref()
        .ok_or(SkipReason::MissingMaterials { arrangement_index })?;

    Ok(Arrangement {
        title: raw.title.clone().unwrap_or_default(),
        last_modified: raw.last_modified.clone().unwrap_or_default(),
        materials: materials.iter().map(adapt_material).collect(),
    })
}

fn adapt_material(raw: &RawMaterial) -> Material {
    Material {
        title: raw.title.clone().unwrap_or_default(),
        category: raw.category.clone().unwrap_or_default(),
        kind: raw.kind.clone().unwrap_or_default(),
        url: raw.url.clone().unwrap_or_default(),
    }
}

/// 해석에 실패한 원소에서 진단용 id를 꺼낸다. 문자열이 아니면 JSON 표기 그대로 쓴다.
fn raw_item_id(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::Null => None,
        Value::String(id) => Some(id.clone()),
        other => Some(other.to_string()),
    }
}

/// 서로 다른 위치에서 같은 id가 나오면 경고만 남긴다. 조회 시에는 카탈로그 순서상 첫 항목이 이긴다.
fn report_id_collisions(items: &[Item]) {
    let mut first_seen = HashMap::<&str, &str>::with_capacity(items.len());
    for item in items {
        match first_seen.entry(item.id.as_str()) {
            Entry::Occupied(kept) => warn!(
                item_id = %item.id,
                kept_repository = *kept.get(),
                shadowed_repository = %item.source_repository,
                "중복 id 감지"
            ),
            Entry::Vacant(slot) => {
                slot.insert(item.source_repository.as_str());
            }
        }
    }
}
