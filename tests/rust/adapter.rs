use serde_json::{json, Value};

use coletanea_search::core::adapter::{
    adapt, adapt_records, SkipReason, DEFAULT_SOURCE_VERSION, UNKNOWN_REPOSITORY,
};
use coletanea_search::core::raw::RepositoryRecord;

use crate::support::{item, material, repository};

fn record(document: Value) -> RepositoryRecord {
    serde_json::from_value(document).unwrap()
}

#[test]
fn maps_full_item_graph() {
    let records = vec![record(json!({
        "nome": "Coletanea PES",
        "versao": "3.2.1",
        "louvores": [{
            "id": "LCP458",
            "nome": "Maravilhoso És",
            "outrosNomes": ["458"],
            "arranjos": [{
                "titulo": "Coro e Piano",
                "dataUltimaAlteracao": "2024-02-10",
                "materiais": [
                    {
                        "titulo": "Grade",
                        "categoria": "score",
                        "tipo": "pdf",
                        "url": "https://cdn.test/458/grade.pdf"
                    },
                    {
                        "titulo": "Ensaio",
                        "categoria": "playback",
                        "tipo": "audio",
                        "url": "/458/ensaio.mp3"
                    }
                ]
            }]
        }]
    }))];

    let items = adapt(&records);

    assert_eq!(items.len(), 1);
    let adapted = &items[0];
    assert_eq!(adapted.id, "LCP458");
    assert_eq!(adapted.name, "Maravilhoso És");
    assert_eq!(adapted.alternate_names, vec!["458"]);
    assert_eq!(adapted.source_repository, "Coletanea PES");
    assert_eq!(adapted.source_version, "3.2.1");

    let arrangement = &adapted.arrangements[0];
    assert_eq!(arrangement.title, "Coro e Piano");
    assert_eq!(arrangement.last_modified, "2024-02-10");
    assert_eq!(arrangement.materials.len(), 2);
    assert_eq!(arrangement.materials[1].kind, "audio");
    assert_eq!(arrangement.materials[1].category, "playback");
    assert_eq!(arrangement.materials[1].url, "/458/ensaio.mp3");
}

#[test]
fn fills_defaults_for_optional_fields() {
    let records = vec![record(json!({
        "louvores": [{ "id": "1", "nome": "Um" }]
    }))];

    let items = adapt(&records);

    assert_eq!(items[0].alternate_names, Vec::<String>::new());
    assert!(items[0].arrangements.is_empty());
    assert_eq!(items[0].source_repository, UNKNOWN_REPOSITORY);
    assert_eq!(items[0].source_version, DEFAULT_SOURCE_VERSION);
}

#[test]
fn item_without_id_is_skipped_and_siblings_survive() {
    let records = vec![record(repository(
        "A",
        vec![
            item("a1", "Alfa", &[]),
            json!({ "nome": "Sem id" }),
            item("a3", "Gama", &[]),
        ],
    ))];

    let outcome = adapt_records(&records);

    let ids = outcome.items.iter().map(|item| item.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["a1", "a3"]);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].reason, SkipReason::MissingIdentity);
    assert_eq!(outcome.skipped[0].repository, "A");
}

#[test]
fn arrangement_without_materials_is_skipped_not_defaulted() {
    let records = vec![record(json!({
        "nome": "A",
        "louvores": [{
            "id": "a1",
            "nome": "Alfa",
            "arranjos": [
                { "titulo": "Sem materiais", "dataUltimaAlteracao": "2023-01-01" },
                {
                    "titulo": "Coro",
                    "dataUltimaAlteracao": "2023-01-02",
                    "materiais": [material("Coro", "/a1.pdf")]
                }
            ]
        }]
    }))];

    let outcome = adapt_records(&records);

    assert_eq!(outcome.items.len(), 1);
    let arrangements = &outcome.items[0].arrangements;
    assert_eq!(arrangements.len(), 1);
    assert_eq!(arrangements[0].title, "Coro");
    assert_eq!(
        outcome.skipped[0].reason,
        SkipReason::MissingMaterials { arrangement_index: 0 }
    );
    assert_eq!(outcome.skipped[0].item_id.as_deref(), Some("a1"));
}

#[test]
fn empty_materials_list_is_kept_as_is() {
    let records = vec![record(json!({
        "louvores": [{
            "id": "a1",
            "nome": "Alfa",
            "arranjos": [{
                "titulo": "Vazio",
                "dataUltimaAlteracao": "2023-01-01",
                "materiais": []
            }]
        }]
    }))];

    let outcome = adapt_records(&records);

    assert!(outcome.skipped.is_empty());
    assert!(outcome.items[0].arrangements[0].materials.is_empty());
}

#[test]
fn record_without_items_is_reported() {
    let records = vec![
        record(json!({ "nome": "Vazio" })),
        record(repository("B", vec![item("b1", "Beta", &[])])),
    ];

    let outcome = adapt_records(&records);

    assert_eq!(outcome.items.len(), 1);
    assert_eq!(outcome.skipped[0].reason, SkipReason::MissingItems);
    assert_eq!(outcome.skipped[0].repository, "Vazio");
}

#[test]
fn preserves_repository_then_source_order() {
    let records = vec![
        record(repository("A", vec![item("a2", "Dois", &[]), item("a1", "Um", &[])])),
        record(repository("B", vec![item("b1", "Tres", &[])])),
    ];

    let ids = adapt(&records)
        .into_iter()
        .map(|item| item.id)
        .collect::<Vec<_>>();

    assert_eq!(ids, vec!["a2", "a1", "b1"]);
}

#[test]
fn colliding_ids_are_kept_untouched() {
    let records = vec![
        record(repository("A", vec![item("dup", "Primeiro", &[])])),
        record(repository("B", vec![item("dup", "Segundo", &[])])),
    ];

    let items = adapt(&records);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].source_repository, "A");
    assert_eq!(items[1].source_repository, "B");
}

#[test]
fn wrongly_typed_item_is_skipped_and_siblings_survive() {
    let records = vec![record(repository(
        "A",
        vec![
            item("a1", "Alfa", &[]),
            json!({ "id": 609, "nome": "Numerado" }),
            json!({ "id": "a3", "nome": "Gama", "outrosNomes": "nao e lista" }),
            item("a4", "Delta", &[]),
        ],
    ))];

    let outcome = adapt_records(&records);

    let ids = outcome.items.iter().map(|item| item.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["a1", "a4"]);
    assert_eq!(outcome.skipped.len(), 2);
    assert!(matches!(outcome.skipped[0].reason, SkipReason::Malformed(_)));
    assert_eq!(outcome.skipped[0].item_id.as_deref(), Some("609"));
    assert!(matches!(outcome.skipped[1].reason, SkipReason::Malformed(_)));
    assert_eq!(outcome.skipped[1].item_id.as_deref(), Some("a3"));
}

#[test]
fn wrongly_typed_material_skips_only_its_arrangement() {
    let records = vec![record(json!({
        "nome": "A",
        "louvores": [
            {
                "id": "a1",
                "nome": "Alfa",
                "arranjos": [
                    {
                        "titulo": "Quebrado",
                        "dataUltimaAlteracao": "2023-01-01",
                        "materiais": [{ "titulo": "Coro", "tipo": "pdf", "url": 42 }]
                    },
                    {
                        "titulo": "Coro",
                        "dataUltimaAlteracao": "2023-01-02",
                        "materiais": [material("Coro", "/a1.pdf")]
                    }
                ]
            },
            item("a2", "Beta", &[])
        ]
    }))];

    let outcome = adapt_records(&records);

    assert_eq!(outcome.items.len(), 2);
    let arrangements = &outcome.items[0].arrangements;
    assert_eq!(arrangements.len(), 1);
    assert_eq!(arrangements[0].title, "Coro");
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].item_id.as_deref(), Some("a1"));
    match &outcome.skipped[0].reason {
        SkipReason::Malformed(detail) => assert!(detail.starts_with("arranjos[0]")),
        other => panic!("unexpected skip reason: {:?}", other),
    }
}
