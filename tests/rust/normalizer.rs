use rstest::rstest;

use coletanea_search::text::normalize::normalize_search_key;
use coletanea_search::text::numeric::parse_canonical_number;

#[rstest]
#[case("007", Some(7))]
#[case("7", Some(7))]
#[case("042", Some(42))]
#[case("  003 ", Some(3))]
#[case("000", Some(0))]
#[case("7a", None)]
#[case("", None)]
#[case("   ", None)]
#[case("4 2", None)]
#[case("-3", None)]
#[case("1.5", None)]
#[case("٣", None)]
#[case("99999999999999999999999", None)]
fn parses_canonical_numbers(#[case] raw: &str, #[case] expected: Option<u64>) {
    assert_eq!(parse_canonical_number(raw), expected);
}

#[rstest]
#[case("São João!", "SAO JOAO")]
#[case("Graça Infinita", "GRACA INFINITA")]
#[case("  ça infi ", "CA INFI")]
#[case("Ao Único Que é Digno", "AO UNICO QUE E DIGNO")]
#[case("Santo, Santo, Santo", "SANTO SANTO SANTO")]
#[case("042 - Hino", "042  HINO")]
#[case("!!!", "")]
#[case("Ñandú\tçedilha", "NANDUCEDILHA")]
fn normalizes_search_keys(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(normalize_search_key(raw), expected);
}

#[rstest]
#[case("São João!")]
#[case("  mixed CASE 123 ")]
#[case("Ærø ß ǰ")]
#[case("cafe\u{0301} crème")]
#[case("")]
fn search_key_is_idempotent(#[case] raw: &str) {
    let once = normalize_search_key(raw);
    assert_eq!(normalize_search_key(&once), once);
}

#[test]
fn precomposed_and_decomposed_forms_share_a_key() {
    assert_eq!(
        normalize_search_key("caf\u{00e9}"),
        normalize_search_key("cafe\u{0301}")
    );
}
