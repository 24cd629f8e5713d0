use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 검색 비교용 키를 만든다.
///
/// NFD 분해 후 결합 부호를 버리고 대문자화한 뒤 `[A-Z0-9 ]` 밖의 문자를 지우고
/// 앞뒤 공백을 제거한다. 결과에 다시 적용해도 값이 바뀌지 않는다.
pub fn normalize_search_key(raw: &str) -> String {
    let stripped = raw
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>();

    let kept = stripped
        .to_uppercase()
        .chars()
        .filter(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || *ch == ' ')
        .collect::<String>();

    kept.trim().to_string()
}
