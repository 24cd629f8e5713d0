/// 앞뒤 공백을 제거한 문자열이 십진 숫자로만 이루어졌으면 그 값을 반환한다.
///
/// 앞자리 0은 값에 영향을 주지 않는다("007" -> 7). 숫자가 아닌 문자가 하나라도
/// 섞이거나 빈 문자열이면 `None`이다. u64 범위를 넘는 값도 `None`으로 취급한다.
pub fn parse_canonical_number(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let significant = trimmed.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }

    significant.parse::<u64>().ok()
}
