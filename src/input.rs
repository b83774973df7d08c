//! 계산 엔진 입력 정규화. 엔진은 유한한 숫자만 받는다고 가정하므로 경계에서 0 으로 바꾼다.

/// 문자열을 실수로 해석한다. 해석할 수 없거나 유한하지 않으면 0.
pub fn parse_or_zero(s: &str) -> f64 {
    finite_or_zero(s.trim().parse::<f64>().unwrap_or(0.0))
}

/// NaN/무한대를 0 으로 바꾼다.
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
