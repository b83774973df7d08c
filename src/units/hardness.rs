//! 취미가용 경도 표기(dGH/dKH ↔ ppm) 변환.
//!
//! 1 dH = 17.86 ppm(CaCO₃) 로 계산하며, 처방식 피벗(2.8/50)과는 별개로 수질 표시용으로만 쓴다.

pub const PPM_PER_DEGREE: f64 = 17.86;

/// ppm 을 경도 도수로 바꾼다. 0 이하 또는 유한하지 않은 값은 0.
pub fn ppm_to_degrees(ppm: f64) -> f64 {
    if ppm <= 0.0 || !ppm.is_finite() {
        return 0.0;
    }
    ppm / PPM_PER_DEGREE
}

/// 경도 도수를 ppm 으로 바꾼다. 0 이하 또는 유한하지 않은 값은 0.
pub fn degrees_to_ppm(degrees: f64) -> f64 {
    if degrees <= 0.0 || !degrees.is_finite() {
        return 0.0;
    }
    degrees * PPM_PER_DEGREE
}
