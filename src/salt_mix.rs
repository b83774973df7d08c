//! 해수염 혼합량 계산기와의 경계.
//!
//! 염 브랜드 테이블과 계산식은 외부 모듈 소관이라 여기서는 요청/응답 형식과 트레이트만 정의한다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaltMixRequest {
    pub product_name: String,
    pub volume_gallons: f64,
    /// 현재 염도 [ppt]
    pub current_ppt: f64,
    /// 목표 염도 [ppt]
    pub desired_ppt: f64,
}

impl SaltMixRequest {
    /// 계산을 시도할 만한 요청인지 확인한다. 물량이 있고 목표가 현재보다 높아야 한다.
    pub fn is_actionable(&self) -> bool {
        self.volume_gallons > 0.0 && self.desired_ppt > self.current_ppt
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaltMixFormatted {
    pub grams: String,
    pub kilograms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaltMixResult {
    pub grams: f64,
    pub formatted: SaltMixFormatted,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaltMixError {
    #[error("알 수 없는 해수염 제품: {0}")]
    UnknownProduct(String),
    #[error("입력 오류: {0}")]
    InvalidInput(String),
}

/// 해수염 혼합량 계산기.
pub trait SaltMixCalculator {
    fn compute_salt_mix(&self, request: &SaltMixRequest) -> Result<SaltMixResult, SaltMixError>;
}

impl<F> SaltMixCalculator for F
where
    F: Fn(&SaltMixRequest) -> Result<SaltMixResult, SaltMixError>,
{
    fn compute_salt_mix(&self, request: &SaltMixRequest) -> Result<SaltMixResult, SaltMixError> {
        self(request)
    }
}
