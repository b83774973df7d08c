use serde::Serialize;

use crate::units::{from_liters, WaterVolumeUnit};

/// 환수량 결과. 같은 물량을 세 단위로 표시한다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WaterChangeResult {
    pub liters: f64,
    pub us_gallons: f64,
    pub uk_gallons: f64,
}

/// 수조 물량과 환수 비율[%]로 환수량을 구한다.
///
/// 물량이나 비율이 0 이하이거나 유한하지 않으면 모두 0 이다. 100 % 초과는 그대로 계산한다.
pub fn water_change(tank_liters: f64, percent: f64) -> WaterChangeResult {
    if tank_liters <= 0.0 || !tank_liters.is_finite() || percent <= 0.0 || !percent.is_finite() {
        return WaterChangeResult::default();
    }
    let liters = tank_liters * (percent / 100.0);
    WaterChangeResult {
        liters,
        us_gallons: from_liters(liters, WaterVolumeUnit::UsGallon),
        uk_gallons: from_liters(liters, WaterVolumeUnit::UkGallon),
    }
}
