use serde::{Deserialize, Serialize};

use super::length::DimensionUnit;

/// 수조 물량 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterVolumeUnit {
    #[serde(rename = "L", alias = "l", alias = "Liter")]
    Liter,
    #[serde(rename = "US", alias = "us", alias = "UsGallon")]
    UsGallon,
    #[serde(rename = "UK", alias = "uk", alias = "UkGallon")]
    UkGallon,
}

/// 1 US gal 의 리터 값.
pub const US_GAL_TO_L: f64 = 3.78541;
/// 1 UK gal 의 리터 값.
pub const UK_GAL_TO_L: f64 = 4.54609;
/// 1 L 의 US gal 값. 제품 라벨 계수가 모두 갤런 기준이라 처방식에서 이 값을 쓴다.
pub const LIT_TO_US_GAL: f64 = 0.264172;

const CM3_TO_L: f64 = 0.001;
const IN3_TO_L: f64 = 0.0163871;
const FT3_TO_L: f64 = 28.3168;

impl WaterVolumeUnit {
    pub fn label(&self) -> &'static str {
        match self {
            WaterVolumeUnit::Liter => "L",
            WaterVolumeUnit::UsGallon => "US gal",
            WaterVolumeUnit::UkGallon => "UK gal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "l" | "liter" | "litre" | "liters" | "litres" => Some(WaterVolumeUnit::Liter),
            "us" | "gal" | "usgal" | "us-gal" | "us_gal" => Some(WaterVolumeUnit::UsGallon),
            "uk" | "ukgal" | "uk-gal" | "uk_gal" | "imp" => Some(WaterVolumeUnit::UkGallon),
            _ => None,
        }
    }
}

/// 주어진 물량을 리터로 변환한다.
pub fn to_liters(value: f64, unit: WaterVolumeUnit) -> f64 {
    match unit {
        WaterVolumeUnit::Liter => value,
        WaterVolumeUnit::UsGallon => value * US_GAL_TO_L,
        WaterVolumeUnit::UkGallon => value * UK_GAL_TO_L,
    }
}

/// 리터 값을 원하는 단위로 변환한다.
pub fn from_liters(value_l: f64, unit: WaterVolumeUnit) -> f64 {
    match unit {
        WaterVolumeUnit::Liter => value_l,
        WaterVolumeUnit::UsGallon => value_l / US_GAL_TO_L,
        WaterVolumeUnit::UkGallon => value_l / UK_GAL_TO_L,
    }
}

/// 물량을 변환한다.
pub fn convert_water_volume(value: f64, from: WaterVolumeUnit, to: WaterVolumeUnit) -> f64 {
    let l = to_liters(value, from);
    from_liters(l, to)
}

/// 처방식 전용 리터→US gal 환산. `from_liters` 와 달리 라벨 계수용 상수를 쓴다.
pub fn liters_to_us_gal(liters: f64) -> f64 {
    liters * LIT_TO_US_GAL
}

/// 가로×세로×높이로 수조 물량(리터)을 구한다. 부피가 0 이하이거나 유한하지 않으면 0.
pub fn dimensions_to_liters(length: f64, width: f64, height: f64, unit: DimensionUnit) -> f64 {
    let volume = length * width * height;
    if volume <= 0.0 || !volume.is_finite() {
        return 0.0;
    }
    match unit {
        DimensionUnit::Centimeter => volume * CM3_TO_L,
        DimensionUnit::Inch => volume * IN3_TO_L,
        DimensionUnit::Foot => volume * FT3_TO_L,
    }
}
