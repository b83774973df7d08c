use serde::{Deserialize, Serialize};

/// 수조 치수 단위. 내부 기준은 인치이다 (바닥재 포대 환산이 입방인치 기준).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionUnit {
    #[serde(rename = "cm", alias = "Centimeter")]
    Centimeter,
    #[serde(rename = "in", alias = "Inch")]
    Inch,
    #[serde(rename = "ft", alias = "Foot")]
    Foot,
}

pub const CM_PER_INCH: f64 = 2.54;

impl DimensionUnit {
    pub fn label(&self) -> &'static str {
        match self {
            DimensionUnit::Centimeter => "cm",
            DimensionUnit::Inch => "in",
            DimensionUnit::Foot => "ft",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimetre" => Some(DimensionUnit::Centimeter),
            "in" | "inch" | "\"" => Some(DimensionUnit::Inch),
            "ft" | "foot" | "feet" => Some(DimensionUnit::Foot),
            _ => None,
        }
    }
}

fn to_inch(value: f64, unit: DimensionUnit) -> f64 {
    match unit {
        DimensionUnit::Centimeter => value / CM_PER_INCH,
        DimensionUnit::Inch => value,
        DimensionUnit::Foot => value * 12.0,
    }
}

fn from_inch(value_in: f64, unit: DimensionUnit) -> f64 {
    match unit {
        DimensionUnit::Centimeter => value_in * CM_PER_INCH,
        DimensionUnit::Inch => value_in,
        DimensionUnit::Foot => value_in / 12.0,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_dimension(value: f64, from: DimensionUnit, to: DimensionUnit) -> f64 {
    let inch = to_inch(value, from);
    from_inch(inch, to)
}
