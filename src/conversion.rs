use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnsupportedQuantity(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `meq/L`, `dKH`, `ppm`, `L`, `US`, `cm`, `in` 등을 사용할 수 있다.
/// 처방 계산 경로와 달리 여기서는 알 수 없는 단위를 오류로 돌려준다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Concentration => {
            let from = parse_concentration_scale(from_unit_str)?;
            let to = parse_concentration_scale(to_unit_str)?;
            Ok(convert_concentration(value, from, to))
        }
        QuantityKind::WaterVolume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_water_volume(value, from, to))
        }
        QuantityKind::Dimension => {
            let from = parse_dimension_unit(from_unit_str)?;
            let to = parse_dimension_unit(to_unit_str)?;
            Ok(convert_dimension(value, from, to))
        }
        QuantityKind::Hardness => convert_hardness(value, from_unit_str, to_unit_str),
    }
}

pub fn parse_concentration_scale(s: &str) -> Result<ConcentrationScale, ConversionError> {
    ConcentrationScale::parse(s).ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

pub fn parse_volume_unit(s: &str) -> Result<WaterVolumeUnit, ConversionError> {
    WaterVolumeUnit::parse(s).ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

pub fn parse_dimension_unit(s: &str) -> Result<DimensionUnit, ConversionError> {
    DimensionUnit::parse(s).ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HardnessUnit {
    Degree,
    Ppm,
}

fn parse_hardness_unit(s: &str) -> Result<HardnessUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "dh" | "dgh" | "dkh" | "degree" => Ok(HardnessUnit::Degree),
        "ppm" | "mg/l" => Ok(HardnessUnit::Ppm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn convert_hardness(value: f64, from_str: &str, to_str: &str) -> Result<f64, ConversionError> {
    let from = parse_hardness_unit(from_str)?;
    let to = parse_hardness_unit(to_str)?;
    Ok(match (from, to) {
        (HardnessUnit::Degree, HardnessUnit::Ppm) => degrees_to_ppm(value),
        (HardnessUnit::Ppm, HardnessUnit::Degree) => ppm_to_degrees(value),
        _ => value,
    })
}
