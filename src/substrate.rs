/// 바닥재 제품 테이블과 포대 수 계산.
/// 포대당 입방인치(채움 밀도) 값은 제조사 안내 기준이며, 부분 포대는 팔지 않으므로 항상 올림한다.
use serde::Serialize;

use crate::units::{convert_dimension, DimensionUnit};

#[derive(Debug)]
pub struct SubstrateProduct {
    pub id: &'static str,
    pub name: &'static str,
    /// 표준 포대 하나가 채우는 입방인치
    pub packing_divisor: f64,
    /// 소형 포대 하나가 채우는 입방인치. 0 이면 소형 포대가 없다.
    pub small_packing_divisor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SubstrateResult {
    pub bags: u32,
    pub bags_small: u32,
}

pub fn substrate_products() -> &'static [SubstrateProduct] {
    SUBSTRATES
}

pub fn find_substrate(id: &str) -> Option<&'static SubstrateProduct> {
    SUBSTRATES
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(id.trim()) || s.name.eq_ignore_ascii_case(id.trim()))
}

/// 수조 치수로 필요한 포대 수를 구한다.
///
/// `product_id` 는 id 뿐 아니라 표시 이름(`"Pearl Beach"`)으로도 찾으며 대소문자를 가리지 않는다.
/// 알 수 없는 제품, 0 이하 치수, 유한하지 않은 부피는 모두 `{0, 0}` 이다.
pub fn calculate_substrate(
    product_id: &str,
    length: f64,
    width: f64,
    depth: f64,
    unit: DimensionUnit,
) -> SubstrateResult {
    let Some(product) = find_substrate(product_id) else {
        return SubstrateResult::default();
    };
    if length <= 0.0 || width <= 0.0 || depth <= 0.0 {
        return SubstrateResult::default();
    }

    let l = convert_dimension(length, unit, DimensionUnit::Inch);
    let w = convert_dimension(width, unit, DimensionUnit::Inch);
    let d = convert_dimension(depth, unit, DimensionUnit::Inch);
    let volume_in3 = l * w * d;
    if volume_in3 <= 0.0 || !volume_in3.is_finite() {
        return SubstrateResult::default();
    }

    SubstrateResult {
        bags: bags_for(volume_in3, product.packing_divisor),
        bags_small: bags_for(volume_in3, product.small_packing_divisor),
    }
}

fn bags_for(volume_in3: f64, divisor: f64) -> u32 {
    if divisor <= 0.0 {
        return 0;
    }
    // f64 → u32 캐스트는 포화 변환이라 거대한 수조도 u32::MAX 에서 멈춘다.
    (volume_in3 / divisor).ceil() as u32
}

const fn sp(id: &'static str, name: &'static str, divisor: f64, small: f64) -> SubstrateProduct {
    SubstrateProduct {
        id,
        name,
        packing_divisor: divisor,
        small_packing_divisor: small,
    }
}

const SUBSTRATES: &[SubstrateProduct] = &[
    sp("flourite", "Flourite", 8250.0, 9000.0),
    sp("flourite_black", "Flourite Black", 7250.0, 0.0),
    sp("flourite_black_sand", "Flourite Black Sand", 8000.0, 0.0),
    sp("flourite_dark", "Flourite Dark", 8250.0, 0.0),
    sp("flourite_red", "Flourite Red", 8250.0, 0.0),
    sp("flourite_sand", "Flourite Sand", 8750.0, 0.0),
    sp("gray_coast", "Gray Coast", 8500.0, 0.0),
    sp("meridian", "Meridian", 10500.0, 0.0),
    sp("onyx", "Onyx", 8000.0, 0.0),
    sp("onyx_sand", "Onyx Sand", 8250.0, 0.0),
    sp("pearl_beach", "Pearl Beach", 9750.0, 0.0),
];
