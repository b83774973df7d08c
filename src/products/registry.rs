//! 제품 메타데이터 테이블. 계산 디스패치와 분리된 불변 설정이다.

use serde::{Deserialize, Serialize};

use super::ProductId;
use crate::units::ConcentrationScale;

/// 제품 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// 현재/목표 측정값을 받는다.
    CurrentTarget,
    /// 물량만 받는다.
    VolumeOnly,
}

/// 제품 분류(담수/해수/공용).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductGroup {
    Freshwater,
    Saltwater,
    Universal,
}

impl ProductGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ProductGroup::Freshwater => "freshwater",
            ProductGroup::Saltwater => "saltwater",
            ProductGroup::Universal => "universal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "freshwater" | "fresh" | "fw" => Some(ProductGroup::Freshwater),
            "saltwater" | "salt" | "reef" | "sw" => Some(ProductGroup::Saltwater),
            "universal" | "all" => Some(ProductGroup::Universal),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ProductDescriptor {
    pub id: ProductId,
    pub title: &'static str,
    pub input_mode: InputMode,
    /// 처방식이 보정된 기준 스케일.
    pub native_unit: ConcentrationScale,
    /// 사용자가 고를 수 있는 입력 스케일. `None` 이면 선택지 없이 기준 스케일만 쓴다.
    pub allowed_scales: Option<&'static [ConcentrationScale]>,
    pub group: ProductGroup,
}

impl ProductDescriptor {
    /// 입력 스케일이 허용되는지 확인한다. 선택지가 없는 제품은 기준 스케일만 허용한다.
    pub fn accepts_scale(&self, scale: ConcentrationScale) -> bool {
        match self.allowed_scales {
            Some(scales) => scales.contains(&scale),
            None => scale == self.native_unit,
        }
    }
}

const ALKALINITY_SCALES: &[ConcentrationScale] = &[
    ConcentrationScale::Eq,
    ConcentrationScale::Degree,
    ConcentrationScale::Ppm,
];

const fn current_target(
    id: ProductId,
    title: &'static str,
    native_unit: ConcentrationScale,
    allowed_scales: Option<&'static [ConcentrationScale]>,
    group: ProductGroup,
) -> ProductDescriptor {
    ProductDescriptor {
        id,
        title,
        input_mode: InputMode::CurrentTarget,
        native_unit,
        allowed_scales,
        group,
    }
}

const fn volume_only(id: ProductId, title: &'static str) -> ProductDescriptor {
    ProductDescriptor {
        id,
        title,
        input_mode: InputMode::VolumeOnly,
        native_unit: ConcentrationScale::Ppm,
        allowed_scales: None,
        group: ProductGroup::Universal,
    }
}

const PRODUCTS: &[ProductDescriptor] = &[
    // 공용
    volume_only(ProductId::Flourish, "Flourish"),
    volume_only(ProductId::FlourishTrace, "Flourish Trace"),
    // 담수
    current_target(
        ProductId::FlourishIron,
        "Flourish Iron",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Freshwater,
    ),
    current_target(
        ProductId::FlourishNitrogen,
        "Flourish Nitrogen",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Freshwater,
    ),
    current_target(
        ProductId::FlourishPhosphorus,
        "Flourish Phosphorus",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Freshwater,
    ),
    current_target(
        ProductId::FlourishPotassium,
        "Flourish Potassium",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Freshwater,
    ),
    current_target(
        ProductId::AlkalineBuffer,
        "Alkaline Buffer",
        ConcentrationScale::Eq,
        Some(ALKALINITY_SCALES),
        ProductGroup::Freshwater,
    ),
    current_target(
        ProductId::EquilibriumEngine,
        "Equilibrium (Engine)",
        ConcentrationScale::Eq,
        Some(ALKALINITY_SCALES),
        ProductGroup::Freshwater,
    ),
    current_target(
        ProductId::PotassiumBicarbonate,
        "Potassium Bicarbonate",
        ConcentrationScale::Degree,
        Some(ALKALINITY_SCALES),
        ProductGroup::Freshwater,
    ),
    // 해수
    current_target(
        ProductId::ReefAdvCalcium,
        "Reef Advantage Calcium",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefAdvMagnesium,
        "Reef Advantage Magnesium",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefAdvStrontium,
        "Reef Advantage Strontium",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefBuffer,
        "Reef Buffer",
        ConcentrationScale::Eq,
        Some(ALKALINITY_SCALES),
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefBuilder,
        "Reef Builder",
        ConcentrationScale::Eq,
        Some(ALKALINITY_SCALES),
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefCalcium,
        "Reef Calcium",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefCarbonate,
        "Reef Carbonate",
        ConcentrationScale::Eq,
        Some(ALKALINITY_SCALES),
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefComplete,
        "Reef Complete",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefFusion1,
        "Reef Fusion 1",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefFusion2,
        "Reef Fusion 2",
        ConcentrationScale::Eq,
        Some(ALKALINITY_SCALES),
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefIodide,
        "Reef Iodide",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Saltwater,
    ),
    current_target(
        ProductId::ReefStrontium,
        "Reef Strontium",
        ConcentrationScale::Ppm,
        None,
        ProductGroup::Saltwater,
    ),
];

pub fn descriptors() -> &'static [ProductDescriptor] {
    PRODUCTS
}

/// 문자열 id 로 제품 설명을 찾는다.
pub fn find_descriptor(id: &str) -> Option<&'static ProductDescriptor> {
    let product = ProductId::from_id(id)?;
    Some(descriptor(product))
}

/// 제품 설명을 돌려준다. 테이블은 `ProductId::ALL` 과 같은 순서로 모든 제품을 담는다.
pub fn descriptor(product: ProductId) -> &'static ProductDescriptor {
    &PRODUCTS[product as usize]
}

/// 분류에 보일 제품 목록. 공용 제품은 어느 분류에나 포함된다.
pub fn products_for_group(group: ProductGroup) -> Vec<&'static ProductDescriptor> {
    PRODUCTS
        .iter()
        .filter(|p| p.group == group || p.group == ProductGroup::Universal)
        .collect()
}
