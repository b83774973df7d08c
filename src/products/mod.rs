//! 제품별 처방식, 제품 레지스트리, 계산 라우터 모음.

pub mod formulas;
pub mod registry;
pub mod router;

use serde::{Deserialize, Serialize};

pub use registry::{
    descriptor, descriptors, find_descriptor, products_for_group, InputMode, ProductDescriptor,
    ProductGroup,
};
pub use router::{calculate, calculate_product};

/// 계산 가능한 제품 식별자. 문자열 id 는 `as_str`/`from_id` 로 오간다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductId {
    Flourish,
    FlourishTrace,
    FlourishIron,
    FlourishNitrogen,
    FlourishPhosphorus,
    FlourishPotassium,
    AlkalineBuffer,
    EquilibriumEngine,
    PotassiumBicarbonate,
    ReefAdvCalcium,
    ReefAdvMagnesium,
    ReefAdvStrontium,
    ReefBuffer,
    ReefBuilder,
    ReefCalcium,
    ReefCarbonate,
    ReefComplete,
    ReefFusion1,
    ReefFusion2,
    ReefIodide,
    ReefStrontium,
}

impl ProductId {
    /// 레지스트리 표시 순서와 같은 순서의 전체 목록.
    pub const ALL: [ProductId; 21] = [
        ProductId::Flourish,
        ProductId::FlourishTrace,
        ProductId::FlourishIron,
        ProductId::FlourishNitrogen,
        ProductId::FlourishPhosphorus,
        ProductId::FlourishPotassium,
        ProductId::AlkalineBuffer,
        ProductId::EquilibriumEngine,
        ProductId::PotassiumBicarbonate,
        ProductId::ReefAdvCalcium,
        ProductId::ReefAdvMagnesium,
        ProductId::ReefAdvStrontium,
        ProductId::ReefBuffer,
        ProductId::ReefBuilder,
        ProductId::ReefCalcium,
        ProductId::ReefCarbonate,
        ProductId::ReefComplete,
        ProductId::ReefFusion1,
        ProductId::ReefFusion2,
        ProductId::ReefIodide,
        ProductId::ReefStrontium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductId::Flourish => "flourish",
            ProductId::FlourishTrace => "flourish_trace",
            ProductId::FlourishIron => "flourish_iron",
            ProductId::FlourishNitrogen => "flourish_nitrogen",
            ProductId::FlourishPhosphorus => "flourish_phosphorus",
            ProductId::FlourishPotassium => "flourish_potassium",
            ProductId::AlkalineBuffer => "alkaline_buffer",
            ProductId::EquilibriumEngine => "equilibrium_engine",
            ProductId::PotassiumBicarbonate => "potassium_bicarbonate",
            ProductId::ReefAdvCalcium => "reef_adv_calcium",
            ProductId::ReefAdvMagnesium => "reef_adv_magnesium",
            ProductId::ReefAdvStrontium => "reef_adv_strontium",
            ProductId::ReefBuffer => "reef_buffer",
            ProductId::ReefBuilder => "reef_builder",
            ProductId::ReefCalcium => "reef_calcium",
            ProductId::ReefCarbonate => "reef_carbonate",
            ProductId::ReefComplete => "reef_complete",
            ProductId::ReefFusion1 => "reef_fusion1",
            ProductId::ReefFusion2 => "reef_fusion2",
            ProductId::ReefIodide => "reef_iodide",
            ProductId::ReefStrontium => "reef_strontium",
        }
    }

    /// 문자열 id 로 제품을 찾는다. 대소문자와 앞뒤 공백은 무시한다.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        ProductId::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(id))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductId {
    type Err = UnknownProduct;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductId::from_id(s).ok_or_else(|| UnknownProduct(s.to_string()))
    }
}

/// 등록되지 않은 제품 id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 제품: {0}")]
pub struct UnknownProduct(pub String);
