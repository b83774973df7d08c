use super::formulas;
use super::ProductId;
use crate::dose::DoseResult;
use crate::units::ConcentrationScale;

type Formula = fn(f64, f64, f64, ConcentrationScale) -> DoseResult;

fn formula_for(product: ProductId) -> Formula {
    match product {
        ProductId::AlkalineBuffer => formulas::alkaline_buffer,
        ProductId::EquilibriumEngine => formulas::equilibrium_engine,
        ProductId::PotassiumBicarbonate => formulas::potassium_bicarbonate,
        ProductId::ReefBuffer => formulas::reef_buffer,
        ProductId::ReefBuilder => formulas::reef_builder,
        ProductId::ReefCarbonate => formulas::reef_carbonate,
        ProductId::ReefFusion2 => formulas::reef_fusion2,
        ProductId::ReefAdvCalcium => formulas::reef_adv_calcium,
        ProductId::ReefAdvMagnesium => formulas::reef_adv_magnesium,
        ProductId::ReefAdvStrontium => formulas::reef_adv_strontium,
        ProductId::ReefCalcium => formulas::reef_calcium,
        ProductId::ReefComplete => formulas::reef_complete,
        ProductId::ReefFusion1 => formulas::reef_fusion1,
        ProductId::ReefIodide => formulas::reef_iodide,
        ProductId::ReefStrontium => formulas::reef_strontium,
        ProductId::Flourish => formulas::flourish,
        ProductId::FlourishTrace => formulas::flourish_trace,
        ProductId::FlourishIron => formulas::flourish_iron,
        ProductId::FlourishNitrogen => formulas::flourish_nitrogen,
        ProductId::FlourishPhosphorus => formulas::flourish_phosphorus,
        ProductId::FlourishPotassium => formulas::flourish_potassium,
    }
}

/// 제품 투약량을 계산한다.
///
/// 물량이 0 이하(또는 유한하지 않음)이면 제품과 무관하게 `{0, g, 0, g}` 를 돌려주므로
/// 이 경우 단위 필드를 신뢰하면 안 된다. `scale` 이 없으면 meq/L 로 본다.
pub fn calculate_product(
    product: ProductId,
    current: f64,
    target: f64,
    liters: f64,
    scale: Option<ConcentrationScale>,
) -> DoseResult {
    if liters <= 0.0 || !liters.is_finite() {
        return DoseResult::no_volume();
    }
    let scale = scale.unwrap_or(ConcentrationScale::Eq);
    formula_for(product)(current, target, liters, scale)
}

/// 문자열 제품 id 로 투약량을 계산한다.
///
/// 등록되지 않은 id 는 `{0, ?, 0, ?}` 로 표시해 "투약 없음" 과 구분한다.
pub fn calculate(
    product_id: &str,
    current: f64,
    target: f64,
    liters: f64,
    scale: Option<ConcentrationScale>,
) -> DoseResult {
    match ProductId::from_id(product_id) {
        Some(product) => calculate_product(product, current, target, liters, scale),
        None => DoseResult::unknown_product(),
    }
}
