//! 한 번의 입력으로 모든 투약량을 계산하는 보고서.
//!
//! 입력 검증(물량, KHCO₃ 순도)은 여기서 처방식 호출 전에 한다. 해수염 계산기 오류는 잡아서
//! 메시지로만 남기고 재시도하지 않는다.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dose::DoseResult;
use crate::input::finite_or_zero;
use crate::legacy::{self, FertilizerResult, GhBoosterResult, GoldBufferResult};
use crate::products::{self, InputMode, ProductId};
use crate::salt_mix::{SaltMixCalculator, SaltMixRequest, SaltMixResult};
use crate::substrate::{self, SubstrateResult};
use crate::units::{
    dimensions_to_liters, to_liters, ConcentrationScale, DimensionUnit, WaterVolumeUnit,
};
use crate::water_change::{self, WaterChangeResult};

/// 수조 물량 입력. 직접 입력하거나 치수로 계산한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum VolumeInput {
    Direct {
        value: f64,
        #[serde(default = "default_volume_unit")]
        unit: WaterVolumeUnit,
    },
    Dimensions {
        length: f64,
        width: f64,
        height: f64,
        #[serde(default = "default_dimension_unit")]
        unit: DimensionUnit,
    },
}

fn default_volume_unit() -> WaterVolumeUnit {
    WaterVolumeUnit::Liter
}

fn default_dimension_unit() -> DimensionUnit {
    DimensionUnit::Centimeter
}

impl Default for VolumeInput {
    fn default() -> Self {
        VolumeInput::Direct {
            value: 0.0,
            unit: WaterVolumeUnit::Liter,
        }
    }
}

impl VolumeInput {
    /// 리터로 환산한 물량.
    pub fn liters(&self) -> f64 {
        match *self {
            VolumeInput::Direct { value, unit } => {
                finite_or_zero(to_liters(finite_or_zero(value), unit))
            }
            VolumeInput::Dimensions {
                length,
                width,
                height,
                unit,
            } => dimensions_to_liters(length, width, height, unit),
        }
    }
}

/// 현재/목표 측정값 한 쌍.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reading {
    pub current: f64,
    pub target: f64,
}

/// pH 하강(Neutral Regulator) 입력.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhDownReading {
    pub current_ph: f64,
    pub target_ph: f64,
    pub current_kh: f64,
}

/// 범용 엔진 제품 입력. `scale` 은 제품이 스케일 선택을 허용할 때만 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductReading {
    pub current: f64,
    pub target: f64,
    #[serde(default, deserialize_with = "lenient_scale")]
    pub scale: Option<ConcentrationScale>,
}

/// 알 수 없는 스케일 문자열은 오류 대신 meq/L 로 읽는다.
fn lenient_scale<'de, D>(deserializer: D) -> Result<Option<ConcentrationScale>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.map(|s| ConcentrationScale::parse_lenient(&s)))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstrateRequest {
    pub product: String,
    pub length: f64,
    pub width: f64,
    pub depth: f64,
    #[serde(default = "default_substrate_unit")]
    pub unit: DimensionUnit,
}

fn default_substrate_unit() -> DimensionUnit {
    DimensionUnit::Inch
}

/// 보고서 입력 전체. TOML 파일에서 읽을 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DosingInputs {
    pub volume: VolumeInput,
    /// KH 부스터(KHCO₃) [dKH]
    pub kh: Reading,
    pub kh_purity: f64,
    /// GH 부스터(Equilibrium) [dGH]
    pub gh: Reading,
    pub ph_down: PhDownReading,
    /// Acid Buffer [dKH]
    pub acid_buffer: Reading,
    /// Gold Buffer [pH]
    pub ph_up: Reading,
    /// 현재 질산염 [ppm]
    pub nitrate: f64,
    /// 제품 id → 측정값
    pub products: BTreeMap<String, ProductReading>,
    /// 환수 비율 [%]
    pub water_change_percent: f64,
    pub substrate: Option<SubstrateRequest>,
    pub salt_mix: Option<SaltMixRequest>,
}

impl Default for DosingInputs {
    fn default() -> Self {
        Self {
            volume: VolumeInput::default(),
            kh: Reading::default(),
            kh_purity: 1.0,
            gh: Reading::default(),
            ph_down: PhDownReading::default(),
            acid_buffer: Reading::default(),
            ph_up: Reading::default(),
            nitrate: 0.0,
            products: BTreeMap::new(),
            water_change_percent: 0.0,
            substrate: None,
            salt_mix: None,
        }
    }
}

/// 처방식 호출 전에 거르는 입력 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("물량은 0 보다 커야 합니다.")]
    NonPositiveVolume,
    #[error("KHCO₃ 순도는 0.50 ~ 1.00 사이여야 합니다: {0}")]
    PurityOutOfRange(f64),
}

/// 보고서 생성 오류. 검증 오류를 모두 모아 담는다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportError {
    #[error("{}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDose {
    pub id: ProductId,
    pub title: &'static str,
    /// 실제 계산에 쓴 입력 스케일
    pub scale: ConcentrationScale,
    pub dose: DoseResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DosingReport {
    pub liters: f64,
    pub kh_booster_grams: f64,
    pub gh_booster: GhBoosterResult,
    pub safe_grams: f64,
    pub fertilizer: FertilizerResult,
    pub neutral_regulator_grams: f64,
    pub acid_buffer_grams: f64,
    pub gold_buffer: GoldBufferResult,
    pub prime_ml: f64,
    pub stability_ml: f64,
    pub products: Vec<ProductDose>,
    pub water_change: WaterChangeResult,
    pub substrate: SubstrateResult,
    pub salt_mix: Option<SaltMixResult>,
    pub salt_mix_error: Option<String>,
    /// 입력에 있었지만 레지스트리에 없는 제품 id
    pub unknown_products: Vec<String>,
}

impl DosingReport {
    /// 모든 값이 0 인 보고서. 검증 실패 시 화면을 비우는 데 쓴다.
    pub fn zeroed() -> Self {
        Self {
            liters: 0.0,
            kh_booster_grams: 0.0,
            gh_booster: GhBoosterResult {
                grams: 0.0,
                current_at_or_above_target: false,
            },
            safe_grams: 0.0,
            fertilizer: FertilizerResult::default(),
            neutral_regulator_grams: 0.0,
            acid_buffer_grams: 0.0,
            gold_buffer: GoldBufferResult {
                grams: 0.0,
                full_dose: false,
            },
            prime_ml: 0.0,
            stability_ml: 0.0,
            products: Vec::new(),
            water_change: WaterChangeResult::default(),
            substrate: SubstrateResult::default(),
            salt_mix: None,
            salt_mix_error: None,
            unknown_products: Vec::new(),
        }
    }
}

/// 입력을 검증한다. 문제가 없으면 빈 목록.
pub fn validate(inputs: &DosingInputs) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if inputs.volume.liters() <= 0.0 {
        errors.push(ValidationError::NonPositiveVolume);
    }
    let purity = inputs.kh_purity;
    if !(legacy::KHCO3_PURITY_MIN..=legacy::KHCO3_PURITY_MAX).contains(&purity) {
        errors.push(ValidationError::PurityOutOfRange(purity));
    }
    errors
}

/// 입력 전체에 대해 투약 보고서를 만든다.
pub fn build_report(
    inputs: &DosingInputs,
    salt_mix: Option<&dyn SaltMixCalculator>,
) -> Result<DosingReport, ReportError> {
    let errors = validate(inputs);
    if !errors.is_empty() {
        return Err(ReportError::Invalid(errors));
    }

    let liters = inputs.volume.liters();
    let f = finite_or_zero;

    let products = products::descriptors()
        .iter()
        .map(|desc| {
            let reading = inputs
                .products
                .get(desc.id.as_str())
                .copied()
                .unwrap_or_default();
            let (current, target) = match desc.input_mode {
                InputMode::CurrentTarget => (f(reading.current), f(reading.target)),
                InputMode::VolumeOnly => (0.0, 0.0),
            };
            let scale = reading
                .scale
                .filter(|s| desc.allowed_scales.is_some() && desc.accepts_scale(*s))
                .unwrap_or(desc.native_unit);
            ProductDose {
                id: desc.id,
                title: desc.title,
                scale,
                dose: products::calculate_product(desc.id, current, target, liters, Some(scale)),
            }
        })
        .collect();

    let unknown_products = inputs
        .products
        .keys()
        .filter(|k| ProductId::from_id(k).is_none())
        .cloned()
        .collect();

    let substrate = inputs
        .substrate
        .as_ref()
        .map(|s| {
            substrate::calculate_substrate(&s.product, f(s.length), f(s.width), f(s.depth), s.unit)
        })
        .unwrap_or_default();

    let (salt_mix_result, salt_mix_error) = match (inputs.salt_mix.as_ref(), salt_mix) {
        (Some(request), Some(calc)) if request.is_actionable() => {
            match calc.compute_salt_mix(request) {
                Ok(result) => (Some(result), None),
                Err(err) => (None, Some(err.to_string())),
            }
        }
        _ => (None, None),
    };

    Ok(DosingReport {
        liters,
        kh_booster_grams: legacy::khco3_grams(
            f(inputs.kh.current),
            f(inputs.kh.target),
            liters,
            inputs.kh_purity,
        ),
        gh_booster: legacy::gh_booster(f(inputs.gh.current), f(inputs.gh.target), liters),
        safe_grams: legacy::safe_grams(liters),
        fertilizer: legacy::apt_complete_dose(liters, f(inputs.nitrate)),
        neutral_regulator_grams: legacy::neutral_regulator_grams(
            liters,
            f(inputs.ph_down.current_ph),
            f(inputs.ph_down.target_ph),
            f(inputs.ph_down.current_kh),
        ),
        acid_buffer_grams: legacy::acid_buffer_grams(
            liters,
            f(inputs.acid_buffer.current),
            f(inputs.acid_buffer.target),
        ),
        gold_buffer: legacy::gold_buffer(liters, f(inputs.ph_up.current), f(inputs.ph_up.target)),
        prime_ml: legacy::prime_ml(liters),
        stability_ml: legacy::stability_ml(liters),
        products,
        water_change: water_change::water_change(liters, f(inputs.water_change_percent)),
        substrate,
        salt_mix: salt_mix_result,
        salt_mix_error,
        unknown_products,
    })
}

/// 검증 실패 시 0 보고서와 오류 목록을 돌려준다. 화면을 항상 갱신해야 하는 호출부용.
pub fn build_report_or_zero(
    inputs: &DosingInputs,
    salt_mix: Option<&dyn SaltMixCalculator>,
) -> (DosingReport, Vec<ValidationError>) {
    match build_report(inputs, salt_mix) {
        Ok(report) => (report, Vec::new()),
        Err(ReportError::Invalid(errors)) => (DosingReport::zeroed(), errors),
    }
}
