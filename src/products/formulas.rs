//! 제품별 투약 처방식.
//!
//! 모든 함수는 `(current, target, liters, input_scale)` 을 받는다. `current`/`target` 은
//! `input_scale` 기준 값이며, 각 제품의 기준 스케일로 바꾼 뒤 `Δ = target − current` 를 구한다.
//! 계수는 제조사 라벨(갤런 기준) 용량에서 나온 값이므로 물량은 US gal 로 환산해 쓴다.
//! Δ 의 부호는 여기서 자르지 않는다. 음수 결과는 `DoseResult::new` 가 0 으로 만든다.
//! 물량 > 0 검사는 라우터 책임이다.

use crate::dose::{DoseResult, DoseUnit};
use crate::units::{convert_concentration, liters_to_us_gal, ConcentrationScale};

// Alkaline Buffer: 갤런 10 당 meq/L 1 상승에 3.5 g
const ALKALINE_BUFFER_G_PER_MEQ_10GAL: f64 = 3.5;
const ALKALINE_BUFFER_G_PER_TSP: f64 = 7.0;

// Equilibrium: 20 gal 당 meq/L 1 상승에 16 g
const EQUILIBRIUM_G_PER_MEQ_20GAL: f64 = 16.0;
const EQUILIBRIUM_G_PER_TBSP: f64 = 16.0;

// KHCO₃ 화학양론 계수 (g/L per dKH)
const KHCO3_G_PER_L_PER_DKH: f64 = 0.0357;
const KHCO3_G_PER_TSP: f64 = 5.0;

// Reef Buffer: 40 gal 당 1 tsp 이 0.5 meq/L 상승
const REEF_BUFFER_MEQ_PER_TSP_40GAL: f64 = 0.5;
const REEF_BUFFER_G_PER_TSP: f64 = 5.0;

const REEF_BUILDER_G_PER_GAL_MEQ: f64 = 0.32;
const REEF_BUILDER_G_PER_TSP: f64 = 6.0;

const REEF_CARBONATE_ML_PER_GAL_MEQ: f64 = 1.0;
const REEF_CARBONATE_ML_PER_CAP: f64 = 5.0;

// Reef Fusion 2: 6.5 gal 당 1 mL 이 0.176 meq/L 상승
const REEF_FUSION2_GAL_PER_ML: f64 = 6.5;
const REEF_FUSION2_MEQ_PER_ML: f64 = 0.176;
const REEF_FUSION2_ML_PER_CAP: f64 = 5.0;

const REEF_ADV_CALCIUM_TSP_PER_GAL_PPM: f64 = 0.0019;
const REEF_ADV_CALCIUM_G_PER_TSP: f64 = 5.0;

const REEF_ADV_MAGNESIUM_TSP_PER_GAL_PPM: f64 = 0.0095;
const REEF_ADV_MAGNESIUM_G_PER_TSP: f64 = 5.0;

const REEF_ADV_STRONTIUM_GAL_PPM_PER_G: f64 = 7.5;
const REEF_ADV_STRONTIUM_G_PER_TSP: f64 = 6.0;

// Reef Calcium: 20 gal 당 5 mL 이 3 ppm 상승
const REEF_CALCIUM_PPM_PER_DOSE: f64 = 3.0;
const REEF_CALCIUM_GAL_PER_DOSE: f64 = 20.0;
const REEF_CALCIUM_ML_PER_DOSE: f64 = 5.0;
const REEF_CALCIUM_ML_PER_CAP: f64 = 5.0;

const REEF_COMPLETE_ML_PER_GAL_PPM: f64 = 0.025;
const REEF_COMPLETE_ML_PER_CAP: f64 = 5.0;

// Reef Fusion 1: 6.5 gal 당 1 mL 이 4 ppm 상승
const REEF_FUSION1_GAL_PER_ML: f64 = 6.5;
const REEF_FUSION1_PPM_PER_ML: f64 = 4.0;
const REEF_FUSION1_ML_PER_CAP: f64 = 5.0;

const REEF_IODIDE_ML_PER_GAL_PPM: f64 = 0.5;
const REEF_IODIDE_ML_PER_CAP: f64 = 5.0;

const REEF_STRONTIUM_ML_PER_GAL_PPM: f64 = 0.4;
const REEF_STRONTIUM_ML_PER_CAP: f64 = 5.0;

// Flourish: 60 gal 당 5 mL
const FLOURISH_GAL_PER_DOSE: f64 = 60.0;
const FLOURISH_ML_PER_DOSE: f64 = 5.0;
const FLOURISH_ML_PER_CAP: f64 = 5.0;

// Flourish Trace: 20 gal 당 5 mL
const FLOURISH_TRACE_GAL_PER_DOSE: f64 = 20.0;
const FLOURISH_TRACE_ML_PER_DOSE: f64 = 5.0;
const FLOURISH_TRACE_ML_PER_CAP: f64 = 5.0;

// Flourish Iron: 50 gal 당 ppm 1 상승에 20 mL
const FLOURISH_IRON_GAL_PER_DOSE: f64 = 50.0;
const FLOURISH_IRON_ML_PER_PPM: f64 = 20.0;
const FLOURISH_IRON_ML_PER_CAP: f64 = 5.0;

const FLOURISH_NITROGEN_ML_PER_GAL_PPM: f64 = 0.25;
const FLOURISH_NITROGEN_ML_PER_CAP: f64 = 5.0;

// Flourish Phosphorus: 20 gal 당 ppm 1 상승에 16.6 mL
const FLOURISH_PHOSPHORUS_GAL_PER_DOSE: f64 = 20.0;
const FLOURISH_PHOSPHORUS_ML_PER_PPM: f64 = 16.6;
const FLOURISH_PHOSPHORUS_ML_PER_CAP: f64 = 5.0;

// Flourish Potassium: 30 gal 당 ppm 1 상승에 2.5 mL
const FLOURISH_POTASSIUM_GAL_PER_DOSE: f64 = 30.0;
const FLOURISH_POTASSIUM_ML_PER_PPM: f64 = 2.5;
const FLOURISH_POTASSIUM_ML_PER_CAP: f64 = 5.0;

/// 두 측정값을 기준 스케일로 바꿔 차이를 구한다.
fn delta_in(
    current: f64,
    target: f64,
    scale: ConcentrationScale,
    native: ConcentrationScale,
) -> f64 {
    convert_concentration(target, scale, native) - convert_concentration(current, scale, native)
}

fn grams_and(grams: f64, per_secondary: f64, secondary_unit: DoseUnit) -> DoseResult {
    DoseResult::new(grams, DoseUnit::Gram, grams / per_secondary, secondary_unit)
}

fn teaspoons_and_grams(tsp: f64, grams_per_tsp: f64) -> DoseResult {
    DoseResult::new(tsp, DoseUnit::Teaspoon, tsp * grams_per_tsp, DoseUnit::Gram)
}

fn milliliters_and_caps(ml: f64, ml_per_cap: f64) -> DoseResult {
    DoseResult::new(ml, DoseUnit::Milliliter, ml / ml_per_cap, DoseUnit::Cap)
}

pub fn alkaline_buffer(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Eq);
    let grams = delta * ALKALINE_BUFFER_G_PER_MEQ_10GAL * gal / 10.0;
    grams_and(grams, ALKALINE_BUFFER_G_PER_TSP, DoseUnit::Teaspoon)
}

pub fn equilibrium_engine(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Eq);
    let grams = (gal / 20.0) * (EQUILIBRIUM_G_PER_MEQ_20GAL * delta);
    grams_and(grams, EQUILIBRIUM_G_PER_TBSP, DoseUnit::Tablespoon)
}

/// 엔진판 KHCO₃ 식. 순도는 1.0 으로 고정하며 리터를 그대로 쓴다.
pub fn potassium_bicarbonate(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let delta = delta_in(current, target, scale, ConcentrationScale::Degree);
    let grams = delta * KHCO3_G_PER_L_PER_DKH * liters;
    grams_and(grams, KHCO3_G_PER_TSP, DoseUnit::Teaspoon)
}

pub fn reef_buffer(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Eq);
    let tsp = (delta / REEF_BUFFER_MEQ_PER_TSP_40GAL) * (gal / 40.0);
    teaspoons_and_grams(tsp, REEF_BUFFER_G_PER_TSP)
}

pub fn reef_builder(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Eq);
    let grams = REEF_BUILDER_G_PER_GAL_MEQ * gal * delta;
    grams_and(grams, REEF_BUILDER_G_PER_TSP, DoseUnit::Teaspoon)
}

pub fn reef_carbonate(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Eq);
    let ml = delta * gal * REEF_CARBONATE_ML_PER_GAL_MEQ;
    milliliters_and_caps(ml, REEF_CARBONATE_ML_PER_CAP)
}

pub fn reef_fusion2(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Eq);
    let ml = (gal / REEF_FUSION2_GAL_PER_ML) * (delta / REEF_FUSION2_MEQ_PER_ML);
    milliliters_and_caps(ml, REEF_FUSION2_ML_PER_CAP)
}

pub fn reef_adv_calcium(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let tsp = REEF_ADV_CALCIUM_TSP_PER_GAL_PPM * gal * delta;
    teaspoons_and_grams(tsp, REEF_ADV_CALCIUM_G_PER_TSP)
}

pub fn reef_adv_magnesium(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let tsp = REEF_ADV_MAGNESIUM_TSP_PER_GAL_PPM * gal * delta;
    teaspoons_and_grams(tsp, REEF_ADV_MAGNESIUM_G_PER_TSP)
}

pub fn reef_adv_strontium(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let grams = gal * delta / REEF_ADV_STRONTIUM_GAL_PPM_PER_G;
    grams_and(grams, REEF_ADV_STRONTIUM_G_PER_TSP, DoseUnit::Teaspoon)
}

pub fn reef_calcium(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let ml = (delta / REEF_CALCIUM_PPM_PER_DOSE)
        * (gal / REEF_CALCIUM_GAL_PER_DOSE)
        * REEF_CALCIUM_ML_PER_DOSE;
    milliliters_and_caps(ml, REEF_CALCIUM_ML_PER_CAP)
}

pub fn reef_complete(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let ml = REEF_COMPLETE_ML_PER_GAL_PPM * gal * delta;
    milliliters_and_caps(ml, REEF_COMPLETE_ML_PER_CAP)
}

pub fn reef_fusion1(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let ml = (gal / REEF_FUSION1_GAL_PER_ML) * (delta / REEF_FUSION1_PPM_PER_ML);
    milliliters_and_caps(ml, REEF_FUSION1_ML_PER_CAP)
}

pub fn reef_iodide(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let ml = REEF_IODIDE_ML_PER_GAL_PPM * gal * delta;
    milliliters_and_caps(ml, REEF_IODIDE_ML_PER_CAP)
}

pub fn reef_strontium(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let ml = REEF_STRONTIUM_ML_PER_GAL_PPM * gal * delta;
    milliliters_and_caps(ml, REEF_STRONTIUM_ML_PER_CAP)
}

/// 물량만으로 정해지는 주간 용량. 측정값과 스케일은 쓰지 않는다.
pub fn flourish(
    _current: f64,
    _target: f64,
    liters: f64,
    _scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let ml = (gal / FLOURISH_GAL_PER_DOSE) * FLOURISH_ML_PER_DOSE;
    milliliters_and_caps(ml, FLOURISH_ML_PER_CAP)
}

/// 물량만으로 정해지는 용량. 측정값과 스케일은 쓰지 않는다.
pub fn flourish_trace(
    _current: f64,
    _target: f64,
    liters: f64,
    _scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let ml = (gal / FLOURISH_TRACE_GAL_PER_DOSE) * FLOURISH_TRACE_ML_PER_DOSE;
    milliliters_and_caps(ml, FLOURISH_TRACE_ML_PER_CAP)
}

pub fn flourish_iron(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let ml = (gal / FLOURISH_IRON_GAL_PER_DOSE) * (delta * FLOURISH_IRON_ML_PER_PPM);
    milliliters_and_caps(ml, FLOURISH_IRON_ML_PER_CAP)
}

pub fn flourish_nitrogen(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let ml = delta * gal * FLOURISH_NITROGEN_ML_PER_GAL_PPM;
    milliliters_and_caps(ml, FLOURISH_NITROGEN_ML_PER_CAP)
}

pub fn flourish_phosphorus(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let ml = (gal / FLOURISH_PHOSPHORUS_GAL_PER_DOSE) * (delta * FLOURISH_PHOSPHORUS_ML_PER_PPM);
    milliliters_and_caps(ml, FLOURISH_PHOSPHORUS_ML_PER_CAP)
}

pub fn flourish_potassium(
    current: f64,
    target: f64,
    liters: f64,
    scale: ConcentrationScale,
) -> DoseResult {
    let gal = liters_to_us_gal(liters);
    let delta = delta_in(current, target, scale, ConcentrationScale::Ppm);
    let ml = (gal / FLOURISH_POTASSIUM_GAL_PER_DOSE) * (delta * FLOURISH_POTASSIUM_ML_PER_PPM);
    milliliters_and_caps(ml, FLOURISH_POTASSIUM_ML_PER_CAP)
}
