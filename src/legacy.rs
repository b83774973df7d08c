//! 범용 엔진 이전부터 쓰던 단일 목적 처방식 모음.
//!
//! 단위가 고정되어 있고 스케일 변환이 없다. 결과는 엔진과 같은 규칙으로 0 이상 유한값으로 자른다.

use serde::Serialize;

use crate::dose::clamp_dose;

/// KHCO₃ 화학양론 계수 [g/L per dKH].
///
/// KHCO₃ 분자량 100.115 g/mol, 1 dKH = 0.357 meq/L → 35.74 mg/L per dKH.
pub const KHCO3_G_PER_L_PER_DKH: f64 = 0.0357;
/// 허용 KHCO₃ 순도 범위. 범위 검사는 호출부(`report`)에서 한다.
pub const KHCO3_PURITY_MIN: f64 = 0.5;
pub const KHCO3_PURITY_MAX: f64 = 1.0;

/// Equilibrium: 80 L 에 16 g 이 GH 3 dH 상승.
pub const EQUILIBRIUM_G_PER_L_PER_DGH: f64 = 16.0 / (80.0 * 3.0);

/// Neutral Regulator 최소/최대 g/L (pH 0.5 단계당).
pub const NEUTRAL_REGULATOR_MIN_G_PER_L: f64 = 0.0625;
pub const NEUTRAL_REGULATOR_MAX_G_PER_L: f64 = 0.125;
const NEUTRAL_REGULATOR_PH_STEP: f64 = 0.5;
const NEUTRAL_REGULATOR_KH_SATURATION: f64 = 4.0;
const NEUTRAL_REGULATOR_CAP_FACTOR: f64 = 2.0;

/// Acid Buffer: 40 L 에 1.5 g 이 KH 2.8 dKH 하강.
pub const ACID_BUFFER_G_PER_L_PER_DKH: f64 = 1.5 / (40.0 * 2.8);

/// Gold Buffer: 40 L 에 6 g (전량).
pub const GOLD_BUFFER_FULL_G_PER_L: f64 = 6.0 / 40.0;
const GOLD_BUFFER_FULL_DOSE_DELTA_PH: f64 = 0.3;

/// Safe: 200 L 에 1 g (염소/클로라민 4 ppm 까지).
pub const SAFE_G_PER_L: f64 = 1.0 / 200.0;

/// APT Complete: 표준 100 L 당 3 mL, 그 80 % 를 쓴다.
pub const APT_STANDARD_ML_PER_L: f64 = 3.0 / 100.0;
pub const APT_DOSE_FRACTION: f64 = 0.8;
/// 투약 mL 당 질산염 상승 추정치 [ppm/mL].
pub const APT_NITRATE_PPM_PER_ML: f64 = 0.015;

/// Prime: 200 L 에 5 mL.
pub const PRIME_ML_PER_L: f64 = 5.0 / 200.0;
/// Stability: 40 L 에 5 mL.
pub const STABILITY_ML_PER_L: f64 = 5.0 / 40.0;

/// KH 부스터(KHCO₃) 투약량 [g].
///
/// `purity` 는 0.5~1.0 범위여야 하며 호출부에서 검증한다. 0 이하이거나 유한하지 않으면
/// 나눗셈이 의미가 없으므로 0 을 돌려준다.
pub fn khco3_grams(current_kh: f64, target_kh: f64, liters: f64, purity: f64) -> f64 {
    if purity <= 0.0 || !purity.is_finite() {
        return 0.0;
    }
    clamp_dose((target_kh - current_kh) * KHCO3_G_PER_L_PER_DKH * liters / purity)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GhBoosterResult {
    pub grams: f64,
    /// 현재 GH 가 목표 이상이라 투약하지 않은 경우 true
    pub current_at_or_above_target: bool,
}

/// GH 상승폭 [dGH] 에 대한 Equilibrium 투약량 [g].
pub fn equilibrium_grams(delta_gh: f64, liters: f64) -> f64 {
    clamp_dose(delta_gh * EQUILIBRIUM_G_PER_L_PER_DGH * liters)
}

/// 현재/목표 GH 로 Equilibrium 투약량을 구한다. 목표가 현재보다 높을 때만 투약한다.
pub fn gh_booster(current_gh: f64, target_gh: f64, liters: f64) -> GhBoosterResult {
    let delta = target_gh - current_gh;
    let grams = if delta > 0.0 {
        equilibrium_grams(delta, liters)
    } else {
        0.0
    };
    GhBoosterResult {
        grams,
        current_at_or_above_target: current_gh >= target_gh,
    }
}

/// pH 하강용 Neutral Regulator 투약량 [g].
///
/// KH 가 높을수록 완충력이 커서 g/L 을 최소~최대 사이에서 보간한다(KH 4 에서 포화).
/// 한 번에 과도한 변화를 막기 위해 최대 g/L 의 2 배 × 물량으로 상한을 둔다.
pub fn neutral_regulator_grams(
    liters: f64,
    current_ph: f64,
    target_ph: f64,
    current_kh: f64,
) -> f64 {
    if target_ph >= current_ph {
        return 0.0;
    }
    let kh_effect =
        current_kh.min(NEUTRAL_REGULATOR_KH_SATURATION) / NEUTRAL_REGULATOR_KH_SATURATION;
    let grams_per_liter = NEUTRAL_REGULATOR_MIN_G_PER_L
        + (NEUTRAL_REGULATOR_MAX_G_PER_L - NEUTRAL_REGULATOR_MIN_G_PER_L) * kh_effect;
    let steps = (current_ph - target_ph) / NEUTRAL_REGULATOR_PH_STEP;
    if steps <= 0.0 {
        return 0.0;
    }
    let grams = grams_per_liter * liters * steps;
    let cap = NEUTRAL_REGULATOR_MAX_G_PER_L * liters * NEUTRAL_REGULATOR_CAP_FACTOR;
    clamp_dose(grams.min(cap))
}

/// KH 하강용 Acid Buffer 투약량 [g].
pub fn acid_buffer_grams(liters: f64, current_kh: f64, target_kh: f64) -> f64 {
    clamp_dose((current_kh - target_kh) * ACID_BUFFER_G_PER_L_PER_DKH * liters)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoldBufferResult {
    pub grams: f64,
    /// pH 상승폭이 0.3 이상이라 전량 투약을 권하는 경우 true
    pub full_dose: bool,
}

/// pH 상승용 Gold Buffer 투약량. 상승폭 0.3 미만이면 절반만 투약한다.
pub fn gold_buffer(liters: f64, current_ph: f64, target_ph: f64) -> GoldBufferResult {
    let delta = target_ph - current_ph;
    if delta <= 0.0 {
        return GoldBufferResult {
            grams: 0.0,
            full_dose: false,
        };
    }
    let full_dose = delta >= GOLD_BUFFER_FULL_DOSE_DELTA_PH;
    let multiplier = if full_dose { 1.0 } else { 0.5 };
    GoldBufferResult {
        grams: clamp_dose(GOLD_BUFFER_FULL_G_PER_L * multiplier * liters),
        full_dose,
    }
}

/// 수돗물 컨디셔너(Safe) 투약량 [g].
pub fn safe_grams(liters: f64) -> f64 {
    clamp_dose(liters * SAFE_G_PER_L)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FertilizerResult {
    pub ml: f64,
    pub estimated_nitrate_increase: f64,
    pub estimated_final_nitrate: f64,
}

/// 비료(APT Complete) 투약량과 질산염 상승 추정치.
pub fn apt_complete_dose(liters: f64, current_nitrate: f64) -> FertilizerResult {
    let ml = liters * APT_DOSE_FRACTION * APT_STANDARD_ML_PER_L;
    let increase = ml * APT_NITRATE_PPM_PER_ML;
    FertilizerResult {
        ml: clamp_dose(ml),
        estimated_nitrate_increase: clamp_dose(increase),
        estimated_final_nitrate: clamp_dose(current_nitrate + increase),
    }
}

/// 암모니아/아질산 해독제(Prime) 긴급 투약량 [mL].
pub fn prime_ml(liters: f64) -> f64 {
    clamp_dose(liters * PRIME_ML_PER_L)
}

/// 여과 박테리아 보강제(Stability) 긴급 투약량 [mL].
pub fn stability_ml(liters: f64) -> f64 {
    clamp_dose(liters * STABILITY_ML_PER_L)
}
