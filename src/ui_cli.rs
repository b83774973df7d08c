//! CLI 결과 출력. 계산은 하지 않고 받은 결과를 표시만 한다.

use crate::dose::DoseResult;
use crate::legacy::{FertilizerResult, GhBoosterResult, GoldBufferResult};
use crate::products::{InputMode, ProductDescriptor};
use crate::report::DosingReport;
use crate::substrate::{SubstrateProduct, SubstrateResult};
use crate::water_change::WaterChangeResult;

/// 음수/유한하지 않은 값은 0 으로 표시한다.
pub fn fmt(num: f64, places: usize) -> String {
    let v = if num < 0.0 || !num.is_finite() { 0.0 } else { num };
    format!("{v:.places$}")
}

pub fn print_products(list: &[&ProductDescriptor]) {
    println!("\n=== 제품 목록 ===");
    for p in list {
        let scales = match p.allowed_scales {
            Some(scales) => scales.iter().map(|s| s.label()).collect::<Vec<_>>().join("/"),
            None => "-".to_string(),
        };
        let mode = match p.input_mode {
            InputMode::CurrentTarget => "현재→목표",
            InputMode::VolumeOnly => "물량만",
        };
        println!(
            "{:<24} {:<26} {:<10} 기준 {:<6} 선택 {:<16} [{}]",
            p.id.as_str(),
            p.title,
            mode,
            p.native_unit.label(),
            scales,
            p.group.label()
        );
    }
}

pub fn print_dose(product: &str, dose: &DoseResult, places: usize) {
    if dose.is_unknown() {
        println!("알 수 없는 제품입니다: {product}");
    }
    println!(
        "{product}: {} {} ({} {})",
        fmt(dose.primary_amount, places),
        dose.primary_unit,
        fmt(dose.secondary_amount, places),
        dose.secondary_unit
    );
}

pub fn print_conversion(value: f64, from: &str, result: f64, to: &str) {
    println!("변환 결과: {value} {from} = {result} {to}");
}

pub fn print_substrates(list: &[SubstrateProduct]) {
    println!("\n=== 바닥재 목록 ===");
    for s in list {
        let small = if s.small_packing_divisor > 0.0 {
            format!("{} in³", s.small_packing_divisor)
        } else {
            "-".to_string()
        };
        println!(
            "{:<22} {:<22} 표준 {} in³ / 소형 {}",
            s.id, s.name, s.packing_divisor, small
        );
    }
}

pub fn print_substrate(product: &str, result: &SubstrateResult) {
    if result.bags == 0 {
        println!("{product}: -");
        return;
    }
    if result.bags_small > 0 {
        println!("{product}: {} 포대 (소형 {} 포대)", result.bags, result.bags_small);
    } else {
        println!("{product}: {} 포대", result.bags);
    }
}

pub fn print_water_change(result: &WaterChangeResult, places: usize) {
    println!(
        "환수량: {} L / {} US gal / {} UK gal",
        fmt(result.liters, places),
        fmt(result.us_gallons, places),
        fmt(result.uk_gallons, places)
    );
}

pub fn print_amount(label: &str, amount: f64, unit: &str, places: usize) {
    println!("{label}: {} {unit}", fmt(amount, places));
}

pub fn print_gh_booster(result: &GhBoosterResult, places: usize) {
    print_amount("Equilibrium", result.grams, "g", places);
    if result.current_at_or_above_target {
        println!("참고: 현재 GH 가 목표 이상입니다.");
    }
}

pub fn print_gold_buffer(result: &GoldBufferResult, places: usize) {
    print_amount("Gold Buffer", result.grams, "g", places);
    if result.grams > 0.0 {
        if result.full_dose {
            println!("전량 투약 권장 (pH 상승폭 0.3 이상)");
        } else {
            println!("절반 투약 권장 (pH 상승폭 0.3 미만)");
        }
    }
}

pub fn print_fertilizer(result: &FertilizerResult, places: usize) {
    print_amount("APT Complete", result.ml, "mL", places);
    println!(
        "질산염 예상 상승: {} ppm → 예상 최종 {} ppm",
        fmt(result.estimated_nitrate_increase, places),
        fmt(result.estimated_final_nitrate, places)
    );
}

pub fn print_report(report: &DosingReport, salt_mix_requested: bool, places: usize) {
    println!("\n=== 투약 보고서 ({} L) ===", fmt(report.liters, places));
    print_amount("KHCO₃", report.kh_booster_grams, "g", places);
    print_gh_booster(&report.gh_booster, places);
    print_amount("Neutral Regulator", report.neutral_regulator_grams, "g", places);
    print_amount("Acid Buffer", report.acid_buffer_grams, "g", places);
    print_gold_buffer(&report.gold_buffer, places);
    print_amount("Safe", report.safe_grams, "g", places);
    print_fertilizer(&report.fertilizer, places);
    print_amount("Prime", report.prime_ml, "mL", places);
    print_amount("Stability", report.stability_ml, "mL", places);

    println!("\n-- 제품별 --");
    for p in &report.products {
        println!(
            "{:<26} {} {} ({} {}) [{}]",
            p.title,
            fmt(p.dose.primary_amount, places),
            p.dose.primary_unit,
            fmt(p.dose.secondary_amount, places),
            p.dose.secondary_unit,
            p.scale
        );
    }
    for id in &report.unknown_products {
        println!("알 수 없는 제품 id 무시: {id}");
    }

    println!();
    print_water_change(&report.water_change, places);
    print_substrate("바닥재", &report.substrate);

    if let Some(salt) = &report.salt_mix {
        println!("해수염: {} kg ({} g)", salt.formatted.kilograms, salt.formatted.grams);
    } else if let Some(err) = &report.salt_mix_error {
        println!("해수염: {err}");
    } else if salt_mix_requested {
        println!("해수염: 외부 계산기가 연결되지 않았습니다.");
    }
}
