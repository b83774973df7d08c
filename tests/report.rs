use aqua_dosing_toolbox::products::ProductId;
use aqua_dosing_toolbox::report::{
    build_report, build_report_or_zero, DosingInputs, ReportError, ValidationError, VolumeInput,
};
use aqua_dosing_toolbox::salt_mix::{
    SaltMixCalculator, SaltMixError, SaltMixFormatted, SaltMixRequest, SaltMixResult,
};
use aqua_dosing_toolbox::units::{ConcentrationScale, DimensionUnit, WaterVolumeUnit};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

const INPUT: &str = r#"
kh_purity = 0.99
nitrate = 10.0
water_change_percent = 25.0

[volume]
mode = "direct"
value = 100.0
unit = "L"

[kh]
current = 2.0
target = 6.0

[gh]
current = 3.0
target = 6.0

[products.reef_adv_calcium]
current = 380.0
target = 420.0

[products.alkaline_buffer]
current = 5.6
target = 8.4
scale = "dKH"

[products.reef_calcium]
current = 400.0
target = 430.0
scale = "dKH"

[products.bogus]
current = 1.0
target = 2.0

[substrate]
product = "flourite"
length = 100.0
width = 100.0
depth = 100.0

[salt_mix]
product_name = "Reef Salt"
volume_gallons = 10.0
current_ppt = 0.0
desired_ppt = 35.0
"#;

fn fixed_salt(request: &SaltMixRequest) -> Result<SaltMixResult, SaltMixError> {
    let grams = request.volume_gallons * (request.desired_ppt - request.current_ppt) * 3.785;
    Ok(SaltMixResult {
        grams,
        formatted: SaltMixFormatted {
            grams: format!("{grams:.0}"),
            kilograms: format!("{:.2}", grams / 1000.0),
        },
    })
}

fn dose_of(report: &aqua_dosing_toolbox::report::DosingReport, id: ProductId) -> f64 {
    report
        .products
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.dose.primary_amount)
        .unwrap()
}

#[test]
fn full_report_from_toml() {
    let inputs: DosingInputs = toml::from_str(INPUT).unwrap();
    let report = build_report(&inputs, Some(&fixed_salt as &dyn SaltMixCalculator)).unwrap();

    assert_close(report.liters, 100.0, 1e-12);
    assert_close(report.kh_booster_grams, 14.424242, 1e-6);
    assert_close(report.gh_booster.grams, 20.0, 1e-9);
    assert_close(report.safe_grams, 0.5, 1e-12);
    assert_close(report.fertilizer.estimated_final_nitrate, 10.036, 1e-9);
    assert_close(report.water_change.liters, 25.0, 1e-12);
    assert_eq!(report.substrate.bags, 122);

    assert_eq!(report.products.len(), ProductId::ALL.len());
    assert_close(dose_of(&report, ProductId::ReefAdvCalcium), 2.0077072, 1e-6);
    assert_close(dose_of(&report, ProductId::AlkalineBuffer), 9.24602, 1e-6);
    // 스케일 선택이 없는 제품은 요청 스케일을 무시하고 ppm 으로 계산한다
    assert_close(dose_of(&report, ProductId::ReefCalcium), 66.043, 1e-6);
    assert_close(dose_of(&report, ProductId::Flourish), 2.2014333, 1e-6);
    assert_eq!(dose_of(&report, ProductId::ReefIodide), 0.0);

    let calcium = report.products.iter().find(|p| p.id == ProductId::ReefCalcium).unwrap();
    assert_eq!(calcium.scale, ConcentrationScale::Ppm);
    let alk = report.products.iter().find(|p| p.id == ProductId::AlkalineBuffer).unwrap();
    assert_eq!(alk.scale, ConcentrationScale::Degree);

    assert_eq!(report.unknown_products, vec!["bogus".to_string()]);
    let salt = report.salt_mix.expect("salt mix computed");
    assert_close(salt.grams, 1324.75, 1e-9);
    assert_eq!(salt.formatted.kilograms, "1.32");
    assert!(report.salt_mix_error.is_none());
}

#[test]
fn report_serializes_to_toml() {
    let inputs: DosingInputs = toml::from_str(INPUT).unwrap();
    let report = build_report(&inputs, None).unwrap();
    let text = toml::to_string_pretty(&report).unwrap();
    assert!(text.contains("kh_booster_grams"));
    assert!(text.contains("primary_unit = \"tsp\""));
    assert!(text.contains("secondary_unit = \"caps\""));
    assert!(!text.contains("Milliliter"));
    assert!(report.salt_mix.is_none());
}

#[test]
fn salt_mix_error_becomes_message() {
    let inputs: DosingInputs = toml::from_str(INPUT).unwrap();
    let failing = |r: &SaltMixRequest| -> Result<SaltMixResult, SaltMixError> {
        Err(SaltMixError::UnknownProduct(r.product_name.clone()))
    };
    let report = build_report(&inputs, Some(&failing)).unwrap();
    assert!(report.salt_mix.is_none());
    assert!(report.salt_mix_error.unwrap().contains("Reef Salt"));
}

#[test]
fn salt_mix_skipped_when_not_actionable() {
    let mut inputs: DosingInputs = toml::from_str(INPUT).unwrap();
    if let Some(req) = inputs.salt_mix.as_mut() {
        req.desired_ppt = 0.0;
    }
    let called = std::cell::Cell::new(false);
    let spy = |r: &SaltMixRequest| {
        called.set(true);
        fixed_salt(r)
    };
    let report = build_report(&inputs, Some(&spy)).unwrap();
    assert!(!called.get());
    assert!(report.salt_mix.is_none());
    assert!(report.salt_mix_error.is_none());
}

#[test]
fn dimensions_volume_mode() {
    let inputs = DosingInputs {
        volume: VolumeInput::Dimensions {
            length: 60.0,
            width: 30.0,
            height: 36.0,
            unit: DimensionUnit::Centimeter,
        },
        ..DosingInputs::default()
    };
    let report = build_report(&inputs, None).unwrap();
    assert_close(report.liters, 64.8, 1e-9);
    assert_eq!(report.substrate.bags, 0);
}

#[test]
fn gallon_volume_is_converted() {
    let inputs = DosingInputs {
        volume: VolumeInput::Direct {
            value: 10.0,
            unit: WaterVolumeUnit::UsGallon,
        },
        ..DosingInputs::default()
    };
    let report = build_report(&inputs, None).unwrap();
    assert_close(report.liters, 37.8541, 1e-9);
}

#[test]
fn validation_collects_every_error() {
    let inputs = DosingInputs {
        kh_purity: 0.3,
        ..DosingInputs::default()
    };
    let err = build_report(&inputs, None).unwrap_err();
    assert_eq!(
        err,
        ReportError::Invalid(vec![
            ValidationError::NonPositiveVolume,
            ValidationError::PurityOutOfRange(0.3),
        ])
    );
    assert!(err.to_string().contains(" / "));

    let (report, errors) = build_report_or_zero(&inputs, None);
    assert_eq!(errors.len(), 2);
    assert_eq!(report.kh_booster_grams, 0.0);
    assert!(report.products.is_empty());
}

#[test]
fn purity_bounds_are_inclusive() {
    for purity in [0.5, 1.0] {
        let inputs = DosingInputs {
            volume: VolumeInput::Direct {
                value: 40.0,
                unit: WaterVolumeUnit::Liter,
            },
            kh_purity: purity,
            ..DosingInputs::default()
        };
        assert!(build_report(&inputs, None).is_ok(), "purity {purity}");
    }
}

#[test]
fn unknown_scale_in_report_falls_back_to_meq() {
    let inputs: DosingInputs = toml::from_str(
        r#"
[volume]
mode = "direct"
value = 100.0

[products.alkaline_buffer]
current = 2.0
target = 3.0
scale = "furlongs"
"#,
    )
    .unwrap();
    assert_eq!(
        inputs.products["alkaline_buffer"].scale,
        Some(ConcentrationScale::Eq)
    );
    let report = build_report(&inputs, None).unwrap();
    assert_close(dose_of(&report, ProductId::AlkalineBuffer), 9.24602, 1e-6);
}

#[test]
fn dose_units_serialize_as_labels() {
    use aqua_dosing_toolbox::dose::DoseResult;

    let text = toml::to_string(&DoseResult::unknown_product()).unwrap();
    assert!(text.contains("primary_unit = \"?\""));
    let text = toml::to_string(&DoseResult::no_volume()).unwrap();
    assert!(text.contains("secondary_unit = \"g\""));
}

#[test]
fn dimension_input_with_short_unit() {
    let inputs: DosingInputs = toml::from_str(
        r#"
[volume]
mode = "dimensions"
length = 2.0
width = 1.0
height = 1.0
unit = "ft"

[substrate]
product = "onyx"
length = 20.0
width = 20.0
depth = 20.0
unit = "in"
"#,
    )
    .unwrap();
    let report = build_report(&inputs, None).unwrap();
    assert_close(report.liters, 56.6336, 1e-9);
    assert_eq!(report.substrate.bags, 1);
}
