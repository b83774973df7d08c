use approx::assert_relative_eq;
use aqua_dosing_toolbox::dose::DoseUnit;
use aqua_dosing_toolbox::products::{
    self, calculate, calculate_product, descriptor, formulas, InputMode, ProductGroup, ProductId,
};
use aqua_dosing_toolbox::units::ConcentrationScale;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn reef_advantage_calcium_label_example() {
    let dose = calculate("reef_adv_calcium", 380.0, 420.0, 100.0, Some(ConcentrationScale::Ppm));
    assert_eq!(dose.primary_unit, DoseUnit::Teaspoon);
    assert_eq!(dose.secondary_unit, DoseUnit::Gram);
    assert_close(dose.primary_amount, 2.0077072, 1e-6);
    assert_close(dose.secondary_amount, 10.038536, 1e-6);
}

#[test]
fn alkaline_buffer_same_result_in_every_scale() {
    let eq = formulas::alkaline_buffer(2.0, 3.0, 100.0, ConcentrationScale::Eq);
    let dkh = formulas::alkaline_buffer(5.6, 8.4, 100.0, ConcentrationScale::Degree);
    let ppm = formulas::alkaline_buffer(100.0, 150.0, 100.0, ConcentrationScale::Ppm);
    assert_close(eq.primary_amount, 9.24602, 1e-9);
    assert_close(eq.secondary_amount, 9.24602 / 7.0, 1e-9);
    assert_relative_eq!(dkh.primary_amount, eq.primary_amount, max_relative = 1e-9);
    assert_relative_eq!(ppm.primary_amount, eq.primary_amount, max_relative = 1e-9);
}

#[test]
fn potassium_bicarbonate_uses_degree_and_plain_liters() {
    let dose = formulas::potassium_bicarbonate(1.0, 2.0, 100.0, ConcentrationScale::Eq);
    assert_close(dose.primary_amount, 9.996, 1e-9);
    assert_close(dose.secondary_amount, 1.9992, 1e-9);
    assert_eq!(dose.primary_unit, DoseUnit::Gram);
    assert_eq!(dose.secondary_unit, DoseUnit::Teaspoon);
}

#[test]
fn equilibrium_engine_in_tablespoons() {
    let dose = formulas::equilibrium_engine(0.0, 1.0, 100.0, ConcentrationScale::Eq);
    assert_close(dose.primary_amount, 21.13376, 1e-9);
    assert_close(dose.secondary_amount, 1.32086, 1e-9);
    assert_eq!(dose.secondary_unit, DoseUnit::Tablespoon);
}

#[test]
fn liquid_products_report_caps() {
    let calcium = formulas::reef_calcium(400.0, 430.0, 100.0, ConcentrationScale::Ppm);
    assert_close(calcium.primary_amount, 66.043, 1e-9);
    assert_close(calcium.secondary_amount, 13.2086, 1e-9);
    assert_eq!(calcium.primary_unit, DoseUnit::Milliliter);
    assert_eq!(calcium.secondary_unit, DoseUnit::Cap);

    let iron = formulas::flourish_iron(0.0, 0.1, 100.0, ConcentrationScale::Ppm);
    assert_close(iron.primary_amount, 1.056688, 1e-9);
}

#[test]
fn volume_only_products_ignore_readings() {
    let a = formulas::flourish(0.0, 0.0, 100.0, ConcentrationScale::Eq);
    let b = formulas::flourish(99.0, -4.0, 100.0, ConcentrationScale::Ph);
    assert_eq!(a, b);
    assert_close(a.primary_amount, 2.2014333, 1e-6);

    let trace = calculate("flourish_trace", 5.0, 1.0, 100.0, None);
    assert_close(trace.primary_amount, 6.6043, 1e-9);
    assert_close(trace.secondary_amount, 1.32086, 1e-9);
}

#[test]
fn target_below_current_means_no_dose() {
    for &p in &ProductId::ALL {
        if descriptor(p).input_mode == InputMode::VolumeOnly {
            continue;
        }
        let dose = calculate_product(p, 10.0, 5.0, 100.0, Some(ConcentrationScale::Ppm));
        assert!(dose.is_zero(), "{p}: {dose:?}");
    }
}

#[test]
fn every_dose_is_finite_and_non_negative() {
    let cases = [
        (0.0, 0.0, 1.0),
        (1.0, 1e12, 1e9),
        (-50.0, 50.0, 40.0),
        (f64::NAN, 3.0, 100.0),
        (2.0, f64::INFINITY, 100.0),
        (f64::MAX, -f64::MAX, 100.0),
    ];
    for &p in &ProductId::ALL {
        for &scale in &ConcentrationScale::ALL {
            for &(current, target, liters) in &cases {
                let d = calculate_product(p, current, target, liters, Some(scale));
                assert!(
                    d.primary_amount.is_finite() && d.primary_amount >= 0.0,
                    "{p} {scale:?} {current} {target} {liters}: {d:?}"
                );
                assert!(d.secondary_amount.is_finite() && d.secondary_amount >= 0.0);
            }
        }
    }
}

#[test]
fn unknown_product_is_marked() {
    let dose = calculate("xyz", 1.0, 2.0, 100.0, None);
    assert_eq!(dose.primary_amount, 0.0);
    assert_eq!(dose.secondary_amount, 0.0);
    assert_eq!(dose.primary_unit, DoseUnit::Unknown);
    assert_eq!(dose.secondary_unit, DoseUnit::Unknown);
    assert!(dose.is_unknown());
    assert_eq!(dose.primary_unit.to_string(), "?");
}

#[test]
fn zero_or_negative_volume_reports_grams() {
    for &p in &ProductId::ALL {
        for liters in [0.0, -10.0, f64::NAN] {
            let d = calculate_product(p, 1.0, 5.0, liters, None);
            assert_eq!(d.primary_amount, 0.0);
            assert_eq!(d.secondary_amount, 0.0);
            assert_eq!(d.primary_unit, DoseUnit::Gram, "{p}");
            assert_eq!(d.secondary_unit, DoseUnit::Gram, "{p}");
        }
    }
}

#[test]
fn missing_scale_means_meq() {
    let implicit = calculate("reef_buffer", 2.0, 2.5, 100.0, None);
    let explicit = calculate("reef_buffer", 2.0, 2.5, 100.0, Some(ConcentrationScale::Eq));
    assert_eq!(implicit, explicit);
}

#[test]
fn product_ids_are_case_insensitive() {
    assert_eq!(ProductId::from_id(" Reef_Iodide "), Some(ProductId::ReefIodide));
    assert_eq!("reef_fusion1".parse::<ProductId>(), Ok(ProductId::ReefFusion1));
    assert!("reef_fusion3".parse::<ProductId>().is_err());
}

#[test]
fn registry_matches_enum_order() {
    let all = products::descriptors();
    assert_eq!(all.len(), ProductId::ALL.len());
    for (d, &p) in all.iter().zip(ProductId::ALL.iter()) {
        assert_eq!(d.id, p);
        assert_eq!(descriptor(p).id, p);
    }
}

#[test]
fn alkalinity_products_allow_scale_choice() {
    for id in [
        "alkaline_buffer",
        "equilibrium_engine",
        "potassium_bicarbonate",
        "reef_buffer",
        "reef_builder",
        "reef_carbonate",
        "reef_fusion2",
    ] {
        let d = products::find_descriptor(id).unwrap();
        assert!(d.accepts_scale(ConcentrationScale::Degree), "{id}");
        assert!(!d.accepts_scale(ConcentrationScale::Ph), "{id}");
    }
    let calcium = products::find_descriptor("reef_calcium").unwrap();
    assert!(calcium.allowed_scales.is_none());
    assert_eq!(calcium.native_unit, ConcentrationScale::Ppm);
    assert_eq!(
        products::find_descriptor("potassium_bicarbonate").unwrap().native_unit,
        ConcentrationScale::Degree
    );
}

#[test]
fn group_listing_includes_universal() {
    let fresh = products::products_for_group(ProductGroup::Freshwater);
    assert!(fresh.iter().any(|d| d.id == ProductId::Flourish));
    assert!(fresh.iter().all(|d| d.group != ProductGroup::Saltwater));

    let salt = products::products_for_group(ProductGroup::Saltwater);
    assert!(salt.iter().any(|d| d.id == ProductId::ReefCalcium));
    assert!(salt.iter().all(|d| d.group != ProductGroup::Freshwater));

    let universal: Vec<_> = products::descriptors()
        .iter()
        .filter(|d| d.group == ProductGroup::Universal)
        .collect();
    for u in universal {
        assert!(fresh.iter().any(|d| d.id == u.id));
        assert!(salt.iter().any(|d| d.id == u.id));
    }
}

/// 100 L (26.4172 US gal) 에서 라벨 계수로 직접 계산한 기대값.
#[test]
fn every_product_matches_label_coefficients() {
    use ConcentrationScale::{Degree, Eq, Ppm};
    use DoseUnit::{Cap, Gram, Milliliter, Tablespoon, Teaspoon};
    use ProductId::*;

    let rows = [
        (Flourish, 0.0, 0.0, Eq, 2.2014333, Milliliter, 0.4402867, Cap),
        (FlourishTrace, 0.0, 0.0, Eq, 6.6043, Milliliter, 1.32086, Cap),
        (FlourishIron, 0.0, 0.1, Ppm, 1.056688, Milliliter, 0.2113376, Cap),
        (FlourishNitrogen, 0.0, 5.0, Ppm, 33.0215, Milliliter, 6.6043, Cap),
        (FlourishPhosphorus, 0.0, 1.0, Ppm, 21.926276, Milliliter, 4.3852552, Cap),
        (FlourishPotassium, 0.0, 10.0, Ppm, 22.0143333, Milliliter, 4.4028667, Cap),
        (AlkalineBuffer, 2.0, 3.0, Eq, 9.24602, Gram, 1.32086, Teaspoon),
        (EquilibriumEngine, 1.0, 2.0, Eq, 21.13376, Gram, 1.32086, Tablespoon),
        (PotassiumBicarbonate, 2.8, 5.6, Degree, 9.996, Gram, 1.9992, Teaspoon),
        (ReefAdvCalcium, 380.0, 420.0, Ppm, 2.0077072, Teaspoon, 10.038536, Gram),
        (ReefAdvMagnesium, 1250.0, 1350.0, Ppm, 25.09634, Teaspoon, 125.4817, Gram),
        (ReefAdvStrontium, 8.0, 10.0, Ppm, 7.0445867, Gram, 1.1740978, Teaspoon),
        (ReefBuffer, 2.5, 3.0, Eq, 0.66043, Teaspoon, 3.30215, Gram),
        (ReefBuilder, 2.5, 3.0, Eq, 4.226752, Gram, 0.7044587, Teaspoon),
        (ReefCalcium, 400.0, 430.0, Ppm, 66.043, Milliliter, 13.2086, Cap),
        (ReefCarbonate, 2.5, 3.0, Eq, 13.2086, Milliliter, 2.64172, Cap),
        (ReefComplete, 400.0, 420.0, Ppm, 13.2086, Milliliter, 2.64172, Cap),
        (ReefFusion1, 400.0, 420.0, Ppm, 20.3209231, Milliliter, 4.0641846, Cap),
        (ReefFusion2, 2.5, 3.0, Eq, 11.545979, Milliliter, 2.3091958, Cap),
        (ReefIodide, 0.0, 0.2, Ppm, 2.64172, Milliliter, 0.528344, Cap),
        (ReefStrontium, 8.0, 10.0, Ppm, 21.13376, Milliliter, 4.226752, Cap),
    ];
    assert_eq!(rows.len(), ProductId::ALL.len());

    for (product, current, target, scale, primary, primary_unit, secondary, secondary_unit) in rows
    {
        let dose = calculate_product(product, current, target, 100.0, Some(scale));
        assert_eq!(dose.primary_unit, primary_unit, "{product}");
        assert_eq!(dose.secondary_unit, secondary_unit, "{product}");
        assert_relative_eq!(dose.primary_amount, primary, max_relative = 1e-6);
        assert_relative_eq!(dose.secondary_amount, secondary, max_relative = 1e-6);
    }
}
