//! Consistency & Regression Tests
//!
//! - Legacy vs. current generation (γ ≈ 1/β gives identical encoded tables)
//! - Rate vs. daily-rate scaling
//! - Precision sensitivity
//! - Render / parse agreement for contract arrays

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use mint_tables::{
    parse_array_literals, render_report, Context, Decimal, Fixed64x64, Formula, GeneratorConfig,
    Report, DEFAULT_PRECISION,
};

// =============================================================================
// GENERATIONS
// =============================================================================

#[test]
fn test_gamma_tables_match_legacy() {
    let config = GeneratorConfig::production().unwrap();
    let pairs = [
        (Formula::LegacyBetaT, Formula::GammaT),
        (Formula::LegacyBetaR, Formula::GammaR),
    ];
    for (legacy, current) in pairs {
        let legacy = config.generate(legacy).unwrap();
        let current = config.generate(current).unwrap();
        let legacy: Vec<_> = legacy.fixed_values().collect();
        let current: Vec<_> = current.fixed_values().collect();
        assert_eq!(legacy, current);
    }
}

#[test]
fn test_beta_is_reciprocal_only_after_encoding() {
    let config = GeneratorConfig::production().unwrap();
    let ctx = config.context;
    let (beta, gamma) = (config.constants.beta(), config.constants.gamma());

    let inverse = ctx.div(&Decimal::one(), beta).unwrap();
    let expected: Decimal = "0.999801332008598957430613406568191166485722567691333380693417"
        .parse()
        .unwrap();
    assert_eq!(inverse, expected);
    assert_ne!(&inverse, gamma);
    assert_eq!(
        ctx.sub(&inverse, gamma),
        "0.000000000000000000000000000000000000000000000000000000000012".parse::<Decimal>().unwrap()
    );

    let encode = |value: &Decimal| Fixed64x64::from_decimal(value, ctx).unwrap();
    assert_eq!(encode(&inverse), encode(gamma));
}

#[test]
fn test_daily_rate_is_scaled_rate() {
    let config = GeneratorConfig::production().unwrap();
    let rate = config.generate(Formula::Rate).unwrap();
    let daily = config.generate(Formula::DailyRate).unwrap();
    let twenty_four = Decimal::from_integer(24);

    for (r, d) in rate.entries().iter().zip(daily.entries()) {
        assert_eq!(config.context.mul(&r.term, &twenty_four), d.term, "n={}", r.index);
    }
}

// =============================================================================
// PRECISION
// =============================================================================

#[test]
fn test_low_precision_drifts() {
    // 20 digits cannot resolve the cancellation in β^(n+1) − β^n.
    let config = GeneratorConfig::production().unwrap();
    let coarse = config.clone().with_context(Context::new(20).unwrap());

    let precise = config.generate(Formula::Rate).unwrap();
    let drifted = coarse.generate(Formula::Rate).unwrap();

    assert_eq!(precise.entries()[1].fixed.to_bits(), 36_889_823_369_826_090_270);
    assert_eq!(drifted.entries()[1].fixed.to_bits(), 36_889_823_369_826_096_567);
}

#[test]
fn test_higher_precision_is_stable() {
    let config = GeneratorConfig::production().unwrap();
    assert_eq!(config.context.precision(), DEFAULT_PRECISION);
    let fine = config.clone().with_context(Context::new(90).unwrap());

    for formula in Formula::ALL {
        let a: Vec<_> = config.generate(formula).unwrap().fixed_values().collect();
        let b: Vec<_> = fine.generate(formula).unwrap().fixed_values().collect();
        assert_eq!(a, b, "{formula:?} changes with more precision");
    }
}

// =============================================================================
// CONTRACT ARRAYS
// =============================================================================

#[test]
fn test_report_arrays_parse_back() {
    let config = GeneratorConfig::production().unwrap();
    for report in [Report::Legacy, Report::Demurrage] {
        let text = render_report(report, &config).unwrap();
        let parsed = parse_array_literals(&text, config.array_type).unwrap();
        let tables = report.tables(&config).unwrap();

        assert_eq!(parsed.len(), 2);
        for (declaration, table) in parsed.iter().zip(&tables) {
            assert_eq!(Some(declaration.name.as_str()), table.formula().array_name());
            let expected: Vec<i128> = table.fixed_values().map(|v| v.to_bits()).collect();
            assert_eq!(declaration.values, expected);
        }
    }
}

#[test]
fn test_rates_report_contains_no_arrays() {
    let config = GeneratorConfig::production().unwrap();
    let text = render_report(Report::Rates, &config).unwrap();
    assert!(parse_array_literals(&text, config.array_type)
        .unwrap()
        .is_empty());
}
