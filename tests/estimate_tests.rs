//! End-to-end estimates through the public library API

use price_estimator::config::load_config;
use price_estimator::pricing::{
    AdvancedFeatures, BasePlan, Category, CostCalculator, PlanOption, Selections,
    ShopifyIntegration,
};
use std::io::Write;

fn every_selection() -> impl Iterator<Item = Selections> {
    BasePlan::all().iter().flat_map(|base| {
        ShopifyIntegration::all().iter().flat_map(move |shopify| {
            AdvancedFeatures::all().iter().map(move |advanced| Selections {
                base: *base,
                shopify: *shopify,
                advanced: *advanced,
            })
        })
    })
}

#[test]
fn test_documented_examples() {
    let calculator = CostCalculator::default();

    let small = calculator.calculate(&Selections {
        base: BasePlan::Option1,
        shopify: ShopifyIntegration::None,
        advanced: AdvancedFeatures::None,
    });
    assert_eq!(small.subtotal, 50.0);
    assert_eq!(small.commission_percentage, 100.0);
    assert_eq!(small.total, 100.0);

    let medium = calculator.calculate(&Selections {
        base: BasePlan::Option2,
        shopify: ShopifyIntegration::Option1,
        advanced: AdvancedFeatures::Option2,
    });
    assert_eq!(medium.subtotal, 193.0);
    assert_eq!(medium.commission_percentage, 75.0);
    assert_eq!(medium.total, 337.75);
}

#[test]
fn test_breakdown_invariants_hold_for_every_selection() {
    let calculator = CostCalculator::default();
    let mut count = 0;

    for selections in every_selection() {
        let breakdown = calculator.calculate(&selections);
        let map = breakdown.to_map();

        let items_only: f64 = map
            .iter()
            .filter(|(name, _)| **name != Category::Commission.name())
            .map(|(_, amount)| amount)
            .sum();
        assert!((items_only - breakdown.subtotal).abs() < 1e-9);

        let expected_total = breakdown.subtotal * (1.0 + breakdown.commission_percentage / 100.0);
        assert!((breakdown.total - expected_total).abs() < 0.005);
        count += 1;
    }

    assert_eq!(count, 2 * 3 * 4);
}

#[test]
fn test_config_file_drives_calculation() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        r#"
[pricing]
adjustment_percentage = 10.0

[[pricing.commission_tiers]]
below = 100.0
percentage = 50.0

[[pricing.commission_tiers]]
percentage = 25.0
"#
    )?;

    let cfg = load_config(file.path())?;
    let calculator = CostCalculator::from_config(&cfg.pricing)?;
    let breakdown = calculator.calculate(&Selections::default());

    // 50 list price +10% = 55, below 100 so 50% commission
    assert_eq!(breakdown.subtotal, 55.0);
    assert_eq!(breakdown.commission_percentage, 50.0);
    assert_eq!(breakdown.total, 82.5);
    Ok(())
}

#[test]
fn test_invalid_config_file_is_rejected() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[pricing]\nadjustment_percentage = -150.0")?;

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("adjustment_percentage"));
    Ok(())
}
