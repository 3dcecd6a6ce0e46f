//! Delta of the Heston PDE model through the engine and risk layers.

use pricer_models::instruments::VanillaOption;
use pricer_models::models::HestonParams;
use pricer_pricing::pde::{AdiScheme, GridConfig, PdeConfig, VarianceSelection};
use pricer_pricing::{HestonPdeModel, PricingEngine};
use pricer_risk::{DeltaConfig, DeltaMethod, RiskEngine};

fn model(scheme: AdiScheme, variance_selection: VarianceSelection) -> HestonPdeModel {
    let mut config = PdeConfig::new(GridConfig::new(50.0, 150.0, 61, 0.0, 1.0, 31), 50);
    config.scheme = scheme;
    config.variance_selection = variance_selection;
    let params = HestonParams::new(2.0, 0.04, 0.3, -0.6, 0.04, 0.03).unwrap();
    HestonPdeModel::from_config(&config, params, 50.0).unwrap()
}

#[test]
fn test_two_factor_delta_is_plausible() {
    let model = model(AdiScheme::douglas(), VarianceSelection::Bilinear);
    let engine = PricingEngine::new(&model);
    let risk = RiskEngine::with_config(&engine, DeltaConfig::new(1.0, DeltaMethod::Central).unwrap());

    let quote = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
    let delta = risk.delta(&quote).unwrap();
    assert!(delta > 0.4 && delta < 0.9, "delta = {}", delta);
}

#[test]
fn test_historical_delta_is_finite_and_non_negative() {
    let model = model(AdiScheme::PriceOnly, VarianceSelection::GridPosition);
    let engine = PricingEngine::new(&model);
    let risk = RiskEngine::new(&engine);

    let quote = VanillaOption::new(100.0, 1.0, 100.0).unwrap();
    let delta = risk.delta(&quote).unwrap();
    assert!(delta.is_finite());
    assert!(delta >= 0.0);
}

#[test]
fn test_bump_past_grid_edge_fails() {
    let model = model(AdiScheme::PriceOnly, VarianceSelection::GridPosition);
    let engine = PricingEngine::new(&model);
    let risk = RiskEngine::new(&engine);

    // Spot at Smax: the up-bump leaves the grid.
    let quote = VanillaOption::new(100.0, 1.0, 150.0).unwrap();
    assert!(risk.delta(&quote).is_err());
}
