use crate::config::RateCard;
use crate::domain::quote::CalculationResult;
use crate::domain::workshop::QuoteInput;

/// Pricing seam: the wizard talks to this trait so tests can substitute
/// alternate engines or rate interpretations.
pub trait PricingEngine: Send + Sync {
    fn price(&self, input: &QuoteInput, margin: f64, rates: &RateCard) -> CalculationResult;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DeterministicPricingEngine;

impl PricingEngine for DeterministicPricingEngine {
    fn price(&self, input: &QuoteInput, margin: f64, rates: &RateCard) -> CalculationResult {
        price_quote(input, margin, rates)
    }
}

/// Pure cost/price breakdown. Total over any finite input and margin; no
/// rounding happens here, display rounding belongs to the renderers.
pub fn price_quote(input: &QuoteInput, margin: f64, rates: &RateCard) -> CalculationResult {
    let labor_cost = input.prep_hours * rates.prep_rate_hourly
        + input.workshop_hours * rates.workshop_rate_hourly;
    // Round trip.
    let travel_cost = input.distance_km * 2.0 * rates.travel_rate_per_km;
    let materials_cost = input.estimated_material_units * rates.material_rate_per_unit;
    let assistant_cost = if input.has_assistant {
        input.workshop_hours * rates.assistant_rate_per_workshop_hour
    } else {
        0.0
    };

    let total_cost = labor_cost + travel_cost + materials_cost + assistant_cost;
    let profit_amount = total_cost * margin;
    let final_price = total_cost + profit_amount;
    let final_price_with_vat = final_price * (1.0 + rates.vat_rate);

    CalculationResult {
        labor_cost,
        travel_cost,
        materials_cost,
        assistant_cost,
        total_cost,
        profit_margin: margin,
        profit_amount,
        final_price,
        final_price_with_vat,
    }
}
