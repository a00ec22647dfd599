use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::client::ClientDetails;
use crate::domain::workshop::QuoteInput;

/// Derived cost/price breakdown. Produced only by the pricing engine and
/// always replaced as a whole record by the market-selection transition,
/// never patched field by field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub labor_cost: f64,
    pub travel_cost: f64,
    pub materials_cost: f64,
    pub assistant_cost: f64,
    pub total_cost: f64,
    pub profit_margin: f64,
    pub profit_amount: f64,
    pub final_price: f64,
    pub final_price_with_vat: f64,
}

impl CalculationResult {
    /// VAT amount implied by the breakdown. Display helper only; the stored
    /// fields stay authoritative.
    pub fn vat_amount(&self) -> f64 {
        self.final_price_with_vat - self.final_price
    }
}

/// A finalized quote handed to the renderers: an owned copy of the three
/// wizard records, so an export already in flight stays valid even if the
/// operator restarts the wizard underneath it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub client: ClientDetails,
    pub input: QuoteInput,
    pub result: CalculationResult,
    pub prepared_at: DateTime<Utc>,
}
