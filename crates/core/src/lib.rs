pub mod config;
pub mod domain;
pub mod pricing;
pub mod wizard;

pub use config::{
    AppConfig, BusinessProfile, ConfigError, MarginAdjustment, MaterialUnit, RateCard,
};
pub use domain::client::ClientDetails;
pub use domain::market::MarketSituation;
pub use domain::quote::{CalculationResult, QuoteSnapshot};
pub use domain::workshop::{workshop_catalog, QuoteInput};
pub use pricing::engine::{price_quote, DeterministicPricingEngine, PricingEngine};
pub use pricing::margin::resolve_margin;
pub use wizard::engine::{QuoteWizard, WizardError};
pub use wizard::states::{RefusalReason, TransitionOutcome, WizardEvent, WizardStep};
