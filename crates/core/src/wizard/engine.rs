use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::domain::client::ClientDetails;
use crate::domain::quote::{CalculationResult, QuoteSnapshot};
use crate::domain::workshop::QuoteInput;
use crate::pricing::engine::{DeterministicPricingEngine, PricingEngine};
use crate::pricing::margin::resolve_margin;
use crate::wizard::states::{RefusalReason, TransitionOutcome, WizardEvent, WizardStep};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    /// A submit-type event arrived at the wrong step. This is a caller bug,
    /// not an operator-facing condition; the wizard state is untouched.
    #[error("event `{event}` is not legal at step {step:?}")]
    InvalidTransition { step: WizardStep, event: &'static str },
    #[error("quote is not finalized yet (current step {step:?})")]
    NotFinalized { step: WizardStep },
}

/// One operator's quote session: the current step plus the three evolving
/// records. Events arrive one at a time; the pricing engine runs only inside
/// the market-selection transition, so nothing else can touch the stored
/// [`CalculationResult`].
pub struct QuoteWizard<P = DeterministicPricingEngine> {
    config: AppConfig,
    engine: P,
    step: WizardStep,
    client: Option<ClientDetails>,
    input: Option<QuoteInput>,
    result: Option<CalculationResult>,
}

impl QuoteWizard<DeterministicPricingEngine> {
    pub fn new(config: AppConfig) -> Self {
        Self::with_engine(config, DeterministicPricingEngine)
    }
}

impl<P: PricingEngine> QuoteWizard<P> {
    pub fn with_engine(config: AppConfig, engine: P) -> Self {
        Self {
            config,
            engine,
            step: WizardStep::Greeting,
            client: None,
            input: None,
            result: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn client(&self) -> Option<&ClientDetails> {
        self.client.as_ref()
    }

    pub fn input(&self) -> Option<&QuoteInput> {
        self.input.as_ref()
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Apply one external event. Submit-type events at the wrong step are
    /// rejected without changing state; the defensive guards (`Back` at the
    /// greeting, market selection without stored input) refuse silently.
    pub fn apply(&mut self, event: WizardEvent) -> Result<TransitionOutcome, WizardError> {
        let outcome = match (self.step, event) {
            (WizardStep::Greeting, WizardEvent::Start) => self.advance(WizardStep::ClientDetails),
            (WizardStep::ClientDetails, WizardEvent::SubmitClientDetails(details)) => {
                self.client = Some(details);
                self.advance(WizardStep::InputForm)
            }
            (WizardStep::InputForm, WizardEvent::SubmitQuoteInput(input)) => {
                self.input = Some(input);
                self.advance(WizardStep::MarketSelect)
            }
            (WizardStep::MarketSelect, WizardEvent::SelectMarket { situation, custom_fraction }) => {
                let Some(input) = self.input.as_ref() else {
                    return Ok(self.refuse(RefusalReason::MissingQuoteInput));
                };
                let margin = resolve_margin(
                    situation,
                    custom_fraction,
                    self.config.rates.default_profit_margin,
                    &self.config.margins,
                );
                self.result = Some(self.engine.price(input, margin, &self.config.rates));
                self.advance(WizardStep::Results)
            }
            (_, WizardEvent::Back) => match self.step.previous() {
                Some(to) => self.advance(to),
                None => self.refuse(RefusalReason::AtFirstStep),
            },
            (_, WizardEvent::Restart) => {
                // All three records are cleared in the same step as the move
                // back to the greeting.
                self.client = None;
                self.input = None;
                self.result = None;
                info!(from = ?self.step, "wizard restarted, records cleared");
                self.advance(WizardStep::Greeting)
            }
            (step, event) => {
                return Err(WizardError::InvalidTransition { step, event: event.name() });
            }
        };
        Ok(outcome)
    }

    /// The finalized triple, available only at the results step. The copy is
    /// owned so renderers and exports never observe later wizard mutations.
    pub fn snapshot(&self) -> Result<QuoteSnapshot, WizardError> {
        match (self.step, &self.client, &self.input, &self.result) {
            (WizardStep::Results, Some(client), Some(input), Some(result)) => Ok(QuoteSnapshot {
                client: client.clone(),
                input: input.clone(),
                result: result.clone(),
                prepared_at: Utc::now(),
            }),
            _ => Err(WizardError::NotFinalized { step: self.step }),
        }
    }

    fn advance(&mut self, to: WizardStep) -> TransitionOutcome {
        let from = self.step;
        self.step = to;
        info!(?from, ?to, "wizard step advanced");
        TransitionOutcome::Advanced { from, to }
    }

    fn refuse(&self, reason: RefusalReason) -> TransitionOutcome {
        debug!(step = ?self.step, ?reason, "wizard event refused");
        TransitionOutcome::Refused { at: self.step, reason }
    }
}
