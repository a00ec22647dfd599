use serde::{Deserialize, Serialize};

use crate::domain::client::ClientDetails;
use crate::domain::market::MarketSituation;
use crate::domain::workshop::QuoteInput;

/// The five wizard steps, in strict linear order. `Greeting` is initial;
/// `Results` is terminal for the happy path but not absorbing, since a
/// restart returns to `Greeting` from anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Greeting,
    ClientDetails,
    InputForm,
    MarketSelect,
    Results,
}

impl WizardStep {
    /// One step backward along the linear order; `None` at the first step.
    pub fn previous(self) -> Option<WizardStep> {
        match self {
            Self::Greeting => None,
            Self::ClientDetails => Some(Self::Greeting),
            Self::InputForm => Some(Self::ClientDetails),
            Self::MarketSelect => Some(Self::InputForm),
            Self::Results => Some(Self::MarketSelect),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WizardEvent {
    Start,
    SubmitClientDetails(ClientDetails),
    SubmitQuoteInput(QuoteInput),
    SelectMarket { situation: MarketSituation, custom_fraction: Option<f64> },
    Back,
    Restart,
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::SubmitClientDetails(_) => "submit_client_details",
            Self::SubmitQuoteInput(_) => "submit_quote_input",
            Self::SelectMarket { .. } => "select_market",
            Self::Back => "back",
            Self::Restart => "restart",
        }
    }
}

/// Why a legal-to-attempt event was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefusalReason {
    /// Market selection arrived with no stored workshop parameters.
    MissingQuoteInput,
    /// `Back` at the greeting step.
    AtFirstStep,
}

/// Result of applying an event to the wizard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TransitionOutcome {
    Advanced { from: WizardStep, to: WizardStep },
    /// The event was defensively ignored; the wizard did not move.
    Refused { at: WizardStep, reason: RefusalReason },
}
