pub mod engine;
pub mod states;

pub use engine::{QuoteWizard, WizardError};
pub use states::{RefusalReason, TransitionOutcome, WizardEvent, WizardStep};
