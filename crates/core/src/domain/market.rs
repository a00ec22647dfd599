use serde::{Deserialize, Serialize};

/// Coarse market classification used to pick a profit margin. Ephemeral: it
/// only exists long enough to resolve a margin fraction and is not stored on
/// the finished quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketSituation {
    Standard,
    Premium,
    Competitive,
    Custom,
}
