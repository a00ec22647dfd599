use crate::config::MarginAdjustment;
use crate::domain::market::MarketSituation;

/// Map a market situation to a concrete margin fraction.
///
/// No clamping is applied: a custom fraction of 0, or above 1.0, passes
/// through untouched, and a Competitive cut may drive the margin negative.
pub fn resolve_margin(
    situation: MarketSituation,
    custom_fraction: Option<f64>,
    default_margin: f64,
    adjustment: &MarginAdjustment,
) -> f64 {
    match situation {
        MarketSituation::Standard => default_margin,
        MarketSituation::Premium => match adjustment {
            MarginAdjustment::Additive { premium_bump, .. } => default_margin + premium_bump,
            MarginAdjustment::Multiplicative { premium_factor, .. } => {
                default_margin * premium_factor
            }
        },
        MarketSituation::Competitive => match adjustment {
            MarginAdjustment::Additive { competitive_cut, .. } => default_margin - competitive_cut,
            MarginAdjustment::Multiplicative { competitive_factor, .. } => {
                default_margin * competitive_factor
            }
        },
        MarketSituation::Custom => custom_fraction.unwrap_or(default_margin),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_margin;
    use crate::config::MarginAdjustment;
    use crate::domain::market::MarketSituation;

    const DEFAULT: f64 = 0.40;

    #[test]
    fn standard_keeps_the_default_margin() {
        let margin =
            resolve_margin(MarketSituation::Standard, None, DEFAULT, &MarginAdjustment::default());
        assert_eq!(margin, DEFAULT);
    }

    #[test]
    fn premium_and_competitive_move_in_opposite_directions() {
        for adjustment in [
            MarginAdjustment::Additive { premium_bump: 0.20, competitive_cut: 0.10 },
            MarginAdjustment::Multiplicative { premium_factor: 1.2, competitive_factor: 0.9 },
        ] {
            let premium = resolve_margin(MarketSituation::Premium, None, DEFAULT, &adjustment);
            let competitive =
                resolve_margin(MarketSituation::Competitive, None, DEFAULT, &adjustment);

            assert!(premium > DEFAULT, "premium should raise the margin: {adjustment:?}");
            assert!(competitive < DEFAULT, "competitive should lower the margin: {adjustment:?}");
        }
    }

    #[test]
    fn additive_adjustment_uses_absolute_bumps() {
        let adjustment = MarginAdjustment::Additive { premium_bump: 0.20, competitive_cut: 0.10 };

        assert_eq!(resolve_margin(MarketSituation::Premium, None, DEFAULT, &adjustment), 0.60);
        assert!(
            (resolve_margin(MarketSituation::Competitive, None, DEFAULT, &adjustment) - 0.30).abs()
                < 1e-12
        );
    }

    #[test]
    fn custom_passes_the_operator_fraction_through() {
        let adjustment = MarginAdjustment::default();

        assert_eq!(
            resolve_margin(MarketSituation::Custom, Some(0.55), DEFAULT, &adjustment),
            0.55
        );
        assert_eq!(resolve_margin(MarketSituation::Custom, None, DEFAULT, &adjustment), DEFAULT);
    }

    #[test]
    fn custom_fractions_are_not_clamped() {
        let adjustment = MarginAdjustment::default();

        assert_eq!(resolve_margin(MarketSituation::Custom, Some(0.0), DEFAULT, &adjustment), 0.0);
        assert_eq!(resolve_margin(MarketSituation::Custom, Some(1.5), DEFAULT, &adjustment), 1.5);
    }
}
