//! Full wizard traversals against the default configuration.

use sadna_core::{
    AppConfig, ClientDetails, MarginAdjustment, MarketSituation, QuoteInput, QuoteWizard,
    TransitionOutcome, WizardEvent, WizardStep,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_env_filter("debug").with_test_writer().try_init();
}

fn client() -> ClientDetails {
    ClientDetails {
        business_name: "גן ילדים אלון".to_owned(),
        email: "office@alon.example".to_owned(),
        phone: "04-8123456".to_owned(),
        address: None,
    }
}

fn input(has_assistant: bool) -> QuoteInput {
    QuoteInput {
        workshop_name: "סדנת באלנס בורד".to_owned(),
        participants: 10,
        distance_km: 20.0,
        prep_hours: 1.0,
        workshop_hours: 2.0,
        estimated_material_units: 5.0,
        has_assistant,
    }
}

fn run_to_results(config: AppConfig, situation: MarketSituation, custom: Option<f64>) -> QuoteWizard {
    let mut wizard = QuoteWizard::new(config);
    wizard.apply(WizardEvent::Start).expect("greeting -> client details");
    wizard.apply(WizardEvent::SubmitClientDetails(client())).expect("-> input form");
    wizard.apply(WizardEvent::SubmitQuoteInput(input(false))).expect("-> market select");
    wizard
        .apply(WizardEvent::SelectMarket { situation, custom_fraction: custom })
        .expect("-> results");
    wizard
}

#[test]
fn standard_traversal_produces_the_reference_breakdown() {
    init_logging();
    let wizard = run_to_results(AppConfig::default(), MarketSituation::Standard, None);

    assert_eq!(wizard.step(), WizardStep::Results);
    let result = wizard.result().expect("priced");
    assert!((result.total_cost - 830.0).abs() < 1e-9);
    assert!((result.final_price - 1162.0).abs() < 1e-9);
    assert!((result.final_price_with_vat - 1359.54).abs() < 1e-9);
    assert!((result.vat_amount() - 197.54).abs() < 1e-9);
}

#[test]
fn premium_and_competitive_bracket_the_standard_price() {
    init_logging();
    let standard = run_to_results(AppConfig::default(), MarketSituation::Standard, None);
    let premium = run_to_results(AppConfig::default(), MarketSituation::Premium, None);
    let competitive = run_to_results(AppConfig::default(), MarketSituation::Competitive, None);

    let standard_price = standard.result().expect("priced").final_price;
    assert!(premium.result().expect("priced").final_price > standard_price);
    assert!(competitive.result().expect("priced").final_price < standard_price);
}

#[test]
fn multiplicative_margin_mode_is_honoured_end_to_end() {
    init_logging();
    let config = AppConfig {
        margins: MarginAdjustment::Multiplicative { premium_factor: 1.5, competitive_factor: 0.5 },
        ..AppConfig::default()
    };
    let wizard = run_to_results(config, MarketSituation::Premium, None);

    let result = wizard.result().expect("priced");
    assert!((result.profit_margin - 0.60).abs() < 1e-12);
    assert!((result.final_price - 830.0 * 1.60).abs() < 1e-9);
}

#[test]
fn resubmission_after_back_replaces_the_stored_input() {
    init_logging();
    let mut wizard = QuoteWizard::new(AppConfig::default());
    wizard.apply(WizardEvent::Start).expect("start");
    wizard.apply(WizardEvent::SubmitClientDetails(client())).expect("submit client");
    wizard.apply(WizardEvent::SubmitQuoteInput(input(false))).expect("submit input");
    wizard.apply(WizardEvent::Back).expect("back to input form");
    wizard.apply(WizardEvent::SubmitQuoteInput(input(true))).expect("resubmit input");
    wizard
        .apply(WizardEvent::SelectMarket {
            situation: MarketSituation::Standard,
            custom_fraction: None,
        })
        .expect("reach results");

    let result = wizard.result().expect("priced");
    assert!((result.assistant_cost - 80.0).abs() < 1e-9);
    assert!((result.total_cost - 910.0).abs() < 1e-9);
}

#[test]
fn restart_from_results_allows_a_fresh_traversal() {
    init_logging();
    let mut wizard = run_to_results(AppConfig::default(), MarketSituation::Custom, Some(0.25));
    let outcome = wizard.apply(WizardEvent::Restart).expect("restart");

    assert_eq!(
        outcome,
        TransitionOutcome::Advanced { from: WizardStep::Results, to: WizardStep::Greeting }
    );
    assert!(wizard.client().is_none());
    assert!(wizard.input().is_none());
    assert!(wizard.result().is_none());

    wizard.apply(WizardEvent::Start).expect("second traversal starts cleanly");
    assert_eq!(wizard.step(), WizardStep::ClientDetails);
}
