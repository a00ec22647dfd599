//! Plain-text projection of a finalized quote.
//!
//! The rendered string is canonical: clipboard copy and the mail-compose
//! body are the same bytes, so the two destinations can never drift apart.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tera::{Context, Tera};
use thiserror::Error;

use sadna_core::{AppConfig, QuoteSnapshot};

/// Currency display: thousands-grouped, zero decimal places, shekel suffix.
/// Rounding happens only here; the underlying numbers keep full precision.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded < 0 {
        format!("-{grouped} ₪")
    } else {
        format!("{grouped} ₪")
    }
}

/// Quantity display: whole numbers drop the trailing `.0`. Values are
/// snapped to nine decimals first so binary float noise never leaks into the
/// document.
pub(crate) fn format_quantity(value: f64) -> String {
    let snapped = (value * 1e9).round() / 1e9;
    if snapped.fract() == 0.0 {
        format!("{snapped:.0}")
    } else {
        format!("{snapped}")
    }
}

/// Register the custom Tera filters used by quote templates.
///
/// - `ils`: currency formatting, e.g. `final_price | ils` → `1,162 ₪`
pub fn register_template_filters(tera: &mut Tera) {
    tera.register_filter("ils", tera_ils_filter);
}

fn tera_ils_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let num = match value {
        tera::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        tera::Value::Null => 0.0,
        _ => return Err(tera::Error::msg("ils filter expects a number")),
    };
    Ok(tera::Value::String(format_currency(num)))
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Mail-compose prefill handed to the platform entry point. No delivery
/// confirmation comes back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailPrefill {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// How long the "copied" confirmation stays visible before reverting.
pub const COPY_CONFIRMATION_TTL: Duration = Duration::from_secs(2);

/// Transient flag raised after a clipboard write succeeds.
#[derive(Clone, Copy, Debug)]
pub struct CopyConfirmation {
    shown_at: Instant,
}

impl CopyConfirmation {
    pub fn raised_now() -> Self {
        Self::raised_at(Instant::now())
    }

    pub fn raised_at(shown_at: Instant) -> Self {
        Self { shown_at }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) < COPY_CONFIRMATION_TTL
    }
}

/// Operator-facing cost breakdown shown beside the client quote. Never part
/// of any client-bound output.
pub fn internal_breakdown(snapshot: &QuoteSnapshot, config: &AppConfig) -> String {
    let input = &snapshot.input;
    let result = &snapshot.result;
    let rates = &config.rates;
    let margin_percent = (result.profit_margin * 100.0).round();

    let mut lines = vec![
        "פירוט פנימי (לעיונך בלבד)".to_owned(),
        format!("מבוסס על רווחיות של {margin_percent}%"),
        String::new(),
        format!(
            "עלות עבודת נגרות ({} שעות): {}",
            format_quantity(input.prep_hours + input.workshop_hours),
            format_currency(result.labor_cost),
        ),
        format!(
            "עלות נסיעה ({} ק\"מ * {}): {}",
            format_quantity(input.distance_km * 2.0),
            format_currency(rates.travel_rate_per_km),
            format_currency(result.travel_cost),
        ),
        format!(
            "עלות עץ ({} {} * {}): {}",
            format_quantity(input.estimated_material_units),
            config.material_unit.label(),
            format_currency(rates.material_rate_per_unit),
            format_currency(result.materials_cost),
        ),
    ];
    if result.assistant_cost > 0.0 {
        lines.push(format!(
            "עלות עובד נוסף ({} שעות * {}): {}",
            format_quantity(input.workshop_hours),
            format_currency(rates.assistant_rate_per_workshop_hour),
            format_currency(result.assistant_cost),
        ));
    }
    lines.extend([
        "---".to_owned(),
        format!("סה\"כ עלויות: {}", format_currency(result.total_cost)),
        format!("רווח ({margin_percent}%): {}", format_currency(result.profit_amount)),
        format!("מחיר סופי ללקוח (לפני מע\"מ): {}", format_currency(result.final_price)),
        format!("מחיר סופי אחרי מע\"מ: {}", format_currency(result.final_price_with_vat)),
    ]);
    lines.join("\n")
}

/// Renderer for the text projection, holding the compiled template.
pub struct TextProjection {
    tera: Tera,
}

impl TextProjection {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        register_template_filters(&mut tera);
        tera.add_raw_template(
            "quote_email.txt.tera",
            include_str!("../templates/quote_email.txt.tera"),
        )?;
        Ok(Self { tera })
    }

    /// The canonical quote text. Every number comes from the snapshot's
    /// stored breakdown; nothing is recomputed here.
    pub fn render(
        &self,
        snapshot: &QuoteSnapshot,
        config: &AppConfig,
    ) -> Result<String, RenderError> {
        let result = &snapshot.result;
        let participants = snapshot.input.participants.max(1) as f64;

        let mut context = Context::new();
        context.insert("business_name", &snapshot.client.business_name);
        context.insert("workshop_name", &snapshot.input.workshop_name);
        context.insert("participants", &snapshot.input.participants);
        context.insert("workshop_hours", &format_quantity(snapshot.input.workshop_hours));
        context.insert("per_participant", &(result.final_price / participants));
        context.insert("final_price", &result.final_price);
        context.insert("final_price_with_vat", &result.final_price_with_vat);
        context.insert("vat_percent", &format_quantity(config.rates.vat_rate * 100.0));
        context.insert("provider_name", &config.business.name);

        let rendered = self.tera.render("quote_email.txt.tera", &context)?;
        Ok(rendered.trim().to_owned())
    }

    /// Mail prefill sharing the exact clipboard bytes as its body.
    pub fn mail_prefill(
        &self,
        snapshot: &QuoteSnapshot,
        config: &AppConfig,
    ) -> Result<MailPrefill, RenderError> {
        Ok(MailPrefill {
            to: snapshot.client.email.clone(),
            subject: format!("הצעת מחיר עבור סדנת '{}'", snapshot.input.workshop_name),
            body: self.render(snapshot, config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use chrono::Utc;

    use sadna_core::{
        price_quote, AppConfig, CalculationResult, ClientDetails, QuoteInput, QuoteSnapshot,
    };

    use super::{format_currency, CopyConfirmation, TextProjection, COPY_CONFIRMATION_TTL};

    fn snapshot() -> (QuoteSnapshot, AppConfig) {
        let config = AppConfig::default();
        let input = QuoteInput {
            workshop_name: "סדנת רובוטים".to_owned(),
            participants: 10,
            distance_km: 20.0,
            prep_hours: 1.0,
            workshop_hours: 2.0,
            estimated_material_units: 5.0,
            has_assistant: false,
        };
        let result: CalculationResult = price_quote(&input, 0.40, &config.rates);
        let snapshot = QuoteSnapshot {
            client: ClientDetails {
                business_name: "בית ספר יובלים".to_owned(),
                email: "sec@yuvalim.example".to_owned(),
                phone: "050-7654321".to_owned(),
                address: None,
            },
            input,
            result,
            prepared_at: Utc::now(),
        };
        (snapshot, config)
    }

    #[test]
    fn currency_is_grouped_with_zero_decimals() {
        assert_eq!(format_currency(1162.0), "1,162 ₪");
        assert_eq!(format_currency(1359.54), "1,360 ₪");
        assert_eq!(format_currency(80.0), "80 ₪");
        assert_eq!(format_currency(1234567.0), "1,234,567 ₪");
        assert_eq!(format_currency(-250.0), "-250 ₪");
        assert_eq!(format_currency(0.2), "0 ₪");
    }

    #[test]
    fn text_projection_reports_the_stored_totals() {
        let (snapshot, config) = snapshot();
        let text = TextProjection::new().expect("template compiles").render(&snapshot, &config)
            .expect("renders");

        assert!(text.starts_with("הצעת מחיר עבור: בית ספר יובלים"));
        assert!(text.contains("שם הסדנה: סדנת רובוטים"));
        assert!(text.contains("מספר משתתפים: 10"));
        assert!(text.contains("משך הסדנה: 2 שעות"));
        assert!(text.contains("מחיר למשתתף: 116 ₪"));
        assert!(text.contains("סה\"כ עלות הסדנה: 1,162 ₪"));
        assert!(text.contains("(17%): 1,360 ₪"));
        assert!(text.ends_with(&config.business.name));
    }

    #[test]
    fn mail_body_is_byte_identical_to_the_clipboard_text() {
        let (snapshot, config) = snapshot();
        let projection = TextProjection::new().expect("template compiles");

        let text = projection.render(&snapshot, &config).expect("renders");
        let mail = projection.mail_prefill(&snapshot, &config).expect("prefill");

        assert_eq!(mail.body, text);
        assert_eq!(mail.to, "sec@yuvalim.example");
        assert_eq!(mail.subject, "הצעת מחיר עבור סדנת 'סדנת רובוטים'");
    }

    #[test]
    fn internal_breakdown_lists_every_cost_component() {
        let (mut snapshot, config) = snapshot();
        snapshot.input.has_assistant = true;
        snapshot.result = price_quote(&snapshot.input, 0.40, &config.rates);

        let breakdown = super::internal_breakdown(&snapshot, &config);

        assert!(breakdown.starts_with("פירוט פנימי"));
        assert!(breakdown.contains("מבוסס על רווחיות של 40%"));
        assert!(breakdown.contains("עלות עבודת נגרות (3 שעות): 500 ₪"));
        assert!(breakdown.contains("עלות נסיעה (40 ק\"מ * 2 ₪): 80 ₪"));
        assert!(breakdown.contains("עלות עץ (5 מטר * 50 ₪): 250 ₪"));
        assert!(breakdown.contains("עלות עובד נוסף (2 שעות * 40 ₪): 80 ₪"));
        assert!(breakdown.contains("סה\"כ עלויות: 910 ₪"));
        assert!(breakdown.contains("רווח (40%): 364 ₪"));
    }

    #[test]
    fn internal_breakdown_omits_the_assistant_line_when_absent() {
        let (snapshot, config) = snapshot();
        let breakdown = super::internal_breakdown(&snapshot, &config);
        assert!(!breakdown.contains("עלות עובד נוסף"));
    }

    #[test]
    fn copy_confirmation_reverts_after_its_window() {
        let raised = Instant::now();
        let confirmation = CopyConfirmation::raised_at(raised);

        assert!(confirmation.is_visible(raised + Duration::from_millis(500)));
        assert!(!confirmation.is_visible(raised + COPY_CONFIRMATION_TTL));
        assert!(!confirmation.is_visible(raised + Duration::from_secs(5)));
    }
}
