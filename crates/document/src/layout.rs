//! Paginated projection of a finalized quote.
//!
//! Composes one page worth of placement calls against a [`DrawSurface`].
//! Every displayed amount is read from the snapshot's stored breakdown; the
//! layout never recomputes a price.

use chrono::Datelike;

use sadna_core::{AppConfig, QuoteSnapshot};

use crate::surface::{DrawSurface, TextAlign, TextStyle};
use crate::text::{format_currency, format_quantity};

const MARGIN_LEFT: f32 = 14.0;
const MARGIN_RIGHT: f32 = 200.0;

/// Lay out the quote page: header, title and issue details, client block,
/// the single itemized line, totals and footer disclaimer.
pub fn render_quote_page<S: DrawSurface>(
    snapshot: &QuoteSnapshot,
    config: &AppConfig,
    quote_number: &str,
    surface: &mut S,
) {
    let page = surface.page_size();
    let business = &config.business;
    let result = &snapshot.result;

    // Header: provider identity, right-aligned like the letterhead.
    surface.place_text(&business.name, MARGIN_RIGHT, 20.0, TextStyle::bold(26.0, TextAlign::Right));
    surface.place_text(
        &business.tagline,
        MARGIN_RIGHT,
        28.0,
        TextStyle::regular(11.0, TextAlign::Right),
    );
    surface.place_text(
        &business.contact_email,
        MARGIN_RIGHT,
        34.0,
        TextStyle::regular(11.0, TextAlign::Right),
    );
    surface.draw_rule(MARGIN_LEFT, MARGIN_RIGHT, 45.0);

    // Title and issue details.
    surface.place_text("הצעת מחיר", MARGIN_RIGHT, 60.0, TextStyle::regular(22.0, TextAlign::Right));
    let issued = snapshot.prepared_at.date_naive();
    let issued_label =
        format!("תאריך: {}.{}.{}", issued.day(), issued.month(), issued.year());
    surface.place_text(&issued_label, MARGIN_RIGHT, 68.0, TextStyle::regular(12.0, TextAlign::Right));
    surface.place_text(
        &format!("הצעה מספר: {quote_number}"),
        MARGIN_RIGHT,
        74.0,
        TextStyle::regular(12.0, TextAlign::Right),
    );

    // Client identity block on the opposite side.
    let client = &snapshot.client;
    surface.place_text(
        &format!("לכבוד: {}", client.business_name),
        MARGIN_LEFT,
        68.0,
        TextStyle::regular(12.0, TextAlign::Left),
    );
    if let Some(address) = &client.address {
        surface.place_text(
            &format!("כתובת: {address}"),
            MARGIN_LEFT,
            74.0,
            TextStyle::regular(12.0, TextAlign::Left),
        );
    }
    surface.place_text(
        &format!("Email: {}", client.email),
        MARGIN_LEFT,
        80.0,
        TextStyle::regular(12.0, TextAlign::Left),
    );

    // Single itemized line: description, quantity 1, pre-VAT price.
    let table_top = 90.0;
    surface.draw_rule(MARGIN_LEFT, MARGIN_RIGHT, table_top);
    surface.place_text("תיאור", 196.0, table_top + 7.0, TextStyle::bold(12.0, TextAlign::Right));
    surface.place_text("כמות", 100.0, table_top + 7.0, TextStyle::bold(12.0, TextAlign::Left));
    surface.place_text("מחיר", 30.0, table_top + 7.0, TextStyle::bold(12.0, TextAlign::Left));
    surface.draw_rule(MARGIN_LEFT, MARGIN_RIGHT, table_top + 11.0);

    surface.place_text(
        &snapshot.input.workshop_name,
        196.0,
        table_top + 18.0,
        TextStyle::regular(12.0, TextAlign::Right),
    );
    let item_detail = format!(
        "ל-{} משתתפים, {} שעות",
        snapshot.input.participants,
        format_quantity(snapshot.input.workshop_hours),
    );
    surface.place_text(&item_detail, 196.0, table_top + 24.0, TextStyle::regular(10.0, TextAlign::Right));
    surface.place_text("1", 100.0, table_top + 18.0, TextStyle::regular(12.0, TextAlign::Left));
    surface.place_text(
        &format_currency(result.final_price),
        30.0,
        table_top + 18.0,
        TextStyle::regular(12.0, TextAlign::Left),
    );
    let table_bottom = table_top + 28.0;
    surface.draw_rule(MARGIN_LEFT, MARGIN_RIGHT, table_bottom);

    // Totals.
    let label_style = TextStyle::regular(12.0, TextAlign::Right);
    let value_x = MARGIN_RIGHT - 40.0;
    surface.place_text("סה\"כ לפני מע\"מ:", MARGIN_RIGHT, table_bottom + 10.0, label_style);
    surface.place_text(
        &format_currency(result.final_price),
        value_x,
        table_bottom + 10.0,
        TextStyle::regular(12.0, TextAlign::Left),
    );
    let vat_label =
        format!("מע\"מ ({}%):", format_quantity(config.rates.vat_rate * 100.0));
    surface.place_text(&vat_label, MARGIN_RIGHT, table_bottom + 17.0, label_style);
    surface.place_text(
        &format_currency(result.vat_amount()),
        value_x,
        table_bottom + 17.0,
        TextStyle::regular(12.0, TextAlign::Left),
    );
    surface.place_text(
        "סה\"כ לתשלום:",
        MARGIN_RIGHT,
        table_bottom + 26.0,
        TextStyle::bold(14.0, TextAlign::Right),
    );
    surface.place_text(
        &format_currency(result.final_price_with_vat),
        value_x,
        table_bottom + 26.0,
        TextStyle::bold(14.0, TextAlign::Left),
    );

    // Footer disclaimer.
    let footer_y = page.height - 30.0;
    surface.draw_rule(MARGIN_LEFT, MARGIN_RIGHT, footer_y);
    surface.place_text("תודה רבה!", 0.0, footer_y + 8.0, TextStyle::regular(10.0, TextAlign::Center));
    let disclaimer = format!(
        "תוקף ההצעה הינו {} יום | {}",
        business.quote_validity_days, business.payment_terms,
    );
    surface.flow_text(
        &disclaimer,
        MARGIN_LEFT,
        footer_y + 14.0,
        MARGIN_RIGHT - MARGIN_LEFT,
        TextStyle::regular(10.0, TextAlign::Center),
    );
}
