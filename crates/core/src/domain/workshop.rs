use serde::{Deserialize, Serialize};

/// Workshop parameters collected at the second wizard step. Ranges
/// (1–50 participants, 0–500 km, 0–40 prep hours, 0.5–12 workshop hours,
/// 0–200 material units) are enforced by the form layer before submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteInput {
    pub workshop_name: String,
    pub participants: u32,
    /// One-way distance; travel is billed round trip.
    pub distance_km: f64,
    pub prep_hours: f64,
    pub workshop_hours: f64,
    pub estimated_material_units: f64,
    pub has_assistant: bool,
}

/// The fixed offering list shown by the workshop picker. Free-text names are
/// accepted as well.
pub fn workshop_catalog() -> [&'static str; 8] {
    [
        "מכונת ממתקים מעץ",
        "סדנת בניית מנורת שולחן",
        "סדנת רובוטים",
        "קוביות מדברות",
        "מסגרת לתמונה",
        "מתלה מפתחות משרדי",
        "סלסלה שהופכת לשולחן",
        "סדנת באלנס בורד",
    ]
}

#[cfg(test)]
mod tests {
    use super::workshop_catalog;

    #[test]
    fn catalog_has_no_blank_or_duplicate_entries() {
        let catalog = workshop_catalog();
        assert!(catalog.iter().all(|name| !name.trim().is_empty()));

        let mut seen = std::collections::HashSet::new();
        assert!(catalog.iter().all(|name| seen.insert(name)));
    }
}
