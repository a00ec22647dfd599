use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Process-wide rate table. Loaded once at startup, injected into the
/// pricing engine, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCard {
    pub prep_rate_hourly: f64,
    pub workshop_rate_hourly: f64,
    pub travel_rate_per_km: f64,
    pub material_rate_per_unit: f64,
    pub assistant_rate_per_workshop_hour: f64,
    pub default_profit_margin: f64,
    pub vat_rate: f64,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            prep_rate_hourly: 100.0,
            workshop_rate_hourly: 200.0,
            travel_rate_per_km: 2.0,
            material_rate_per_unit: 50.0,
            assistant_rate_per_workshop_hour: 40.0,
            default_profit_margin: 0.40,
            vat_rate: 0.17,
        }
    }
}

/// How the Premium and Competitive market situations move the default
/// margin. The two calculators this replaces disagreed (absolute bump versus
/// scaling factor), so the choice lives in configuration rather than code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MarginAdjustment {
    Additive { premium_bump: f64, competitive_cut: f64 },
    Multiplicative { premium_factor: f64, competitive_factor: f64 },
}

impl Default for MarginAdjustment {
    fn default() -> Self {
        Self::Additive { premium_bump: 0.20, competitive_cut: 0.10 }
    }
}

/// Unit the material estimate is quoted in. Label-only: the per-unit rate
/// from the [`RateCard`] applies either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialUnit {
    #[default]
    Meters,
    Kilograms,
}

impl MaterialUnit {
    pub fn label(self) -> &'static str {
        match self {
            Self::Meters => "מטר",
            Self::Kilograms => "ק\"ג",
        }
    }
}

/// Provider identity printed on every outgoing quote document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub name: String,
    pub tagline: String,
    pub contact_email: String,
    pub quote_validity_days: u32,
    pub payment_terms: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "נגר על הבוקר".to_owned(),
            tagline: "סדנאות נגרות ויצירה בעץ".to_owned(),
            contact_email: "info@carpentamorning.com".to_owned(),
            quote_validity_days: 30,
            payment_terms: "התשלום יבוצע בהעברה בנקאית או צ'ק".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rates: RateCard,
    pub margins: MarginAdjustment,
    pub material_unit: MaterialUnit,
    pub business: BusinessProfile,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
}

impl AppConfig {
    /// Load configuration from a TOML file. Missing keys fall back to the
    /// built-in defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
        toml::from_str(&raw)
            .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
    }

    /// Like [`load`](Self::load), but an absent file yields the defaults
    /// instead of an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
