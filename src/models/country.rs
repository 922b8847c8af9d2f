//! Supported countries and their phone dialing rules

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

/// Static per-country phone configuration, loaded at process start
#[derive(Debug)]
pub struct CountryConfig {
    /// ISO 3166-1 alpha-2 code
    pub code: &'static str,
    /// Display name
    pub name: &'static str,
    /// International dialing code
    pub dial_code: &'static str,
    /// Validation pattern for the cleaned local number
    pub phone_pattern: Regex,
    /// Example local number
    pub placeholder: &'static str,
    /// Maximum digits allowed
    pub max_length: usize,
}

/// Country view served to clients for the booking form
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CountryInfo {
    pub code: String,
    pub name: String,
    pub dial_code: String,
    pub placeholder: String,
    pub max_length: usize,
}

impl From<&CountryConfig> for CountryInfo {
    fn from(config: &CountryConfig) -> Self {
        Self {
            code: config.code.to_string(),
            name: config.name.to_string(),
            dial_code: config.dial_code.to_string(),
            placeholder: config.placeholder.to_string(),
            max_length: config.max_length,
        }
    }
}

static COUNTRY_CONFIGS: Lazy<Vec<CountryConfig>> = Lazy::new(|| {
    fn pattern(re: &str) -> Regex {
        Regex::new(re).expect("country phone pattern must compile")
    }

    vec![
        CountryConfig {
            code: "PT",
            name: "Portugal",
            dial_code: "+351",
            phone_pattern: pattern(r"^[1-9][0-9]{8}$"),
            placeholder: "912345678",
            max_length: 9,
        },
        CountryConfig {
            code: "BR",
            name: "Brazil",
            dial_code: "+55",
            phone_pattern: pattern(r"^[1-9][0-9]{10}$"),
            placeholder: "11987654321",
            max_length: 11,
        },
        CountryConfig {
            code: "GB",
            name: "United Kingdom",
            dial_code: "+44",
            phone_pattern: pattern(r"^[1-9][0-9]{9,10}$"),
            placeholder: "7911123456",
            max_length: 11,
        },
        CountryConfig {
            code: "DE",
            name: "Germany",
            dial_code: "+49",
            phone_pattern: pattern(r"^[1-9][0-9]{9,11}$"),
            placeholder: "15112345678",
            max_length: 12,
        },
        CountryConfig {
            code: "FR",
            name: "France",
            dial_code: "+33",
            phone_pattern: pattern(r"^[1-9][0-9]{8}$"),
            placeholder: "612345678",
            max_length: 9,
        },
    ]
});

/// Look up a country configuration by ISO code
pub fn find(code: &str) -> Option<&'static CountryConfig> {
    COUNTRY_CONFIGS.iter().find(|c| c.code == code)
}

/// All supported countries, in configuration order
pub fn all() -> &'static [CountryConfig] {
    COUNTRY_CONFIGS.as_slice()
}
