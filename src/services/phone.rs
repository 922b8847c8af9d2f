//! Phone number validation and normalization

use thiserror::Error;

use crate::models::country;

/// Why a phone number was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Unsupported country code: {0}")]
    UnsupportedCountry(String),

    #[error("Phone number cannot be empty")]
    EmptyNumber,

    #[error("Phone number too long")]
    TooLong,

    #[error("Invalid format for {country}. Example: {example}")]
    InvalidFormat {
        country: &'static str,
        example: &'static str,
    },
}

/// Validate a local phone number against the country's dialing rules and
/// normalize it to the full international form (dial code + cleaned digits).
/// The input may contain spaces, dashes or parentheses; only digits count.
pub fn validate_international_phone(
    local_number: &str,
    country_code: &str,
) -> Result<String, PhoneError> {
    let config = country::find(country_code)
        .ok_or_else(|| PhoneError::UnsupportedCountry(country_code.to_string()))?;

    let cleaned: String = local_number.chars().filter(|c| c.is_ascii_digit()).collect();

    if cleaned.is_empty() {
        return Err(PhoneError::EmptyNumber);
    }

    if cleaned.len() > config.max_length {
        return Err(PhoneError::TooLong);
    }

    if !config.phone_pattern.is_match(&cleaned) {
        return Err(PhoneError::InvalidFormat {
            country: config.name,
            example: config.placeholder,
        });
    }

    Ok(format!("{}{}", config.dial_code, cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers_per_country() {
        let cases = [
            ("912345678", "PT", "+351912345678"),
            ("11987654321", "BR", "+5511987654321"),
            ("7911123456", "GB", "+447911123456"),
            ("79111234567", "GB", "+4479111234567"),
            ("15112345678", "DE", "+4915112345678"),
            ("612345678", "FR", "+33612345678"),
        ];

        for (local, code, expected) in cases {
            let full = validate_international_phone(local, code)
                .unwrap_or_else(|e| panic!("{code} {local} rejected: {e}"));
            assert_eq!(full, expected);

            let dial_code = country::find(code).unwrap().dial_code;
            assert_eq!(full.len(), dial_code.len() + local.len());
        }
    }

    #[test]
    fn test_formatting_characters_stripped() {
        assert_eq!(
            validate_international_phone("(91) 234-56 78", "PT"),
            Ok("+351912345678".to_string())
        );
    }

    #[test]
    fn test_empty_number() {
        assert_eq!(
            validate_international_phone("", "PT"),
            Err(PhoneError::EmptyNumber)
        );
        // Non-digit input cleans down to nothing
        assert_eq!(
            validate_international_phone("--- ---", "FR"),
            Err(PhoneError::EmptyNumber)
        );
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_international_phone("9123456789", "PT"),
            Err(PhoneError::TooLong)
        );
    }

    #[test]
    fn test_leading_zero_rejected() {
        let err = validate_international_phone("012345678", "PT").unwrap_err();
        assert_eq!(
            err,
            PhoneError::InvalidFormat {
                country: "Portugal",
                example: "912345678",
            }
        );
        assert!(err.to_string().contains("Portugal"));
        assert!(err.to_string().contains("912345678"));
    }

    #[test]
    fn test_unsupported_country() {
        assert_eq!(
            validate_international_phone("2025550123", "US"),
            Err(PhoneError::UnsupportedCountry("US".to_string()))
        );
    }
}
