//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Maximum pause before the download confirmation.
const MAX_PAUSE_SECONDS: u64 = 60;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(api_id) = config.telegram.api_id {
        validate_api_id(&api_id.to_string())?;
    }

    if let Some(api_hash) = &config.telegram.api_hash {
        validate_api_hash(api_hash)?;
    }

    if let Some(phone) = &config.telegram.phone {
        validate_phone(phone)?;
    }

    if config.options.pause_seconds > MAX_PAUSE_SECONDS {
        return Err(Error::ConfigValidation {
            field: "pause_seconds".to_string(),
            message: format!(
                "Pause must be at most {} seconds (got {})",
                MAX_PAUSE_SECONDS, config.options.pause_seconds
            ),
        });
    }

    Ok(())
}

/// Validate an API id and return it as a number.
pub fn validate_api_id(input: &str) -> Result<i32> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::MissingConfig("api_id".to_string()));
    }

    match input.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::ConfigValidation {
            field: "api_id".to_string(),
            message: format!("API id must be a positive number (got '{}')", input),
        }),
    }
}

/// Validate an API hash (32 hexadecimal characters).
pub fn validate_api_hash(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::MissingConfig("api_hash".to_string()));
    }

    let hash_pattern = Regex::new(r"^[0-9a-fA-F]{32}$").unwrap();
    if !hash_pattern.is_match(input) {
        return Err(Error::ConfigValidation {
            field: "api_hash".to_string(),
            message: "API hash must be 32 hexadecimal characters".to_string(),
        });
    }

    Ok(input.to_string())
}

/// Validate a phone number in international format.
pub fn validate_phone(input: &str) -> Result<String> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    let phone_pattern = Regex::new(r"^\+?[0-9]{5,15}$").unwrap();
    if !phone_pattern.is_match(&cleaned) {
        return Err(Error::ConfigValidation {
            field: "phone".to_string(),
            message: format!(
                "Phone number '{}' must be in international format, e.g. +15551234567",
                input.trim()
            ),
        });
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_api_id() {
        assert_eq!(validate_api_id("123456").unwrap(), 123456);
        assert_eq!(validate_api_id("  42 \n").unwrap(), 42);
    }

    #[test]
    fn test_invalid_api_id() {
        assert!(matches!(validate_api_id(""), Err(Error::MissingConfig(_))));
        assert!(validate_api_id("abc").is_err());
        assert!(validate_api_id("0").is_err());
        assert!(validate_api_id("-5").is_err());
    }

    #[test]
    fn test_api_hash() {
        assert_eq!(
            validate_api_hash("0123456789abcdef0123456789ABCDEF\n").unwrap(),
            "0123456789abcdef0123456789ABCDEF"
        );
        assert!(validate_api_hash("tooshort").is_err());
        assert!(validate_api_hash("zz23456789abcdef0123456789abcdef").is_err());
    }

    #[test]
    fn test_phone() {
        assert_eq!(validate_phone("+1 555-123-4567").unwrap(), "+15551234567");
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("+12").is_err());
    }

    #[test]
    fn test_validate_config_pause_limit() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.options.pause_seconds = 600;
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }
}
