//! Phone number value type
//!
//! Format: an optional single leading `+` followed by one or more ASCII
//! digits, e.g. `+380501234567` or `0501234567`. No separators, no real
//! numbering-plan checks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Invalid phone number '{0}': expected an optional '+' followed by digits")]
    InvalidFormat(String),
}

/// A syntactically valid phone number
///
/// Equality is exact: `123` and `+123` are different numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validates and wraps a phone number
    pub fn new(value: impl Into<String>) -> Result<Self, PhoneError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(PhoneError::InvalidFormat(value));
        }
        Ok(Self(value))
    }

    /// Checks the sign/digit syntax without allocating
    pub fn is_valid(value: &str) -> bool {
        let digits = value.strip_prefix('+').unwrap_or(value);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_plain_and_plus_prefixed_digits() {
        assert!(PhoneNumber::new("0501234567").is_ok());
        assert!(PhoneNumber::new("+380501234567").is_ok());
        assert!(PhoneNumber::new("0").is_ok());
    }

    #[test]
    fn accepts_leading_zeros_and_long_numbers() {
        let long = "9".repeat(64);
        assert!(PhoneNumber::new("000123").is_ok());
        assert!(PhoneNumber::new(long).is_ok());
    }

    #[test]
    fn rejects_signs_separators_and_letters() {
        for bad in ["", "+", "++1", "-123", "+-1", "12 34", "12-34", "1_000", "abc", "12a", "١٢٣"] {
            assert_eq!(
                PhoneNumber::new(bad),
                Err(PhoneError::InvalidFormat(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn plus_prefix_is_part_of_identity() {
        let plain: PhoneNumber = "123".parse().unwrap();
        let intl: PhoneNumber = "+123".parse().unwrap();

        assert_ne!(plain, intl);
        assert_eq!(intl.to_string(), "+123");
    }

    #[test]
    fn deserialize_validates() {
        let ok: PhoneNumber = serde_json::from_str("\"+44\"").unwrap();
        assert_eq!(ok.as_str(), "+44");
        assert!(serde_json::from_str::<PhoneNumber>("\"44-1\"").is_err());
    }

    proptest! {
        #[test]
        fn any_digit_string_is_valid(digits in "[0-9]{1,30}", plus in any::<bool>()) {
            let raw = if plus { format!("+{digits}") } else { digits };
            let phone = PhoneNumber::new(raw.clone()).unwrap();
            prop_assert_eq!(phone.as_str(), raw.as_str());
        }

        #[test]
        fn strings_with_a_non_digit_are_rejected(prefix in "[0-9]{0,5}", bad in "[^0-9+]", suffix in "[0-9]{0,5}") {
            let raw = format!("{prefix}{bad}{suffix}");
            prop_assert!(PhoneNumber::new(raw).is_err());
        }
    }
}
