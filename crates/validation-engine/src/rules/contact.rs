use crate::patterns;
use checkout_types::{FieldId, FieldReport};

/// Shortest accepted phone number, in characters.
pub const MIN_PHONE_LEN: usize = 9;

pub const EMAIL_INVALID: &str = "Email is not valid";
pub const COUNTRY_REQUIRED: &str = "Country is required";
pub const POSTAL_CODE_REQUIRED: &str = "Postal code is required";
pub const PHONE_TOO_SHORT: &str = "Phone number must have minimum 9 digits";

pub fn check_email(value: &str) -> FieldReport {
    if patterns::is_email(value) {
        FieldReport::valid(FieldId::Email)
    } else {
        FieldReport::invalid(FieldId::Email, EMAIL_INVALID)
    }
}

pub fn check_country(value: &str) -> FieldReport {
    if value.is_empty() {
        FieldReport::invalid(FieldId::Country, COUNTRY_REQUIRED)
    } else {
        FieldReport::valid(FieldId::Country)
    }
}

pub fn check_postal_code(value: &str) -> FieldReport {
    if value.is_empty() {
        FieldReport::invalid(FieldId::PostalCode, POSTAL_CODE_REQUIRED)
    } else {
        FieldReport::valid(FieldId::PostalCode)
    }
}

pub fn check_phone_number(value: &str) -> FieldReport {
    if value.chars().count() < MIN_PHONE_LEN {
        FieldReport::invalid(FieldId::PhoneNumber, PHONE_TOO_SHORT)
    } else {
        FieldReport::valid(FieldId::PhoneNumber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_malformed_email() {
        let report = check_email("not-an-email");
        assert_eq!(report.message.as_deref(), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_accepts_plain_email() {
        assert!(check_email("a@b.com").is_valid());
    }

    #[test]
    fn test_flags_empty_country_and_postal_code() {
        assert_eq!(check_country("").message.as_deref(), Some(COUNTRY_REQUIRED));
        assert_eq!(
            check_postal_code("").message.as_deref(),
            Some(POSTAL_CODE_REQUIRED)
        );
    }

    #[test]
    fn test_accepts_any_nonempty_country_and_postal_code() {
        assert!(check_country("US").is_valid());
        assert!(check_postal_code("12345").is_valid());
    }

    #[test]
    fn test_flags_short_phone_number() {
        let report = check_phone_number("12345678");
        assert_eq!(report.message.as_deref(), Some(PHONE_TOO_SHORT));
    }

    #[test]
    fn test_accepts_nine_digit_phone_number() {
        assert!(check_phone_number("123456789").is_valid());
    }
}
