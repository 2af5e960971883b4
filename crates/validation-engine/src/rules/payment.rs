use crate::patterns;
use checkout_types::{FieldId, FieldReport};

/// Digits in a card number once separators are stripped.
pub const CARD_LEN: usize = 16;
/// Digits in a security code.
pub const SECURITY_CODE_LEN: usize = 3;
/// Characters in an expiry date once separators are stripped (MMYY).
pub const EXPIRY_LEN: usize = 4;

pub const CARD_WRONG_LENGTH: &str = "Credit card must be 16 digits long";
pub const SECURITY_CODE_WRONG_LENGTH: &str = "Security code must be 3 digits long";
pub const EXPIRY_WRONG_LENGTH: &str = "Expiry date must be 4 characters long";

pub fn check_credit_card(value: &str) -> FieldReport {
    let digits = patterns::strip_card_separators(value);
    if digits.chars().count() == CARD_LEN {
        FieldReport::valid(FieldId::CreditCard)
    } else {
        FieldReport::invalid(FieldId::CreditCard, CARD_WRONG_LENGTH)
    }
}

pub fn check_security_code(value: &str) -> FieldReport {
    if value.chars().count() == SECURITY_CODE_LEN {
        FieldReport::valid(FieldId::SecurityCode)
    } else {
        FieldReport::invalid(FieldId::SecurityCode, SECURITY_CODE_WRONG_LENGTH)
    }
}

pub fn check_expiry_date(value: &str) -> FieldReport {
    let compact = patterns::strip_expiry_separators(value);
    if compact.chars().count() == EXPIRY_LEN {
        FieldReport::valid(FieldId::ExpirationDate)
    } else {
        FieldReport::invalid(FieldId::ExpirationDate, EXPIRY_WRONG_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_hyphenated_card() {
        assert!(check_credit_card("1234-5678-9012-3456").is_valid());
    }

    #[test]
    fn test_accepts_spaced_card() {
        assert!(check_credit_card("1234 5678 9012 3456").is_valid());
    }

    #[test]
    fn test_flags_fifteen_digit_card() {
        let report = check_credit_card("1234-5678-9012-345");
        assert_eq!(report.message.as_deref(), Some(CARD_WRONG_LENGTH));
    }

    #[test]
    fn test_flags_wrong_length_security_code() {
        assert!(!check_security_code("12").is_valid());
        assert!(!check_security_code("1234").is_valid());
        assert!(check_security_code("123").is_valid());
    }

    #[test]
    fn test_accepts_slashed_expiry() {
        assert!(check_expiry_date("12/25").is_valid());
        assert!(check_expiry_date("1225").is_valid());
    }

    #[test]
    fn test_flags_wrong_length_expiry() {
        let report = check_expiry_date("1/25");
        assert_eq!(report.message.as_deref(), Some(EXPIRY_WRONG_LENGTH));
    }

    proptest! {
        #[test]
        fn prop_sixteen_digit_cards_pass_with_any_grouping(
            groups in proptest::collection::vec("[0-9]{4}", 4),
            separator in prop::sample::select(vec!["-", " ", ""]),
        ) {
            let card = groups.join(separator);
            prop_assert!(check_credit_card(&card).is_valid());
        }

        #[test]
        fn prop_non_sixteen_digit_cards_fail(digits in "[0-9]{1,15}") {
            prop_assert!(!check_credit_card(&digits).is_valid());
        }
    }
}
