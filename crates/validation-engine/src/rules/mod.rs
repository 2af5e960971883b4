pub mod contact;
pub mod identity;
pub mod payment;

use checkout_types::{FieldId, FieldReport};

/// Applies the rule for `field` to an already-trimmed value.
pub fn validate_field(field: FieldId, value: &str) -> FieldReport {
    match field {
        FieldId::FirstName => identity::check_first_name(value),
        FieldId::LastName => identity::check_last_name(value),
        FieldId::Email => contact::check_email(value),
        FieldId::Country => contact::check_country(value),
        FieldId::PostalCode => contact::check_postal_code(value),
        FieldId::PhoneNumber => contact::check_phone_number(value),
        FieldId::CreditCard => payment::check_credit_card(value),
        FieldId::SecurityCode => payment::check_security_code(value),
        FieldId::ExpirationDate => payment::check_expiry_date(value),
    }
}
