use checkout_types::{FieldId, FieldReport};

/// Shortest accepted name, in characters.
pub const MIN_NAME_LEN: usize = 3;

pub const FIRST_NAME_TOO_SHORT: &str = "First name must be minimum 3 characters long";
pub const LAST_NAME_TOO_SHORT: &str = "Last name must be minimum 3 characters long";

pub fn check_first_name(value: &str) -> FieldReport {
    if value.chars().count() < MIN_NAME_LEN {
        FieldReport::invalid(FieldId::FirstName, FIRST_NAME_TOO_SHORT)
    } else {
        FieldReport::valid(FieldId::FirstName)
    }
}

pub fn check_last_name(value: &str) -> FieldReport {
    if value.chars().count() < MIN_NAME_LEN {
        FieldReport::invalid(FieldId::LastName, LAST_NAME_TOO_SHORT)
    } else {
        FieldReport::valid(FieldId::LastName)
    }
}
