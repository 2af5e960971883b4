/// How long the success banner stays on screen before auto-dismissal.
pub const SUCCESS_BANNER_TTL_MS: u32 = 4_000;

/// The nine checkout fields, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Country,
    PostalCode,
    PhoneNumber,
    CreditCard,
    SecurityCode,
    ExpirationDate,
}

impl FieldId {
    pub const ALL: [FieldId; 9] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Country,
        FieldId::PostalCode,
        FieldId::PhoneNumber,
        FieldId::CreditCard,
        FieldId::SecurityCode,
        FieldId::ExpirationDate,
    ];

    /// Stable element id of the field's input in the page markup.
    pub fn dom_id(&self) -> &'static str {
        match self {
            FieldId::FirstName => "first-name",
            FieldId::LastName => "last-name",
            FieldId::Email => "email",
            FieldId::Country => "country",
            FieldId::PostalCode => "postal-code",
            FieldId::PhoneNumber => "phone-number",
            FieldId::CreditCard => "credit-card",
            FieldId::SecurityCode => "security-code",
            FieldId::ExpirationDate => "expiration-date",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|field| field.dom_id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    Valid,
    Invalid,
}

/// Per-field outcome of one validation pass. Recomputed on every submit,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldReport {
    pub field: FieldId,
    pub verdict: Verdict,
    pub message: Option<String>,
}

impl FieldReport {
    pub fn valid(field: FieldId) -> Self {
        Self {
            field,
            verdict: Verdict::Valid,
            message: None,
        }
    }

    pub fn invalid(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            verdict: Verdict::Invalid,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }
}

/// The aggregate banner shown below the submit control after a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Banner {
    Success,
    Danger,
}

impl Banner {
    pub fn css_class(&self) -> &'static str {
        match self {
            Banner::Success => "alert alert-success",
            Banner::Danger => "alert alert-danger",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Banner::Success => {
                "Your data has been submitted, thank you for filling out your information!"
            }
            Banner::Danger => "Unable to submit form, please correct data",
        }
    }
}

/// Result of a whole-form submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Accepted,
    Rejected { invalid: usize },
}
