pub mod patterns;
pub mod rules;
pub mod surface;

use std::collections::BTreeMap;

use checkout_types::{Banner, FieldId, FieldReport, Outcome, SUCCESS_BANNER_TTL_MS};

pub use surface::Surface;

/// FormValidator entry point
///
/// Owns the rendering surface, the per-field reports of the last submit, and
/// the pending success-banner dismissal. All nine field rules run on every
/// submit; reports are recomputed from scratch each time.
pub struct FormValidator<S: Surface> {
    surface: S,
    reports: BTreeMap<FieldId, FieldReport>,
    dismiss: Option<S::Dismiss>,
}

impl<S: Surface> FormValidator<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            reports: BTreeMap::new(),
            dismiss: None,
        }
    }

    /// Runs one validation pass over all nine fields.
    ///
    /// On success the surface shows the success banner, resets the form, and
    /// a dismissal is scheduled for [`SUCCESS_BANNER_TTL_MS`] later. On
    /// failure the danger banner is shown and field values are left alone.
    /// Any dismissal still pending from an earlier submit is cancelled first.
    pub fn submit(&mut self) -> Outcome {
        if let Some(handle) = self.dismiss.take() {
            self.surface.cancel_banner_dismiss(handle);
        }

        self.reports.clear();
        for field in FieldId::ALL {
            let raw = self.surface.field_value(field);
            let report = rules::validate_field(field, raw.trim());
            match report.message.as_deref() {
                Some(message) => self.surface.set_error(field, message),
                None => self.surface.clear_error(field),
            }
            self.reports.insert(field, report);
        }

        self.surface.clear_banner();

        let invalid = self.invalid_count();
        if invalid == 0 {
            self.surface.show_banner(Banner::Success);
            self.surface.reset_fields();
            self.dismiss = Some(self.surface.schedule_banner_dismiss(SUCCESS_BANNER_TTL_MS));
            Outcome::Accepted
        } else {
            self.surface.show_banner(Banner::Danger);
            Outcome::Rejected { invalid }
        }
    }

    /// Report for one field from the last submit, if any submit has run.
    pub fn report(&self, field: FieldId) -> Option<&FieldReport> {
        self.reports.get(&field)
    }

    /// Reports from the last submit, in field order.
    pub fn reports(&self) -> impl Iterator<Item = &FieldReport> {
        self.reports.values()
    }

    pub fn invalid_count(&self) -> usize {
        self.reports.values().filter(|r| !r.is_valid()).count()
    }

    /// True once a submit has run and every field passed.
    pub fn is_valid(&self) -> bool {
        !self.reports.is_empty() && self.invalid_count() == 0
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
