use checkout_types::{Banner, FieldId};

/// Capability interface for everything the validator does to the page.
///
/// The engine never touches the DOM directly. The wasm app binds this to the
/// live document; tests bind it to an in-memory recorder.
pub trait Surface {
    /// Handle for a scheduled banner dismissal. The engine keeps the handle
    /// from the previous submit and cancels it before starting a new pass, so
    /// a stale timer can never remove a banner a later submit created.
    type Dismiss;

    /// Current raw text of a field.
    fn field_value(&self, field: FieldId) -> String;

    /// Attaches or replaces the error annotation for a field. At most one
    /// annotation per field may exist afterwards.
    fn set_error(&mut self, field: FieldId, message: &str);

    /// Removes the field's error annotation if one exists.
    fn clear_error(&mut self, field: FieldId);

    fn show_banner(&mut self, banner: Banner);

    /// Removes whichever banner is currently shown, if any.
    fn clear_banner(&mut self);

    /// Clears all field values back to their defaults.
    fn reset_fields(&mut self);

    fn schedule_banner_dismiss(&mut self, after_ms: u32) -> Self::Dismiss;

    fn cancel_banner_dismiss(&mut self, handle: Self::Dismiss);
}
