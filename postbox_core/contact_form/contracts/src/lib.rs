use postbox_models::contact_form::{
    ContactFormErrors, ContactFormField, ContactFormState, ContactFormSubmission,
};
use thiserror::Error;

pub mod validation;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormFeatureService: Send + Sync + 'static {
    /// Store the new value of a single field and revalidate only that field.
    ///
    /// The submitted snapshot is left untouched.
    fn change_field(&self, state: &mut ContactFormState, field: ContactFormField, value: String);

    /// Validate all fields and take a snapshot of the values if every field
    /// is valid.
    ///
    /// On failure the errors of the form are replaced by the errors of all
    /// invalid fields and the previous snapshot (if any) is kept.
    fn submit(
        &self,
        state: &mut ContactFormState,
    ) -> Result<ContactFormSubmission, ContactFormSubmitError>;

    /// Render the form, its errors and the submitted snapshot as HTML.
    fn render(&self, state: &ContactFormState) -> anyhow::Result<String>;
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("The contact form contains {} invalid field(s).", .0.len())]
    Invalid(ContactFormErrors),
}
