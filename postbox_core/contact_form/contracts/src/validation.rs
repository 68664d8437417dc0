use postbox_models::contact_form::{
    ContactFormErrors, ContactFormField, ContactFormSubmission, ContactFormValidationError,
    ContactFormValues,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormValidationService: Send + Sync + 'static {
    /// Check the value of a single field against its rule.
    fn validate_field(
        &self,
        field: ContactFormField,
        value: &str,
    ) -> Result<(), ContactFormValidationError>;

    /// Check every field and return the validated snapshot, or the errors of
    /// all invalid fields.
    fn validate(
        &self,
        values: &ContactFormValues,
    ) -> Result<ContactFormSubmission, ContactFormErrors>;
}

#[cfg(feature = "mock")]
impl MockContactFormValidationService {
    pub fn with_validate_field(
        mut self,
        field: ContactFormField,
        value: String,
        result: Result<(), ContactFormValidationError>,
    ) -> Self {
        self.expect_validate_field()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::function(move |x: &str| x == value),
            )
            .return_once(move |_, _| result);
        self
    }

    pub fn with_validate(
        mut self,
        values: ContactFormValues,
        result: Result<ContactFormSubmission, ContactFormErrors>,
    ) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(values))
            .return_once(move |_| result);
        self
    }
}
