use std::sync::Arc;

use postbox_core_contact_form_contracts::{
    validation::ContactFormValidationService, ContactFormFeatureService, ContactFormSubmitError,
};
use postbox_models::contact_form::{ContactFormField, ContactFormState, ContactFormSubmission};
use postbox_templates_contracts::{
    ContactFormFieldTemplate, ContactFormSubmissionTemplate, ContactFormTemplate, TemplateService,
};
use tracing::{debug, trace};

pub mod validation;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default)]
pub struct ContactFormFeatureServiceImpl<Validation, Template> {
    validation: Validation,
    template: Template,
    config: ContactFormFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFormFeatureConfig {
    pub title: Arc<str>,
    pub submit_label: Arc<str>,
}

impl Default for ContactFormFeatureConfig {
    fn default() -> Self {
        Self {
            title: "Contact Form".into(),
            submit_label: "Submit".into(),
        }
    }
}

impl<Validation, Template> ContactFormFeatureServiceImpl<Validation, Template> {
    pub fn new(
        validation: Validation,
        template: Template,
        config: ContactFormFeatureConfig,
    ) -> Self {
        Self {
            validation,
            template,
            config,
        }
    }
}

impl<Validation, Template> ContactFormFeatureService
    for ContactFormFeatureServiceImpl<Validation, Template>
where
    Validation: ContactFormValidationService,
    Template: TemplateService,
{
    fn change_field(&self, state: &mut ContactFormState, field: ContactFormField, value: String) {
        let error = self.validation.validate_field(field, &value).err();
        trace!(%field, valid = error.is_none(), "field changed");

        state.values.set(field, value);
        state.errors.set(field, error);
    }

    fn submit(
        &self,
        state: &mut ContactFormState,
    ) -> Result<ContactFormSubmission, ContactFormSubmitError> {
        match self.validation.validate(&state.values) {
            Ok(submission) => {
                debug!("contact form submitted");
                state.errors.clear();
                state.submission = Some(submission.clone());
                Ok(submission)
            }
            Err(errors) => {
                debug!(invalid_fields = errors.len(), "contact form submission blocked");
                state.errors = errors.clone();
                Err(ContactFormSubmitError::Invalid(errors))
            }
        }
    }

    fn render(&self, state: &ContactFormState) -> anyhow::Result<String> {
        self.template.render(&contact_form_template(&self.config, state))
    }
}

fn contact_form_template(
    config: &ContactFormFeatureConfig,
    state: &ContactFormState,
) -> ContactFormTemplate {
    let fields = ContactFormField::ALL
        .into_iter()
        .map(|field| ContactFormFieldTemplate {
            name: field.name().into(),
            label: field.label().into(),
            required: field.is_required(),
            multiline: field == ContactFormField::Message,
            value: state.values.get(field).into(),
            error: state.errors.get(field).map(ToString::to_string),
        })
        .collect();

    let submission = state
        .submission
        .as_ref()
        .map(|submission| ContactFormSubmissionTemplate {
            first_name: (*submission.first_name).clone(),
            last_name: (*submission.last_name).clone(),
            email: submission.email.to_string(),
            message: submission.message.as_ref().map(|message| (**message).clone()),
        });

    ContactFormTemplate {
        title: config.title.to_string(),
        submit_label: config.submit_label.to_string(),
        fields,
        submission,
    }
}
