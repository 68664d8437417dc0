use postbox_config::Config;
use postbox_core_contact_form_impl::{
    validation::ContactFormValidationServiceImpl, ContactFormFeatureConfig,
    ContactFormFeatureServiceImpl,
};
use postbox_templates_impl::TemplateServiceImpl;

pub type Template = TemplateServiceImpl;
pub type ContactFormValidation = ContactFormValidationServiceImpl;
pub type ContactFormFeature = ContactFormFeatureServiceImpl<ContactFormValidation, Template>;

pub fn contact_form_feature(config: &Config) -> anyhow::Result<ContactFormFeature> {
    let template = TemplateServiceImpl::new()?;

    let contact_form_feature_config = ContactFormFeatureConfig {
        title: config.form.title.as_str().into(),
        submit_label: config.form.submit_label.as_str().into(),
    };

    Ok(ContactFormFeatureServiceImpl::new(
        ContactFormValidationServiceImpl,
        template,
        contact_form_feature_config,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provide_contact_form_feature() {
        let config = postbox_config::load_paths(&[] as &[&str]).unwrap();
        contact_form_feature(&config).unwrap();
    }
}
