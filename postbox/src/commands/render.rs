use postbox_config::Config;
use postbox_core_contact_form_contracts::ContactFormFeatureService;
use postbox_models::contact_form::ContactFormState;

use crate::environment;

/// Print the HTML of a freshly mounted contact form.
pub fn render(config: &Config) -> anyhow::Result<()> {
    let contact_form = environment::contact_form_feature(config)?;
    let html = contact_form.render(&ContactFormState::default())?;
    println!("{html}");
    Ok(())
}
