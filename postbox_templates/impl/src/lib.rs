use std::sync::Arc;

use anyhow::Context;
use postbox_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    /// Compile all embedded templates.
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(std::iter::once(BASE_TEMPLATE).chain(TEMPLATES.iter().copied()))
            .context("Failed to compile templates")?;
        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        trace!(template = T::NAME, "render");
        let context = tera::Context::from_serialize(template)?;
        self.tera
            .render(T::NAME, &context)
            .with_context(|| format!("Failed to render template {}", T::NAME))
    }
}
